//! Navigation sidebar with collapsible menu groups

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: &'static [(&'static str, &'static str)], // (href, label)
}

const MENU_GROUPS: &[MenuGroup] = &[
    MenuGroup {
        id: "stock",
        label: "股票数据",
        icon: "stock",
        items: &[("/stock", "股票列表")],
    },
    MenuGroup {
        id: "report",
        label: "财务报表",
        icon: "report",
        items: &[
            ("/report/balance-sheet", "资产负债表"),
            ("/report/income-statement", "利润表"),
            ("/report/cash-flow", "现金流量表"),
        ],
    },
    MenuGroup {
        id: "ranking",
        label: "排行榜",
        icon: "ranking",
        items: &[
            ("/ranking/cash", "现金排行"),
            ("/ranking/multiple-factor", "多因子排行"),
        ],
    },
    MenuGroup {
        id: "system",
        label: "系统管理",
        icon: "settings",
        items: &[
            ("/system/user", "用户管理"),
            ("/system/role", "角色管理"),
            ("/system/menu", "菜单管理"),
            ("/system/dict", "字典管理"),
            ("/system/tenant", "租户管理"),
            ("/system/tenant-plan", "租户套餐"),
        ],
    },
];

/// `href` is the current route or one of its sub-pages
fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href
        || pathname
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let expanded_groups = RwSignal::new(MENU_GROUPS.iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <div class="app-sidebar__content">
            {MENU_GROUPS
                .iter()
                .map(|group| {
                    let gid = group.id;
                    let items = group.items;
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    pathname.with(|p| items.iter().any(|(href, _)| is_active(p, href)))
                                }
                                style:padding-left="12px"
                                on:click=move |_| {
                                    expanded_groups.update(|ids| {
                                        if let Some(pos) = ids.iter().position(|x| *x == gid) {
                                            ids.remove(pos);
                                        } else {
                                            ids.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || expanded_groups.with(|ids| ids.contains(&gid))
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=move || expanded_groups.with(|ids| ids.contains(&gid))>
                                <div class="app-sidebar__children">
                                    {items
                                        .iter()
                                        .map(|&(href, label)| {
                                            view! {
                                                <A href=href attr:class="app-sidebar__link">
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || pathname.with(|p| is_active(p, href))
                                                        style:padding-left="34px"
                                                    >
                                                        <span>{label}</span>
                                                    </div>
                                                </A>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_pages_keep_their_list_active() {
        assert!(is_active("/ranking/cash", "/ranking/cash"));
        assert!(is_active("/ranking/cash/detail/600000", "/ranking/cash"));
        assert!(is_active("/system/dict/data", "/system/dict"));
        assert!(!is_active("/system/tenant-plan", "/system/tenant"));
        assert!(!is_active("/stock", "/ranking/cash"));
    }

    #[test]
    fn every_menu_item_is_routed_once() {
        let mut hrefs: Vec<_> = MENU_GROUPS.iter().flat_map(|g| g.items.iter().map(|(h, _)| *h)).collect();
        let count = hrefs.len();
        hrefs.sort();
        hrefs.dedup();
        assert_eq!(hrefs.len(), count);
    }
}
