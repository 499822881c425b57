use crate::shared::icons::icon;
use contracts::shared::crud::list::total_pages;
use leptos::prelude::*;

/// Pagination bar under the data table.
///
/// Pages are 1-based. Every change is reported as `(page, page_size)`; a
/// page-size change is sent with the current page and the caller decides
/// where to land.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    #[prop(into)]
    page_size: Signal<u32>,

    /// Total number of rows
    #[prop(into)]
    total_count: Signal<u64>,

    on_change: Callback<(u32, u32)>,

    page_size_options: Vec<u32>,
) -> impl IntoView {
    let pages = Signal::derive(move || total_pages(total_count.get(), page_size.get()));
    let go = move |page: u32| on_change.run((page, page_size.get_untracked()));

    view! {
        <div class="pagination-controls">
            <span class="pagination-total">{move || format!("共 {} 条", total_count.get())}</span>
            <button
                class="pagination-btn"
                on:click=move |_| go(1)
                disabled=move || current_page.get() <= 1
                title="首页"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(current_page.get_untracked().saturating_sub(1).max(1))
                disabled=move || current_page.get() <= 1
                title="上一页"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", current_page.get(), pages.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| go(current_page.get_untracked() + 1)
                disabled=move || current_page.get() >= pages.get()
                title="下一页"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(pages.get_untracked())
                disabled=move || current_page.get() >= pages.get()
                title="末页"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let size = event_target_value(&ev)
                        .parse()
                        .unwrap_or_else(|_| page_size.get_untracked());
                    on_change.run((current_page.get_untracked(), size));
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {format!("{} 条/页", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
