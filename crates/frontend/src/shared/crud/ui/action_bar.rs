use leptos::prelude::*;
use thaw::*;

use crate::shared::crud::state::ActionConfig;
use crate::shared::icons::icon;

/// Toolbar above the table; every button only dispatches to the page.
///
/// Batch modify and batch remove are disabled with nothing selected. Batch
/// remove asks for confirmation inline before calling `on_batch_remove`.
#[component]
pub fn ActionBar(
    config: ActionConfig,
    #[prop(into)] selected_count: Signal<usize>,
    #[prop(into)] busy: Signal<bool>,
    on_create: Callback<()>,
    on_import: Callback<()>,
    on_export: Callback<()>,
    on_batch_modify: Callback<()>,
    on_batch_remove: Callback<()>,
    /// Extra controls on the right (e.g. the column picker)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let confirming = RwSignal::new(false);
    let none_selected = Signal::derive(move || selected_count.get() == 0);

    Effect::new(move |_| {
        if none_selected.get() {
            confirming.set(false);
        }
    });

    view! {
        <div class="action-bar">
            <Flex gap=FlexGap::Small>
                {config.create.then(|| view! {
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| on_create.run(())>
                        {icon("plus")}
                        " 新建"
                    </Button>
                })}
                {config.import.then(|| view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_import.run(())>
                        {icon("upload")}
                        " 导入"
                    </Button>
                })}
                {config.export.then(|| view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_export.run(())
                        disabled=busy
                    >
                        {icon("download")}
                        " 导出"
                    </Button>
                })}
                {config.modify.then(|| view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_batch_modify.run(())
                        disabled=none_selected
                    >
                        {icon("edit")}
                        " 批量修改"
                    </Button>
                })}
                {config.remove.then(|| view! {
                    <Show
                        when=move || confirming.get()
                        fallback=move || view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| confirming.set(true)
                                disabled=none_selected
                            >
                                {icon("trash")}
                                " 批量删除"
                            </Button>
                        }
                    >
                        <span class="action-bar__confirm">
                            {move || format!("确认删除选中的{}条?", selected_count.get())}
                        </span>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| {
                                confirming.set(false);
                                on_batch_remove.run(());
                            }
                            disabled=busy
                        >
                            "确定"
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| confirming.set(false)>
                            "取消"
                        </Button>
                    </Show>
                })}
                {move || {
                    let count = selected_count.get();
                    (count > 0).then(|| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                            {format!("已选 {}", count)}
                        </Badge>
                    })
                }}
            </Flex>
            {children.map(|c| view! { <div class="action-bar__extra">{c()}</div> })}
        </div>
    }
}
