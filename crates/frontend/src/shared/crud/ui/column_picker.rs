use contracts::shared::metadata::FieldMetadata;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Dropdown of the master column list with one checkbox per column
#[component]
pub fn ColumnPicker(
    columns: Vec<&'static FieldMetadata>,
    #[prop(into)] visible: Signal<Vec<&'static str>>,
    on_toggle: Callback<(&'static str, bool)>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="column-picker">
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| open.update(|o| *o = !*o)
            >
                {icon("columns")}
                " 列设置"
            </Button>
            <Show when=move || open.get()>
                <div class="column-picker__menu">
                    {columns
                        .iter()
                        .map(|field| {
                            let name = field.name;
                            view! {
                                <label class="column-picker__item">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || visible.with(|v| v.contains(&name))
                                        on:change=move |ev| on_toggle.run((name, event_target_checked(&ev)))
                                    />
                                    {field.label}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
