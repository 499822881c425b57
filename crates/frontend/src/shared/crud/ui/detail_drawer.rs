use contracts::shared::crud::Payload;
use contracts::shared::metadata::FieldMetadata;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

use crate::shared::crud::format::format_value;

/// Read-only side panel with every detail field of one fetched record
#[component]
pub fn DetailDrawer(
    #[prop(into)] title: String,
    fields: Vec<&'static FieldMetadata>,
    #[prop(into)] record: Signal<Option<Payload>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let fields = StoredValue::new(fields);

    view! {
        <div class="drawer-overlay" on:click=move |_| on_close.run(())>
            <aside class="drawer details-container" on:click=|e| e.stop_propagation()>
                <div class="details-header">
                    <h3 class="drawer__title">{title}</h3>
                    <button class="modal__close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <div class="drawer__body">
                    {move || {
                        if loading.get() {
                            return view! { <div class="drawer__loading"><Spinner /></div> }.into_any();
                        }
                        if let Some(err) = error.get() {
                            return view! { <div class="alert alert--error">{err}</div> }.into_any();
                        }
                        match record.get() {
                            Some(record) => view! {
                                <dl class="detail-list">
                                    {fields
                                        .get_value()
                                        .into_iter()
                                        .map(|field| {
                                            let value = record.get(field.name).cloned().unwrap_or(Value::Null);
                                            view! {
                                                <dt class="detail-list__label">{field.label}</dt>
                                                <dd class="detail-list__value">{format_value(field, &value)}</dd>
                                            }
                                        })
                                        .collect_view()}
                                </dl>
                            }
                            .into_any(),
                            None => view! { <div class="table-empty">"暂无数据"</div> }.into_any(),
                        }
                    }}
                </div>
            </aside>
        </div>
    }
}
