//! Input widget of one form field, chosen by its type

use contracts::shared::metadata::{FieldMetadata, FieldType, RefSpec};
use leptos::prelude::*;
use thaw::*;

use crate::shared::crud::error::FieldErrors;
use crate::shared::crud::form::{FieldInput, FormMode, FormValues};
use crate::shared::crud::hooks::use_ref_options;

#[component]
pub fn FieldWidget(
    field: &'static FieldMetadata,
    form: RwSignal<FormValues>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let name = field.name;
    let required = field.validation.required && form.with_untracked(|f| f.mode()) != FormMode::Batch;
    let placeholder = field.ui.placeholder.unwrap_or_default();
    let text = move || form.with(|f| f.text(name));
    let set_text = move |ev: leptos::ev::Event| form.update(|f| f.set_text(name, event_target_value(&ev)));

    let input = match field.field_type {
        FieldType::LongText => view! {
            <textarea class="form__textarea" rows="3" prop:value=text on:input=set_text></textarea>
        }
        .into_any(),
        FieldType::Date => view! {
            <input class="form__input" type="date" prop:value=text on:change=set_text />
        }
        .into_any(),
        FieldType::Integer | FieldType::Decimal | FieldType::Money | FieldType::Percent => view! {
            <input
                class="form__input text-right"
                inputmode="decimal"
                placeholder=placeholder
                prop:value=text
                on:input=set_text
            />
        }
        .into_any(),
        FieldType::Enum => {
            let options = field.enum_values.unwrap_or_default();
            view! {
                <select class="form__select" prop:value=text on:change=set_text>
                    <option value="">"请选择"</option>
                    {options
                        .iter()
                        .map(|o| {
                            let value = o.value;
                            view! {
                                <option value=value selected=move || form.with(|f| f.text(name) == value)>
                                    {o.label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        FieldType::Bool => view! {
            <select
                class="form__select"
                prop:value=text
                on:change=move |ev| {
                    let flag = match event_target_value(&ev).as_str() {
                        "true" => Some(true),
                        "false" => Some(false),
                        _ => None,
                    };
                    form.update(|f| f.set(name, FieldInput::Flag(flag)));
                }
            >
                <option value="">"请选择"</option>
                <option value="true">"是"</option>
                <option value="false">"否"</option>
            </select>
        }
        .into_any(),
        FieldType::Reference => match field.reference {
            Some(spec) => view! { <RefSelect spec=spec form=form name=name /> }.into_any(),
            None => view! { <input class="form__input" prop:value=text on:input=set_text /> }.into_any(),
        },
        FieldType::IdList => match field.reference {
            Some(spec) => view! { <IdChecklist spec=spec form=form name=name /> }.into_any(),
            None => view! { <span class="form__hint">"—"</span> }.into_any(),
        },
        _ => view! {
            <input class="form__input" placeholder=placeholder prop:value=text on:input=set_text />
        }
        .into_any(),
    };

    view! {
        <div class="form__group">
            <Label>
                {field.label}
                {required.then(|| view! { <span class="form__required">"*"</span> })}
            </Label>
            {input}
            {move || errors.with(|e| e.get(name).map(|msg| view! { <div class="form__error">{msg.to_string()}</div> }))}
        </div>
    }
}

#[component]
fn RefSelect(spec: RefSpec, form: RwSignal<FormValues>, name: &'static str) -> impl IntoView {
    let options = use_ref_options(spec);

    view! {
        <select
            class="form__select"
            prop:value=move || form.with(|f| f.text(name))
            on:change=move |ev| form.update(|f| f.set_text(name, event_target_value(&ev)))
        >
            <option value="">"请选择"</option>
            <For
                each=move || options.get()
                key=|o| o.value.clone()
                children=move |o| {
                    let value = o.value.clone();
                    view! {
                        <option
                            value=o.value.clone()
                            selected=move || form.with(|f| f.text(name) == value)
                        >
                            {o.label}
                        </option>
                    }
                }
            />
        </select>
    }
}

/// Many-to-many field: one checkbox per referenced record
#[component]
fn IdChecklist(spec: RefSpec, form: RwSignal<FormValues>, name: &'static str) -> impl IntoView {
    let options = use_ref_options(spec);

    let checked_ids = move || match form.with(|f| f.input(name).cloned()) {
        Some(FieldInput::Ids(ids)) => ids,
        _ => Vec::new(),
    };

    let toggle = move |id: String, checked: bool| {
        let mut ids = checked_ids();
        ids.retain(|x| *x != id);
        if checked {
            ids.push(id);
        }
        form.update(|f| f.set(name, FieldInput::Ids(ids)));
    };

    view! {
        <div class="form__checklist">
            <For
                each=move || options.get()
                key=|o| o.value.clone()
                children=move |o| {
                    let id = o.value.clone();
                    let id_for_change = o.value.clone();
                    view! {
                        <label class="form__check">
                            <input
                                type="checkbox"
                                prop:checked=move || checked_ids().contains(&id)
                                on:change=move |ev| toggle(id_for_change.clone(), event_target_checked(&ev))
                            />
                            {o.label}
                        </label>
                    }
                }
            />
        </div>
    }
}
