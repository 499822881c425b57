use contracts::shared::crud::Payload;
use leptos::prelude::*;
use thaw::*;

use super::field_widget::FieldWidget;
use crate::shared::crud::error::FieldErrors;
use crate::shared::crud::form::{FormMode, FormValues};
use crate::shared::modal_frame::ModalFrame;

/// Create / update / batch-update form.
///
/// Confirm validates locally; invalid fields are marked inline and nothing
/// is emitted. The page owns the service call and closes the modal.
#[component]
pub fn EntityFormModal(
    #[prop(into)] title: Signal<String>,
    form: RwSignal<FormValues>,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<Payload>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let errors = RwSignal::new(FieldErrors::new());
    let (fields, mode) = form.with_untracked(|f| (f.fields().to_vec(), f.mode()));

    let confirm = move || match form.with_untracked(|f| f.into_payload()) {
        Ok(payload) => {
            errors.set(FieldErrors::new());
            on_submit.run(payload);
        }
        Err(e) => errors.set(e),
    };

    let footer = move || {
        view! {
            <Flex gap=FlexGap::Small justify=FlexJustify::End>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "取消"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| confirm() disabled=busy>
                    {move || if busy.get() { "提交中..." } else { "确定" }}
                </Button>
            </Flex>
        }
    };

    view! {
        <ModalFrame title=title on_close=on_cancel close_on_overlay=false footer=footer>
            {(mode == FormMode::Batch).then(|| view! {
                <div class="form__hint">"仅提交已填写的字段，留空的字段保持不变"</div>
            })}
            <form
                class="form form--grid"
                on:submit=move |ev| {
                    ev.prevent_default();
                    confirm();
                }
            >
                {fields
                    .into_iter()
                    .map(|field| view! { <FieldWidget field=field form=form errors=errors /> })
                    .collect_view()}
            </form>
        </ModalFrame>
    }
}
