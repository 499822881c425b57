use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Modal container: overlay, titled surface, body and optional footer.
///
/// The create / update / batch-update forms, the import dialog and the
/// role-assignment dialog all render through it.
#[component]
pub fn ModalFrame(
    #[prop(into)] title: Signal<String>,
    /// Called on the close button and on overlay click
    on_close: Callback<()>,
    /// Close when clicking on the overlay (default: true).
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    /// Surface width in px (default: 640).
    #[prop(optional)]
    width: Option<u32>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<&'static str>,
    /// Buttons row under the body
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let width = width.unwrap_or(640);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay itself
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close =
            close_on_overlay && overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Deferred: the overlay must not be removed during its own click dispatch
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let modal_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=modal_class
                style=format!("position: relative; width: {}px;", width)
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class="modal__header">
                    <h2 class="modal__title">{move || title.get()}</h2>
                    <button class="modal__close" title="关闭" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
                {footer.map(|footer| view! { <div class="modal__footer">{footer.run()}</div> })}
            </div>
        </div>
    }
}
