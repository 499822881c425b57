use contracts::system::options::ROLE_REF;
use contracts::system::{User, UserRoles};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::crud::hooks::use_ref_options;
use crate::shared::crud::loading::{CancelToken, LoadingGuard};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notify::use_notifications;
use crate::system::users::api::{fetch_user_roles, save_user_roles};

/// Role checkboxes of one user, saved as a whole
#[component]
pub fn RoleAssignDialog(user: User, on_close: Callback<()>) -> impl IntoView {
    let notices = use_notifications();
    let token = CancelToken::for_current_owner();
    let roles = RwSignal::new(UserRoles::new(user.id.clone(), Vec::new()));
    let options = use_ref_options(ROLE_REF);
    let loading = RwSignal::new(false);
    let saving = RwSignal::new(false);

    {
        let user_id = user.id.clone();
        let token = token.clone();
        spawn_local(async move {
            let guard = LoadingGuard::new(loading);
            let result = fetch_user_roles(&user_id).await;
            if token.is_cancelled() {
                guard.disarm();
                return;
            }
            match result {
                Ok(current) => {
                    let _ = roles.try_set(current);
                }
                Err(e) => notices.error(format!("加载用户角色失败: {}", e)),
            }
        });
    }

    let save = move || {
        let token = token.clone();
        let current = roles.get_untracked();
        spawn_local(async move {
            let guard = LoadingGuard::new(saving);
            let result = save_user_roles(&current).await;
            if token.is_cancelled() {
                guard.disarm();
                return;
            }
            match result {
                Ok(()) => {
                    notices.success("角色分配成功");
                    on_close.run(());
                }
                Err(e) => notices.error(e.to_string()),
            }
        });
    };

    let title = format!("分配角色 · {}", user.username);

    view! {
        <ModalFrame
            title=title
            on_close=on_close
            width=480
            footer=move || {
                let save = save.clone();
                view! {
                    <Flex gap=FlexGap::Small justify=FlexJustify::End>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                            "取消"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| save()
                            disabled=Signal::derive(move || saving.get() || loading.get())
                        >
                            "保存"
                        </Button>
                    </Flex>
                }
            }
        >
            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
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
                                        prop:checked=move || roles.with(|r| r.has(&id))
                                        on:change=move |_| roles.update(|r| r.toggle(&id_for_change))
                                    />
                                    {o.label}
                                </label>
                            }
                        }
                    />
                </div>
            </Show>
        </ModalFrame>
    }
}
