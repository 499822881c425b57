use contracts::system::User;
use leptos::prelude::*;

use super::role_assign::RoleAssignDialog;
use crate::shared::crud::{ActionConfig, CrudPage, CrudPageConfig, RowAction};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

/// 用户管理 (`/system/user`)
#[component]
pub fn UsersList() -> impl IntoView {
    let assigning = RwSignal::new(None::<User>);

    let config = CrudPageConfig::<User>::new()
        .category(PAGE_CAT_SYSTEM)
        .actions(ActionConfig::editable().with_export())
        .query(&["username", "nick_name", "phone", "status", "create_time"])
        .row_action(RowAction::new("分配角色", move |user: User| assigning.set(Some(user))));

    view! {
        <CrudPage config=config />
        {move || assigning.get().map(|user| view! {
            <RoleAssignDialog user=user on_close=Callback::new(move |_: ()| assigning.set(None)) />
        })}
    }
}
