use contracts::system::Role;
use leptos::prelude::*;

use crate::shared::crud::{ActionConfig, CrudPage, CrudPageConfig};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

/// 角色管理 (`/system/role`)
#[component]
pub fn RolesList() -> impl IntoView {
    let config = CrudPageConfig::<Role>::new()
        .category(PAGE_CAT_SYSTEM)
        .actions(ActionConfig::editable())
        .query(&["role_name", "role_key", "status"]);

    view! { <CrudPage config=config /> }
}
