use contracts::system::Menu;
use leptos::prelude::*;

use crate::shared::crud::{ActionConfig, CrudPage, CrudPageConfig};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

/// 菜单管理 (`/system/menu`)
#[component]
pub fn MenusList() -> impl IntoView {
    let config = CrudPageConfig::<Menu>::new()
        .category(PAGE_CAT_SYSTEM)
        .actions(ActionConfig::editable())
        .query(&["menu_name", "menu_type", "status"]);

    view! { <CrudPage config=config /> }
}
