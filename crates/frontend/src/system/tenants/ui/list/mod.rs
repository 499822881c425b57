use contracts::system::Tenant;
use leptos::prelude::*;

use crate::shared::crud::{ActionConfig, CrudPage, CrudPageConfig};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

/// 租户管理 (`/system/tenant`)
#[component]
pub fn TenantsList() -> impl IntoView {
    let config = CrudPageConfig::<Tenant>::new()
        .category(PAGE_CAT_SYSTEM)
        .actions(ActionConfig::editable().with_export())
        .query(&["tenant_name", "contact_name", "status", "expire_time"]);

    view! { <CrudPage config=config /> }
}
