use contracts::system::TenantPlan;
use leptos::prelude::*;

use crate::shared::crud::{ActionConfig, CrudPage, CrudPageConfig};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

/// 租户套餐 (`/system/tenant-plan`)
#[component]
pub fn TenantPlansList() -> impl IntoView {
    let config = CrudPageConfig::<TenantPlan>::new()
        .category(PAGE_CAT_SYSTEM)
        .actions(ActionConfig::editable())
        .query(&["plan_name", "tenant_id", "status"]);

    view! { <CrudPage config=config /> }
}
