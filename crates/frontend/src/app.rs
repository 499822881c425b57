use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::{provide_app_config, AppConfig};
use crate::shared::notify::{NotificationHost, NotificationService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("api base: {}", config.api_base);

    provide_context(NotificationService::new(config.notice_ttl_ms));
    provide_app_config(config);
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
        <NotificationHost />
    }
}
