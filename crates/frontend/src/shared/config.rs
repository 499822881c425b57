//! Runtime configuration of the console, provided through context

use leptos::prelude::*;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];
pub const NOTICE_TTL_MS: u32 = 3_000;
/// Backend port used when no explicit base is configured
pub const BACKEND_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
    pub notice_ttl_ms: u32,
}

impl AppConfig {
    /// Compile-time `FINBOARD_API_BASE` wins over the window location
    pub fn from_env() -> Self {
        let api_base = option_env!("FINBOARD_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty())
            .unwrap_or_else(location_api_base);
        Self {
            api_base,
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            notice_ttl_ms: NOTICE_TTL_MS,
        }
    }
}

/// `{protocol}//{hostname}:3000` of the current page
fn location_api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

pub fn provide_app_config(config: AppConfig) {
    provide_context(config);
}

/// Config from context, defaults outside the app tree
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::from_env)
}
