//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::use_app_config;

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    use_app_config().api_base
}

/// Build a full API URL from a service path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/service/stock");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_double_slash() {
        assert_eq!(
            join_url("http://localhost:3000/", "/service/stock"),
            "http://localhost:3000/service/stock"
        );
        assert_eq!(join_url("", "service/stock"), "/service/stock");
    }
}
