pub mod api_utils;
pub mod components;
pub mod config;
pub mod crud;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod modal_frame;
pub mod notify;
pub mod page_frame;
pub mod page_standard;
