//! System administration pages

pub mod dict;
pub mod menus;
pub mod roles;
pub mod tenants;
pub mod users;
