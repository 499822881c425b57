//! System administration entities

pub mod dict;
pub mod menus;
pub mod options;
pub mod roles;
pub mod tenants;
pub mod users;

pub use dict::{DictDatum, DictType};
pub use menus::Menu;
pub use roles::Role;
pub use tenants::{Tenant, TenantPlan};
pub use users::{User, UserRoles};
