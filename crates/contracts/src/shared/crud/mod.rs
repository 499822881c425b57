//! Wire contract shared by every CRUD service

pub mod batch;
pub mod entity;
pub mod filters;
pub mod import;
pub mod list;

pub use batch::{BatchIds, BatchUpdate, Payload};
pub use entity::{opt_string_or_number, string_or_number, vec_string_or_number, CrudEntity, EntityId};
pub use filters::{normalize_filters, Filters};
pub use import::ImportRow;
pub use list::{ListQuery, ListResponse, PageRequest, SortOrder, SortSpec};
