//! Generic CRUD page: state, service access, actions and components
//!
//! A page is an instantiation of [`ui::page::CrudPage`] for one
//! [`CrudEntity`](contracts::shared::crud::CrudEntity); everything else in
//! this module is shared by all of them.

pub mod actions;
pub mod error;
pub mod form;
pub mod format;
pub mod hooks;
pub mod import_flow;
pub mod loading;
pub mod query;
pub mod service;
pub mod state;
pub mod ui;

pub use error::{ApiError, FieldErrors, ImportError};
pub use query::{QueryField, QueryKind};
pub use service::{CrudService, HttpCrudService};
pub use state::{ActionConfig, CrudPageState};
pub use ui::data_table::RowAction;
pub use ui::page::{CrudPage, CrudPageConfig};
