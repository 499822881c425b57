//! Metadata types for describing CRUD entities
//!
//! Every entity of the console is described by a static [`EntityDescriptor`]
//! and a static slice of [`FieldMetadata`]. Tables, forms, the detail drawer
//! and the import preview are all rendered from this data.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::metadata::EntityDescriptor;
//!
//! let descriptor: &EntityDescriptor = Stock::descriptor();
//! for field in descriptor.list_fields() {
//!     println!("{}: {}", field.name, field.label);
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::{FieldSource, FieldType};
pub use types::{EntityDescriptor, EnumOption, FieldMetadata, FieldUiMetadata, RefSpec};
pub use validation::ValidationRules;
