//! Core metadata types for entities and their fields
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.
//! Field lists are declared as `const` slices built with the `const fn`
//! builders below, e.g.
//!
//! ```rust,ignore
//! pub const FIELDS: &[FieldMetadata] = &[
//!     FieldMetadata::id(),
//!     FieldMetadata::text("stock_code", "股票代码").required().width(110),
//!     FieldMetadata::money("total_assets", "资产总计"),
//!     FieldMetadata::percent("roe", "ROE").derived(),
//!     FieldMetadata::create_time(),
//! ];
//! ```

use super::field_type::{FieldSource, FieldType};
use super::validation::ValidationRules;

// ============================================================================
// Entity-level metadata
// ============================================================================

/// Static description of one CRUD entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityDescriptor {
    /// Index in the system (e.g. "a001", "sys_user")
    pub index: &'static str,
    /// Collection name (e.g. "stock")
    pub collection: &'static str,
    /// Base path of the backend service (e.g. "/service/stock")
    pub service_path: &'static str,
    /// Singular UI name
    pub element_name: &'static str,
    /// Plural UI name
    pub list_name: &'static str,
    /// Field used as table row key ("id" or a natural key)
    pub row_key: &'static str,
    pub fields: &'static [FieldMetadata],
}

impl EntityDescriptor {
    /// Full name for the system, e.g. "a001_stock"
    pub fn full_name(&self) -> String {
        format!("{}_{}", self.index, self.collection)
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldMetadata> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Master column list for tables
    pub fn list_fields(&self) -> Vec<&'static FieldMetadata> {
        self.fields.iter().filter(|f| f.ui.visible_in_list).collect()
    }

    /// Columns shown when the page opens
    pub fn default_columns(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.ui.visible_in_list && !f.ui.hidden_by_default)
            .map(|f| f.name)
            .collect()
    }

    pub fn detail_fields(&self) -> Vec<&'static FieldMetadata> {
        self.fields.iter().filter(|f| f.ui.visible_in_detail).collect()
    }

    pub fn create_fields(&self) -> Vec<&'static FieldMetadata> {
        self.fields
            .iter()
            .filter(|f| f.source.is_editable() && f.ui.in_create_form)
            .collect()
    }

    pub fn update_fields(&self) -> Vec<&'static FieldMetadata> {
        self.fields
            .iter()
            .filter(|f| f.source.is_editable() && f.ui.in_update_form)
            .collect()
    }

    pub fn batch_fields(&self) -> Vec<&'static FieldMetadata> {
        self.fields
            .iter()
            .filter(|f| f.source.is_editable() && f.ui.in_batch_form)
            .collect()
    }
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// One option of an enum field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl EnumOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Target of a Reference / IdList field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefSpec {
    /// Service path of the referenced collection
    pub service_path: &'static str,
    /// Field of the referenced record stored in this field ("id" or a value key)
    pub value_field: &'static str,
    /// Field of the referenced record shown to the user
    pub label_field: &'static str,
}

/// Metadata for a single field
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    /// JSON name of the field
    pub name: &'static str,
    pub label: &'static str,
    pub field_type: FieldType,
    pub source: FieldSource,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
    pub enum_values: Option<&'static [EnumOption]>,
    pub reference: Option<RefSpec>,
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub placeholder: Option<&'static str>,
    pub visible_in_list: bool,
    /// Listed in the column picker but unchecked initially
    pub hidden_by_default: bool,
    pub visible_in_detail: bool,
    pub in_create_form: bool,
    pub in_update_form: bool,
    pub in_batch_form: bool,
    pub sortable: bool,
    pub column_width: Option<u32>,
}

impl FieldUiMetadata {
    pub const fn new() -> Self {
        Self {
            placeholder: None,
            visible_in_list: true,
            hidden_by_default: false,
            visible_in_detail: true,
            in_create_form: true,
            in_update_form: true,
            in_batch_form: false,
            sortable: false,
            column_width: None,
        }
    }
}

/// Default values for FieldUiMetadata
impl Default for FieldUiMetadata {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldMetadata {
    pub const fn new(name: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            label,
            field_type,
            source: FieldSource::Attribute,
            ui: FieldUiMetadata::new(),
            validation: ValidationRules::none(),
            enum_values: None,
            reference: None,
        }
    }

    // --- constructors by type -------------------------------------------------

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Text)
    }

    pub const fn long_text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::LongText).hidden()
    }

    pub const fn integer(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Integer)
    }

    pub const fn decimal(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Decimal)
    }

    pub const fn money(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Money).sortable()
    }

    pub const fn percent(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Percent).sortable()
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Date)
    }

    pub const fn boolean(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Bool)
    }

    pub const fn enumeration(
        name: &'static str,
        label: &'static str,
        options: &'static [EnumOption],
    ) -> Self {
        let mut field = Self::new(name, label, FieldType::Enum);
        field.enum_values = Some(options);
        field
    }

    pub const fn reference(name: &'static str, label: &'static str, target: RefSpec) -> Self {
        let mut field = Self::new(name, label, FieldType::Reference);
        field.reference = Some(target);
        field
    }

    pub const fn id_list(name: &'static str, label: &'static str, target: RefSpec) -> Self {
        let mut field = Self::new(name, label, FieldType::IdList).hidden();
        field.reference = Some(target);
        field
    }

    /// Backend-assigned `id`; shown in the drawer only
    pub const fn id() -> Self {
        let mut field = Self::new("id", "ID", FieldType::Text).not_in_list();
        field.source = FieldSource::Identity;
        field
    }

    pub const fn create_time() -> Self {
        Self::new("create_time", "创建时间", FieldType::DateTime)
            .audit()
            .sortable()
    }

    pub const fn updated_at() -> Self {
        Self::new("updated_at", "更新时间", FieldType::DateTime)
            .audit()
            .hidden()
    }

    // --- modifiers --------------------------------------------------------------

    pub const fn required(mut self) -> Self {
        self.validation.required = true;
        self
    }

    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.validation.min = Some(min);
        self.validation.max = Some(max);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.validation.max_length = Some(max);
        self
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.validation.min_length = Some(min);
        self
    }

    /// Computed by the backend: never in forms
    pub const fn derived(mut self) -> Self {
        self.source = FieldSource::Derived;
        self
    }

    /// Lifecycle timestamp: never in forms
    pub const fn audit(mut self) -> Self {
        self.source = FieldSource::Audit;
        self
    }

    /// Offered in the batch-update form
    pub const fn batch(mut self) -> Self {
        self.ui.in_batch_form = true;
        self
    }

    /// Set once on create, read-only afterwards
    pub const fn create_only(mut self) -> Self {
        self.ui.in_update_form = false;
        self
    }

    /// Write-only value (e.g. password): create form only, never displayed
    pub const fn secret(mut self) -> Self {
        self.ui.in_update_form = false;
        self.ui.visible_in_list = false;
        self.ui.visible_in_detail = false;
        self
    }

    pub const fn hidden(mut self) -> Self {
        self.ui.hidden_by_default = true;
        self
    }

    pub const fn not_in_list(mut self) -> Self {
        self.ui.visible_in_list = false;
        self
    }

    pub const fn sortable(mut self) -> Self {
        self.ui.sortable = true;
        self
    }

    pub const fn width(mut self, width: u32) -> Self {
        self.ui.column_width = Some(width);
        self
    }

    pub const fn placeholder(mut self, text: &'static str) -> Self {
        self.ui.placeholder = Some(text);
        self
    }

    // --- queries ------------------------------------------------------------------

    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }

    pub fn is_editable(&self) -> bool {
        self.source.is_editable()
    }

    /// Label of an enum value, falls back to the raw value
    pub fn enum_label<'a>(&self, value: &'a str) -> &'a str {
        self.enum_values
            .and_then(|options| options.iter().find(|o| o.value == value))
            .map(|o| o.label)
            .unwrap_or(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[EnumOption] = &[EnumOption::new("0", "正常"), EnumOption::new("1", "停用")];

    const FIELDS: &[FieldMetadata] = &[
        FieldMetadata::id(),
        FieldMetadata::text("name", "名称").required(),
        FieldMetadata::enumeration("status", "状态", OPTIONS).batch(),
        FieldMetadata::percent("ratio", "比率").derived(),
        FieldMetadata::text("password", "密码").secret(),
        FieldMetadata::create_time(),
    ];

    static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
        index: "t001",
        collection: "sample",
        service_path: "/service/sample",
        element_name: "样例",
        list_name: "样例列表",
        row_key: "id",
        fields: FIELDS,
    };

    #[test]
    fn forms_only_contain_attribute_fields() {
        let create: Vec<_> = DESCRIPTOR.create_fields().iter().map(|f| f.name).collect();
        assert_eq!(create, vec!["name", "status", "password"]);

        let update: Vec<_> = DESCRIPTOR.update_fields().iter().map(|f| f.name).collect();
        assert_eq!(update, vec!["name", "status"]);

        let batch: Vec<_> = DESCRIPTOR.batch_fields().iter().map(|f| f.name).collect();
        assert_eq!(batch, vec!["status"]);
    }

    #[test]
    fn list_and_detail_visibility() {
        let columns = DESCRIPTOR.default_columns();
        assert!(!columns.contains(&"id"));
        assert!(!columns.contains(&"password"));
        assert!(columns.contains(&"ratio"));

        let detail: Vec<_> = DESCRIPTOR.detail_fields().iter().map(|f| f.name).collect();
        assert!(detail.contains(&"id"));
        assert!(!detail.contains(&"password"));
    }

    #[test]
    fn enum_label_falls_back_to_value() {
        let status = DESCRIPTOR.field("status").unwrap();
        assert_eq!(status.enum_label("1"), "停用");
        assert_eq!(status.enum_label("9"), "9");
        assert_eq!(DESCRIPTOR.full_name(), "t001_sample");
    }
}
