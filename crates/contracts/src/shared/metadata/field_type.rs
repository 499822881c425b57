//! Field type enumeration for metadata system

/// Value category of a field; drives form widgets, input parsing and cell formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    LongText,
    Integer,
    Decimal,
    Money,
    Percent,
    Date,
    DateTime,
    Bool,
    Enum,      // fixed option list (`enum_values`)
    Reference, // single value pointing into another collection
    IdList,    // many-to-many materialized as an array of ids
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::LongText => "long_text",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Money => "money",
            Self::Percent => "percent",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Bool => "bool",
            Self::Enum => "enum",
            Self::Reference => "reference",
            Self::IdList => "id_list",
        }
    }

    /// Numeric fields are sent to the backend as JSON numbers
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Integer | Self::Decimal | Self::Money | Self::Percent
        )
    }

    /// Right-aligned in tables
    pub fn align_right(&self) -> bool {
        self.is_numeric()
    }
}

/// Where the value of a field comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldSource {
    /// Backend-assigned identity (`id`)
    Identity,
    /// Regular domain attribute, editable through forms
    #[default]
    Attribute,
    /// Lifecycle timestamps (`create_time`, `updated_at`)
    Audit,
    /// Computed by the backend (rank, ratios, scores)
    Derived,
}

impl FieldSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Attribute => "attribute",
            Self::Audit => "audit",
            Self::Derived => "derived",
        }
    }

    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Attribute)
    }
}
