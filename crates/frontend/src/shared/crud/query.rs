//! Model of the query panel
//!
//! The panel validates and converts its inputs, then hands the complete field
//! map (empty values included) to the page; stripping empties is the page's
//! job.

use chrono::NaiveDate;
use contracts::shared::crud::Filters;
use contracts::shared::metadata::{EnumOption, FieldMetadata, FieldType, RefSpec};
use serde_json::{Number, Value};

use super::error::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QueryKind {
    Text,
    Integer,
    Decimal,
    Select(&'static [EnumOption]),
    /// Options loaded from another collection
    Reference(RefSpec),
    Date,
    /// Two dates, sent as `[start, end]`
    DateRange,
}

/// One input of the query panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: QueryKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

impl QueryField {
    pub const fn new(name: &'static str, label: &'static str, kind: QueryKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: None,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, QueryKind::Text)
    }

    pub const fn date_range(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, QueryKind::DateRange)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Query input derived from a field description
    pub fn from_meta(field: &'static FieldMetadata) -> Self {
        let kind = match field.field_type {
            FieldType::Integer => QueryKind::Integer,
            FieldType::Decimal | FieldType::Money | FieldType::Percent => QueryKind::Decimal,
            FieldType::Date | FieldType::DateTime => QueryKind::DateRange,
            FieldType::Enum => match field.enum_values {
                Some(options) => QueryKind::Select(options),
                None => QueryKind::Text,
            },
            FieldType::Reference => match field.reference {
                Some(target) => QueryKind::Reference(target),
                None => QueryKind::Text,
            },
            _ => QueryKind::Text,
        };
        Self {
            name: field.name,
            label: field.label,
            kind,
            required: false,
            placeholder: field.ui.placeholder,
        }
    }
}

/// Query fields for a list of field names of one descriptor
pub fn query_fields(fields: &'static [FieldMetadata], names: &[&str]) -> Vec<QueryField> {
    names
        .iter()
        .filter_map(|name| fields.iter().find(|f| f.name == *name))
        .map(QueryField::from_meta)
        .collect()
}

/// Raw inputs of the panel; a date range keeps its two ends separately
#[derive(Debug, Clone, PartialEq)]
pub struct QueryForm {
    fields: Vec<QueryField>,
    values: Vec<(String, String)>,
}

impl QueryForm {
    pub fn new(fields: Vec<QueryField>) -> Self {
        let values = fields
            .iter()
            .map(|_| (String::new(), String::new()))
            .collect();
        Self { fields, values }
    }

    /// Pre-fills inputs from filters already applied (e.g. seeded from the URL)
    pub fn with_values(mut self, filters: &Filters) -> Self {
        for (i, field) in self.fields.iter().enumerate() {
            let Some(value) = filters.get(field.name) else {
                continue;
            };
            self.values[i] = match value {
                Value::Array(items) => (
                    items.first().map(text_of).unwrap_or_default(),
                    items.get(1).map(text_of).unwrap_or_default(),
                ),
                other => (text_of(other), String::new()),
            };
        }
        self
    }

    pub fn fields(&self) -> &[QueryField] {
        &self.fields
    }

    fn index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn value(&self, name: &str) -> String {
        self.index(name)
            .map(|i| self.values[i].0.clone())
            .unwrap_or_default()
    }

    /// Second end of a date range
    pub fn value_end(&self, name: &str) -> String {
        self.index(name)
            .map(|i| self.values[i].1.clone())
            .unwrap_or_default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some(i) = self.index(name) {
            self.values[i].0 = value.into();
        }
    }

    pub fn set_end(&mut self, name: &str, value: impl Into<String>) {
        if let Some(i) = self.index(name) {
            self.values[i].1 = value.into();
        }
    }

    pub fn reset(&mut self) {
        for value in &mut self.values {
            *value = (String::new(), String::new());
        }
    }

    /// Validated, converted field map; every field is present
    pub fn submit(&self) -> Result<Filters, FieldErrors> {
        let mut out = Filters::new();
        let mut errors = FieldErrors::new();

        for (field, (start, end)) in self.fields.iter().zip(&self.values) {
            let start = start.trim();
            let end = end.trim();
            let blank = match field.kind {
                QueryKind::DateRange => start.is_empty() && end.is_empty(),
                _ => start.is_empty(),
            };
            if blank {
                if field.required {
                    errors.insert(field.name, format!("请输入{}", field.label));
                }
                let empty = match field.kind {
                    QueryKind::DateRange => Value::Array(Vec::new()),
                    _ => Value::String(String::new()),
                };
                out.insert(field.name.to_string(), empty);
                continue;
            }
            match convert(field, start, end) {
                Ok(value) => {
                    out.insert(field.name.to_string(), value);
                }
                Err(message) => errors.insert(field.name, message),
            }
        }

        errors.into_result().map(|_| out)
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn iso_date(text: &str, label: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| format!("{}格式应为YYYY-MM-DD", label))
}

fn convert(field: &QueryField, start: &str, end: &str) -> Result<Value, String> {
    match field.kind {
        QueryKind::Integer => start
            .parse::<i64>()
            .map(|n| Value::Number(n.into()))
            .map_err(|_| format!("{}必须为整数", field.label)),
        QueryKind::Decimal => start
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| format!("{}必须为数字", field.label)),
        QueryKind::Select(options) => {
            let numeric = !options.is_empty()
                && options.iter().all(|o| o.value.parse::<i64>().is_ok());
            match start.parse::<i64>() {
                Ok(n) if numeric => Ok(Value::Number(n.into())),
                _ => Ok(Value::String(start.to_string())),
            }
        }
        QueryKind::Date => iso_date(start, field.label).map(Value::String),
        QueryKind::DateRange => {
            if start.is_empty() || end.is_empty() {
                return Err("请选择完整的日期范围".to_string());
            }
            let from = iso_date(start, field.label)?;
            let to = iso_date(end, field.label)?;
            if from > to {
                return Err("开始日期不能晚于结束日期".to_string());
            }
            Ok(Value::Array(vec![Value::String(from), Value::String(to)]))
        }
        QueryKind::Text | QueryKind::Reference(_) => Ok(Value::String(start.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_report_balance_sheet::ReportBalanceSheet;
    use contracts::shared::crud::normalize_filters;
    use contracts::shared::crud::CrudEntity;
    use serde_json::json;

    fn report_form() -> QueryForm {
        QueryForm::new(query_fields(
            ReportBalanceSheet::descriptor().fields,
            &["stock_code", "year", "quarter", "report_date"],
        ))
    }

    #[test]
    fn kinds_follow_field_types() {
        let form = report_form();
        let kinds: Vec<_> = form.fields().iter().map(|f| f.kind).collect();
        assert_eq!(kinds[0], QueryKind::Text);
        assert_eq!(kinds[1], QueryKind::Integer);
        assert!(matches!(kinds[2], QueryKind::Select(_)));
        assert_eq!(kinds[3], QueryKind::DateRange);
    }

    #[test]
    fn submit_converts_and_keeps_empty_fields() {
        let mut form = report_form();
        form.set("stock_code", "600000");
        form.set("year", "2023");
        form.set("quarter", "4");

        let raw = form.submit().unwrap();
        assert_eq!(
            Value::Object(raw.clone()),
            json!({"stock_code": "600000", "year": 2023, "quarter": 4, "report_date": []})
        );
        assert_eq!(
            Value::Object(normalize_filters(raw)),
            json!({"stock_code": "600000", "year": 2023, "quarter": 4})
        );
    }

    #[test]
    fn date_range_becomes_iso_pair() {
        let mut form = report_form();
        form.set("report_date", "2023-01-01");
        form.set_end("report_date", "2023-12-31");
        let raw = form.submit().unwrap();
        assert_eq!(raw["report_date"], json!(["2023-01-01", "2023-12-31"]));

        form.set_end("report_date", "");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.get("report_date"), Some("请选择完整的日期范围"));
    }

    #[test]
    fn invalid_number_blocks_submit() {
        let mut form = report_form();
        form.set("year", "二〇二三");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.get("year"), Some("年度必须为整数"));
    }

    #[test]
    fn required_field() {
        let mut form = QueryForm::new(vec![QueryField::text("type", "字典类型").required()]);
        assert_eq!(form.submit().unwrap_err().get("type"), Some("请输入字典类型"));
        form.set("type", "sys_user_sex");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn reset_and_prefill() {
        let mut seeded = Filters::new();
        seeded.insert("stock_code".into(), json!("000001"));
        seeded.insert("report_date".into(), json!(["2022-01-01", "2022-06-30"]));
        let mut form = report_form().with_values(&seeded);
        assert_eq!(form.value("stock_code"), "000001");
        assert_eq!(form.value_end("report_date"), "2022-06-30");

        form.reset();
        assert_eq!(form.value("stock_code"), "");
        assert_eq!(form.value_end("report_date"), "");
    }
}
