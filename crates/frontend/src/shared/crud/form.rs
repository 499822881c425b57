//! Form values of the create / update / batch-update modals
//!
//! Inputs are kept as raw strings (what the widgets hold) and converted to
//! typed JSON only when the payload is built. An update form remembers the
//! record it was opened with: a field the user did not touch is sent back
//! exactly as it was received.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use contracts::shared::crud::Payload;
use contracts::shared::metadata::{FieldMetadata, FieldType};
use serde_json::{Number, Value};

use super::error::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
    /// Only filled fields are sent, nothing is required
    Batch,
}

/// Raw value of one widget
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Text(String),
    Flag(Option<bool>),
    Ids(Vec<String>),
}

impl FieldInput {
    pub fn empty_for(field: &FieldMetadata) -> Self {
        match field.field_type {
            FieldType::Bool => FieldInput::Flag(None),
            FieldType::IdList => FieldInput::Ids(Vec::new()),
            _ => FieldInput::Text(String::new()),
        }
    }

    /// Widget value for a JSON value received from the backend
    pub fn from_value(field: &FieldMetadata, value: &Value) -> Self {
        match (field.field_type, value) {
            (FieldType::Bool, Value::Bool(b)) => FieldInput::Flag(Some(*b)),
            (FieldType::Bool, _) => FieldInput::Flag(None),
            (FieldType::IdList, Value::Array(items)) => {
                FieldInput::Ids(items.iter().filter_map(scalar_text).collect())
            }
            (FieldType::IdList, _) => FieldInput::Ids(Vec::new()),
            (_, value) => FieldInput::Text(scalar_text(value).unwrap_or_default()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldInput::Text(s) => s.trim().is_empty(),
            FieldInput::Flag(flag) => flag.is_none(),
            FieldInput::Ids(ids) => ids.is_empty(),
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            FieldInput::Text(s) => s.clone(),
            FieldInput::Flag(Some(b)) => b.to_string(),
            FieldInput::Flag(None) => String::new(),
            FieldInput::Ids(ids) => ids.join(","),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Enum whose option values are all integers (e.g. quarter) travels as a number
fn numeric_options(field: &FieldMetadata) -> bool {
    field
        .enum_values
        .map(|options| !options.is_empty() && options.iter().all(|o| o.value.parse::<i64>().is_ok()))
        .unwrap_or(false)
}

/// Converts one raw input to its wire value; `Ok(None)` means "left empty"
pub fn parse_input(field: &FieldMetadata, input: &FieldInput) -> Result<Option<Value>, String> {
    if input.is_empty() {
        return Ok(None);
    }
    match input {
        FieldInput::Flag(flag) => Ok(flag.map(Value::Bool)),
        FieldInput::Ids(ids) => Ok(Some(Value::Array(
            ids.iter().cloned().map(Value::String).collect(),
        ))),
        FieldInput::Text(raw) => parse_text(field, raw.trim()).map(Some),
    }
}

fn parse_text(field: &FieldMetadata, text: &str) -> Result<Value, String> {
    let rules = &field.validation;
    match field.field_type {
        FieldType::Integer => {
            let n: i64 = text
                .parse()
                .map_err(|_| format!("{}必须为整数", field.label))?;
            rules.validate_number(n as f64, field.label)?;
            Ok(Value::Number(n.into()))
        }
        FieldType::Decimal | FieldType::Money | FieldType::Percent => {
            let n: f64 = text
                .replace(',', "")
                .parse()
                .map_err(|_| format!("{}必须为数字", field.label))?;
            rules.validate_number(n, field.label)?;
            Number::from_f64(n)
                .map(Value::Number)
                .ok_or_else(|| format!("{}必须为数字", field.label))
        }
        FieldType::Date => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(|d| Value::String(d.format("%Y-%m-%d").to_string()))
            .map_err(|_| format!("{}格式应为YYYY-MM-DD", field.label)),
        FieldType::Enum if numeric_options(field) => text
            .parse::<i64>()
            .map(|n| Value::Number(n.into()))
            .map_err(|_| format!("请选择{}", field.label)),
        FieldType::Bool => match text {
            "true" | "1" => Ok(Value::Bool(true)),
            "false" | "0" => Ok(Value::Bool(false)),
            _ => Err(format!("请选择{}", field.label)),
        },
        FieldType::Text | FieldType::LongText => {
            rules.validate_string(text, field.label)?;
            Ok(Value::String(text.to_string()))
        }
        _ => Ok(Value::String(text.to_string())),
    }
}

fn required_message(field: &FieldMetadata) -> String {
    match field.field_type {
        FieldType::Enum | FieldType::Reference | FieldType::IdList | FieldType::Bool | FieldType::Date => {
            format!("请选择{}", field.label)
        }
        _ => format!("请输入{}", field.label),
    }
}

/// Widget values of one open form
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    mode: FormMode,
    fields: Vec<&'static FieldMetadata>,
    inputs: BTreeMap<&'static str, FieldInput>,
    originals: Payload,
}

impl FormValues {
    pub fn empty(fields: Vec<&'static FieldMetadata>, mode: FormMode) -> Self {
        let inputs = fields
            .iter()
            .map(|f| (f.name, FieldInput::empty_for(f)))
            .collect();
        Self {
            mode,
            fields,
            inputs,
            originals: Payload::new(),
        }
    }

    /// Update form pre-filled from a record's serialized fields
    pub fn from_record(fields: Vec<&'static FieldMetadata>, record: &Payload) -> Self {
        let inputs = fields
            .iter()
            .map(|f| {
                let value = record.get(f.name).unwrap_or(&Value::Null);
                (f.name, FieldInput::from_value(f, value))
            })
            .collect();
        let originals = fields
            .iter()
            .map(|f| {
                let value = record.get(f.name).cloned().unwrap_or(Value::Null);
                (f.name.to_string(), value)
            })
            .collect();
        Self {
            mode: FormMode::Update,
            fields,
            inputs,
            originals,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn fields(&self) -> &[&'static FieldMetadata] {
        &self.fields
    }

    pub fn input(&self, name: &str) -> Option<&FieldInput> {
        self.inputs.get(name)
    }

    pub fn text(&self, name: &str) -> String {
        self.input(name).map(FieldInput::as_text).unwrap_or_default()
    }

    pub fn set(&mut self, name: &str, input: FieldInput) {
        if let Some(slot) = self.inputs.get_mut(name) {
            *slot = input;
        }
    }

    pub fn set_text(&mut self, name: &str, text: impl Into<String>) {
        self.set(name, FieldInput::Text(text.into()));
    }

    /// Back to the values the form was opened with
    pub fn reset(&mut self) {
        for field in &self.fields {
            let input = match self.originals.get(field.name) {
                Some(value) => FieldInput::from_value(field, value),
                None => FieldInput::empty_for(field),
            };
            self.inputs.insert(field.name, input);
        }
    }

    fn unchanged(&self, field: &FieldMetadata, input: &FieldInput) -> Option<&Value> {
        if self.mode != FormMode::Update {
            return None;
        }
        let original = self.originals.get(field.name)?;
        (FieldInput::from_value(field, original) == *input).then_some(original)
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        self.into_payload().map(|_| ())
    }

    /// Typed payload, or the inline error of every invalid field
    pub fn into_payload(&self) -> Result<Payload, FieldErrors> {
        let mut payload = Payload::new();
        let mut errors = FieldErrors::new();

        for field in &self.fields {
            let empty = FieldInput::empty_for(field);
            let input = self.inputs.get(field.name).unwrap_or(&empty);

            if let Some(original) = self.unchanged(field, input) {
                payload.insert(field.name.to_string(), original.clone());
                continue;
            }

            match parse_input(field, input) {
                Ok(Some(value)) => {
                    payload.insert(field.name.to_string(), value);
                }
                Ok(None) => {
                    if field.validation.required && self.mode != FormMode::Batch {
                        errors.insert(field.name, required_message(field));
                    } else if self.mode == FormMode::Update {
                        let cleared = match field.field_type {
                            FieldType::IdList => Value::Array(Vec::new()),
                            _ => Value::Null,
                        };
                        payload.insert(field.name.to_string(), cleared);
                    }
                }
                Err(message) => errors.insert(field.name, message),
            }
        }

        errors.into_result().map(|_| payload)
    }
}

/// Update payload with the target id merged in
pub fn merge_id(mut payload: Payload, id: &str) -> Payload {
    payload.insert("id".to_string(), Value::String(id.to_string()));
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_stock::{Stock, StockId};
    use contracts::domain::a002_report_balance_sheet::ReportBalanceSheet;
    use contracts::shared::crud::CrudEntity;
    use contracts::system::User;
    use serde_json::json;

    fn sample_stock() -> Stock {
        serde_json::from_value(json!({
            "id": "17",
            "stock_code": "600000",
            "stock_name": "浦发银行",
            "exchange": "SH",
            "market": "main",
            "list_date": "1999-11-10",
            "total_share": 2935208.04,
            "create_time": "2024-01-02 09:30:00"
        }))
        .unwrap()
    }

    #[test]
    fn unchanged_update_round_trips() {
        let stock = sample_stock();
        let fields = Stock::descriptor().update_fields();
        let form = FormValues::from_record(fields.clone(), &stock.to_fields());

        let payload = merge_id(form.into_payload().unwrap(), &stock.id.0);

        let record = stock.to_fields();
        let mut expected = Payload::new();
        for field in fields {
            expected.insert(field.name.to_string(), record[field.name].clone());
        }
        expected.insert("id".into(), json!("17"));
        assert_eq!(payload, expected);
    }

    #[test]
    fn edited_fields_are_parsed() {
        let stock = sample_stock();
        let mut form = FormValues::from_record(Stock::descriptor().update_fields(), &stock.to_fields());
        form.set_text("total_share", "100.5");
        form.set_text("industry", "  银行 ");
        form.set_text("exchange", "");

        let payload = form.into_payload().unwrap();
        assert_eq!(payload["total_share"], json!(100.5));
        assert_eq!(payload["industry"], json!("银行"));
        assert_eq!(payload["exchange"], Value::Null);
        assert_eq!(payload["stock_name"], json!("浦发银行"));
    }

    #[test]
    fn create_requires_fields_and_skips_empty() {
        let mut form = FormValues::empty(ReportBalanceSheet::descriptor().create_fields(), FormMode::Create);
        form.set_text("stock_code", "600000");
        form.set_text("year", "20x3");

        let errors = form.into_payload().unwrap_err();
        assert_eq!(errors.get("year"), Some("年度必须为整数"));
        assert_eq!(errors.get("quarter"), Some("请选择季度"));
        assert_eq!(errors.get("stock_code"), None);

        form.set_text("year", "2023");
        form.set_text("quarter", "4");
        let payload = form.into_payload().unwrap();
        assert_eq!(payload["year"], json!(2023));
        assert_eq!(payload["quarter"], json!(4));
        assert!(!payload.contains_key("monetary_funds"));
    }

    #[test]
    fn range_and_length_rules() {
        let mut form = FormValues::empty(ReportBalanceSheet::descriptor().create_fields(), FormMode::Create);
        form.set_text("stock_code", "600000");
        form.set_text("year", "1800");
        form.set_text("quarter", "1");
        assert_eq!(
            form.into_payload().unwrap_err().get("year"),
            Some("年度不能小于1990")
        );

        let mut user = FormValues::empty(User::descriptor().create_fields(), FormMode::Create);
        user.set_text("password", "123");
        let errors = user.into_payload().unwrap_err();
        assert_eq!(errors.get("password"), Some("密码至少6个字符"));
    }

    #[test]
    fn batch_sends_only_filled_fields() {
        let mut form = FormValues::empty(Stock::descriptor().batch_fields(), FormMode::Batch);
        form.set_text("market", "star");
        let payload = form.into_payload().unwrap();
        assert_eq!(Value::Object(payload), json!({"market": "star"}));
    }

    #[test]
    fn date_must_be_iso() {
        let mut stock_form = FormValues::empty(Stock::descriptor().create_fields(), FormMode::Create);
        stock_form.set_text("stock_code", "600000");
        stock_form.set_text("stock_name", "浦发银行");
        stock_form.set_text("list_date", "1999/11/10");
        assert_eq!(
            stock_form.into_payload().unwrap_err().get("list_date"),
            Some("上市日期格式应为YYYY-MM-DD")
        );
        stock_form.set_text("list_date", "1999-11-10");
        assert_eq!(stock_form.into_payload().unwrap()["list_date"], json!("1999-11-10"));
    }

    #[test]
    fn reset_restores_opened_values() {
        let stock = Stock {
            id: StockId::new("1"),
            stock_code: "000001".into(),
            stock_name: "平安银行".into(),
            ..Stock::default()
        };
        let mut form = FormValues::from_record(Stock::descriptor().update_fields(), &stock.to_fields());
        form.set_text("stock_name", "改名");
        form.reset();
        assert_eq!(form.text("stock_name"), "平安银行");
    }

    #[test]
    fn id_list_inputs() {
        let field = FieldMetadata::id_list(
            "menu_ids",
            "菜单权限",
            contracts::system::options::MENU_REF,
        );
        let input = FieldInput::from_value(&field, &json!(["1", 2]));
        assert_eq!(input, FieldInput::Ids(vec!["1".into(), "2".into()]));
        assert_eq!(parse_input(&field, &input).unwrap(), Some(json!(["1", "2"])));
        assert_eq!(parse_input(&field, &FieldInput::Ids(Vec::new())).unwrap(), None);
    }
}
