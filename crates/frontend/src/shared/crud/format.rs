//! Display text of a field value in tables, the drawer and the import preview

use contracts::shared::metadata::{FieldMetadata, FieldType};
use serde_json::Value;

use crate::shared::components::table::{format_money, format_number_with_decimals, format_percent};
use crate::shared::date_utils::{format_date, format_datetime};

pub const EMPTY_CELL: &str = "—";

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Numeric value of a cell, strings holding numbers included
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn format_value(field: &FieldMetadata, value: &Value) -> String {
    let formatted = match field.field_type {
        FieldType::Money => as_number(value).map(format_money),
        FieldType::Percent => as_number(value).map(format_percent),
        FieldType::Decimal => as_number(value).map(|v| format_number_with_decimals(v, 2)),
        FieldType::Integer => as_text(value),
        FieldType::Date => as_text(value).map(|s| format_date(&s)),
        FieldType::DateTime => as_text(value).map(|s| format_datetime(&s)),
        FieldType::Bool => match value {
            Value::Bool(true) => Some("是".to_string()),
            Value::Bool(false) => Some("否".to_string()),
            _ => None,
        },
        FieldType::Enum => as_text(value).map(|s| field.enum_label(&s).to_string()),
        FieldType::IdList => match value {
            Value::Array(items) if !items.is_empty() => Some(
                items
                    .iter()
                    .filter_map(as_text)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            _ => None,
        },
        _ => as_text(value),
    };
    formatted.unwrap_or_else(|| EMPTY_CELL.to_string())
}

/// Percent cells (growth, margins, returns) are colored by sign
pub fn colored_by_sign(field: &FieldMetadata) -> bool {
    field.field_type == FieldType::Percent
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::QUARTER_OPTIONS;
    use serde_json::json;

    #[test]
    fn numbers() {
        let money = FieldMetadata::money("total_assets", "资产总计");
        assert_eq!(format_value(&money, &json!(1234567.891)), "1,234,567.89");
        assert_eq!(format_value(&money, &json!("-12.5")), "-12.50");
        assert_eq!(format_value(&money, &Value::Null), EMPTY_CELL);

        let pct = FieldMetadata::percent("roe", "ROE");
        assert_eq!(format_value(&pct, &json!(15.456)), "15.46%");

        let year = FieldMetadata::integer("year", "年度");
        assert_eq!(format_value(&year, &json!(2023)), "2023");
    }

    #[test]
    fn enums_and_dates() {
        let quarter = FieldMetadata::enumeration("quarter", "季度", QUARTER_OPTIONS);
        assert_eq!(format_value(&quarter, &json!(4)), "四季度");
        assert_eq!(format_value(&quarter, &json!("9")), "9");

        let created = FieldMetadata::create_time();
        assert_eq!(
            format_value(&created, &json!("2024-01-02T09:30:00.000Z")),
            "2024-01-02 09:30:00"
        );
        let day = FieldMetadata::date("list_date", "上市日期");
        assert_eq!(format_value(&day, &json!("1999-11-10")), "1999-11-10");
        assert_eq!(format_value(&day, &json!("")), EMPTY_CELL);
    }

    #[test]
    fn flags_and_lists() {
        let flag = FieldMetadata::boolean("is_st", "ST");
        assert_eq!(format_value(&flag, &json!(true)), "是");
        let ids = FieldMetadata::id_list("menu_ids", "菜单", contracts::system::options::MENU_REF);
        assert_eq!(format_value(&ids, &json!(["1", 2])), "1, 2");
        assert_eq!(format_value(&ids, &json!([])), EMPTY_CELL);
    }
}
