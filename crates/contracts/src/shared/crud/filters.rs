//! Filter objects sent to list endpoints

use serde_json::{Map, Value};

/// Field name → filter value
pub type Filters = Map<String, Value>;

/// Whether a value carries no filter criterion
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty() || items.iter().all(is_empty_value),
        _ => false,
    }
}

/// Drops null / blank-string / empty-array entries, trims strings
pub fn normalize_filters(raw: Filters) -> Filters {
    raw.into_iter()
        .filter(|(_, value)| !is_empty_value(value))
        .map(|(key, value)| match value {
            Value::String(s) => (key, Value::String(s.trim().to_string())),
            other => (key, other),
        })
        .collect()
}

/// Filters seeded from route parameters (e.g. `?type=sys_user_sex`)
pub fn seed_filters<'a>(pairs: impl IntoIterator<Item = (&'a str, String)>) -> Filters {
    normalize_filters(
        pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), Value::String(value)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_filters(value: Value) -> Filters {
        match value {
            Value::Object(map) => map,
            _ => Filters::new(),
        }
    }

    #[test]
    fn strips_empty_values() {
        let raw = as_filters(json!({
            "stock_code": "600000",
            "stock_name": "",
            "industry": "   ",
            "list_date": [],
            "period": [null, null],
            "exchange": null,
            "year": 2023,
            "quarter": 4,
            "is_st": false
        }));
        assert_eq!(
            Value::Object(normalize_filters(raw)),
            json!({"stock_code": "600000", "year": 2023, "quarter": 4, "is_st": false})
        );
    }

    #[test]
    fn keeps_filled_filters_unchanged() {
        let raw = as_filters(json!({"stock_code": "600000", "year": 2023, "quarter": 4}));
        assert_eq!(normalize_filters(raw.clone()), raw);
    }

    #[test]
    fn seeds_from_route_params() {
        let seeded = seed_filters([("type", "sys_user_sex".to_string()), ("x", String::new())]);
        assert_eq!(Value::Object(seeded), json!({"type": "sys_user_sex"}));
    }
}
