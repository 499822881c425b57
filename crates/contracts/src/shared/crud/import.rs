//! Rows returned by the import parse endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::batch::Payload;

/// One parsed row: the candidate fields plus an optional row error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRow {
    #[serde(flatten)]
    pub fields: Payload,
    #[serde(rename = "errMsg", default, skip_serializing_if = "Option::is_none")]
    pub err_msg: Option<String>,
}

impl ImportRow {
    pub fn has_error(&self) -> bool {
        self.err_msg
            .as_deref()
            .map(|msg| !msg.trim().is_empty())
            .unwrap_or(false)
    }

    pub fn value(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&Value::Null)
    }
}

/// Payloads of the rows without `errMsg`, in the original order
pub fn committable(rows: &[ImportRow]) -> Vec<Payload> {
    rows.iter()
        .filter(|row| !row.has_error())
        .map(|row| row.fields.clone())
        .collect()
}

pub fn error_count(rows: &[ImportRow]) -> usize {
    rows.iter().filter(|row| row.has_error()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<ImportRow> {
        serde_json::from_value(json!([
            {"stock_code": "600000", "stock_name": "浦发银行"},
            {"stock_code": "", "stock_name": "无代码", "errMsg": "股票代码不能为空"},
            {"stock_code": "000001", "stock_name": "平安银行", "errMsg": ""}
        ]))
        .unwrap()
    }

    #[test]
    fn err_msg_is_split_from_fields() {
        let rows = rows();
        assert_eq!(rows[1].err_msg.as_deref(), Some("股票代码不能为空"));
        assert!(!rows[1].fields.contains_key("errMsg"));
        assert_eq!(rows[0].value("stock_name"), &json!("浦发银行"));
        assert_eq!(rows[0].value("missing"), &Value::Null);
    }

    #[test]
    fn commit_excludes_error_rows() {
        let rows = rows();
        assert_eq!(error_count(&rows), 1);
        let payloads = committable(&rows);
        assert_eq!(payloads.len(), 2);
        assert_eq!(payloads[1].get("stock_code"), Some(&json!("000001")));
    }
}
