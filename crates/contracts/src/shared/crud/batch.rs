//! Bodies of the batch endpoints

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field map sent by create / update / batch-update
pub type Payload = Map<String, Value>;

/// `{ids}` for batch-delete and export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchIds {
    pub ids: Vec<String>,
}

impl BatchIds {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }
}

/// `{ids, ...payload}`: one payload applied to every id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchUpdate {
    pub ids: Vec<String>,
    #[serde(flatten)]
    pub payload: Payload,
}

impl BatchUpdate {
    pub fn new(ids: Vec<String>, mut payload: Payload) -> Self {
        payload.remove("ids");
        payload.remove("id");
        Self { ids, payload }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn batch_update_flattens_payload() {
        let mut payload = Payload::new();
        payload.insert("status".into(), json!("1"));
        payload.insert("id".into(), json!("stale"));
        let body = BatchUpdate::new(vec!["a".into(), "b".into()], payload);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"ids": ["a", "b"], "status": "1"})
        );
    }

    #[test]
    fn batch_ids_shape() {
        let body = BatchIds::new(vec!["a".into(), "b".into()]);
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"ids": ["a", "b"]}));
    }
}
