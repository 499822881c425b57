use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::hash::Hash;

use crate::shared::metadata::EntityDescriptor;

/// Трейт для типов идентификаторов сущностей
pub trait EntityId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

impl EntityId for String {
    fn as_string(&self) -> String {
        self.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        if s.is_empty() {
            return Err("Empty id".to_string());
        }
        Ok(s.to_string())
    }
}

impl EntityId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>().map_err(|e| format!("Invalid i64: {}", e))
    }
}

impl EntityId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s).map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Lenient id fields: the backend may send ids as strings or numbers
// ============================================================================

fn id_text(value: Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(format!("expected a string or numeric id, got {}", other)),
    }
}

/// `#[serde(deserialize_with)]` for `String` ids
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    id_text(Value::deserialize(deserializer)?).map_err(D::Error::custom)
}

/// `#[serde(deserialize_with)]` for `Option<String>` ids; `null` and `""` are `None`
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = id_text(Value::deserialize(deserializer)?).map_err(D::Error::custom)?;
    Ok(Some(text).filter(|t| !t.is_empty()))
}

/// `#[serde(deserialize_with)]` for id lists
pub fn vec_string_or_number<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(id_text)
            .collect::<Result<_, _>>()
            .map_err(D::Error::custom),
        other => Err(D::Error::custom(format!("expected an id list, got {}", other))),
    }
}

/// One record type managed by the generic CRUD page
pub trait CrudEntity:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + std::fmt::Debug + 'static
{
    type Id: EntityId;

    /// Backend-assigned identity
    fn id(&self) -> Self::Id;

    /// Static description: service path, names, fields
    fn descriptor() -> &'static EntityDescriptor;

    /// All serialized fields of the record
    fn to_fields(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Value of one field by its JSON name (`Null` when absent)
    fn field_value(&self, field: &str) -> Value {
        self.to_fields().remove(field).unwrap_or(Value::Null)
    }

    /// Table row key: `id` or the natural key configured in the descriptor
    fn row_key(&self) -> String {
        let key = Self::descriptor().row_key;
        if key == "id" {
            return self.id().as_string();
        }
        match self.field_value(key) {
            Value::String(s) if !s.is_empty() => s,
            Value::Number(n) => n.to_string(),
            _ => self.id().as_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_string_conversions() {
        assert_eq!(<i64 as EntityId>::from_string("42"), Ok(42));
        assert!(<i64 as EntityId>::from_string("x").is_err());
        assert!(<String as EntityId>::from_string("").is_err());

        let id = uuid::Uuid::new_v4();
        assert_eq!(
            <uuid::Uuid as EntityId>::from_string(&id.as_string()),
            Ok(id)
        );
    }

    #[derive(Debug, Deserialize)]
    struct Ids {
        #[serde(default, deserialize_with = "string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "opt_string_or_number")]
        parent_id: Option<String>,
        #[serde(default, deserialize_with = "vec_string_or_number")]
        children: Vec<String>,
    }

    #[test]
    fn ids_accept_strings_and_numbers() {
        let ids: Ids = serde_json::from_value(serde_json::json!({
            "id": 7, "parent_id": "3", "children": [1, "b", 2.5]
        }))
        .unwrap();
        assert_eq!(ids.id, "7");
        assert_eq!(ids.parent_id.as_deref(), Some("3"));
        assert_eq!(ids.children, vec!["1", "b", "2.5"]);

        let empty: Ids = serde_json::from_value(serde_json::json!({"parent_id": null, "children": null})).unwrap();
        assert_eq!(empty.id, "");
        assert_eq!(empty.parent_id, None);
        assert!(empty.children.is_empty());

        assert!(serde_json::from_value::<Ids>(serde_json::json!({"id": true})).is_err());
        assert!(serde_json::from_value::<Ids>(serde_json::json!({"children": "1,2"})).is_err());
    }
}
