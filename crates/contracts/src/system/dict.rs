//! Словари: типы (dict_type) и значения (dict_data)

use serde::{Deserialize, Serialize};

use super::options::{DICT_TYPE_REF, STATUS_OPTIONS, YES_NO_OPTIONS};
use crate::shared::crud::CrudEntity;
use crate::shared::metadata::{EntityDescriptor, FieldMetadata};

// ============================================================================
// Dict type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DictType {
    #[serde(default, deserialize_with = "crate::shared::crud::string_or_number")]
    pub id: String,
    pub dict_name: String,
    pub dict_type: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

pub const DICT_TYPE_FIELDS: &[FieldMetadata] = &[
    FieldMetadata::id(),
    FieldMetadata::text("dict_name", "字典名称").required().max_length(100),
    FieldMetadata::text("dict_type", "字典类型")
        .required()
        .max_length(100)
        .placeholder("如 sys_user_sex"),
    FieldMetadata::enumeration("status", "状态", STATUS_OPTIONS).batch(),
    FieldMetadata::long_text("remark", "备注").max_length(500),
    FieldMetadata::create_time(),
    FieldMetadata::updated_at(),
];

pub static DICT_TYPE_DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    index: "sys",
    collection: "dict_type",
    service_path: "/service/system/dict-type",
    element_name: "字典类型",
    list_name: "字典类型",
    row_key: "id",
    fields: DICT_TYPE_FIELDS,
};

impl CrudEntity for DictType {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn descriptor() -> &'static EntityDescriptor {
        &DICT_TYPE_DESCRIPTOR
    }
}

// ============================================================================
// Dict data
// ============================================================================

/// Значение словаря; связано с типом по значению `type`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DictDatum {
    #[serde(default, deserialize_with = "crate::shared::crud::string_or_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub dict_type: String,
    pub dict_label: String,
    pub dict_value: String,
    #[serde(default)]
    pub dict_sort: Option<i64>,
    #[serde(default)]
    pub list_class: Option<String>,
    #[serde(default)]
    pub is_default: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

pub const DICT_DATA_FIELDS: &[FieldMetadata] = &[
    FieldMetadata::id(),
    FieldMetadata::reference("type", "字典类型", DICT_TYPE_REF).required(),
    FieldMetadata::text("dict_label", "字典标签").required().max_length(100),
    FieldMetadata::text("dict_value", "字典键值").required().max_length(100),
    FieldMetadata::integer("dict_sort", "字典排序").range(0.0, 9999.0).sortable(),
    FieldMetadata::text("list_class", "回显样式").hidden(),
    FieldMetadata::enumeration("is_default", "是否默认", YES_NO_OPTIONS),
    FieldMetadata::enumeration("status", "状态", STATUS_OPTIONS).batch(),
    FieldMetadata::long_text("remark", "备注").max_length(500),
    FieldMetadata::create_time(),
    FieldMetadata::updated_at(),
];

pub static DICT_DATA_DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    index: "sys",
    collection: "dict_data",
    service_path: "/service/system/dict-data",
    element_name: "字典数据",
    list_name: "字典数据",
    row_key: "id",
    fields: DICT_DATA_FIELDS,
};

impl CrudEntity for DictDatum {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn descriptor() -> &'static EntityDescriptor {
        &DICT_DATA_DESCRIPTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn datum_type_uses_wire_name() {
        let datum: DictDatum = serde_json::from_value(json!({
            "id": "3",
            "type": "sys_user_sex",
            "dict_label": "男",
            "dict_value": "0"
        }))
        .unwrap();
        assert_eq!(datum.dict_type, "sys_user_sex");
        assert_eq!(datum.field_value("type"), json!("sys_user_sex"));

        let reference = DICT_DATA_DESCRIPTOR.field("type").and_then(|f| f.reference);
        assert_eq!(reference.map(|r| r.value_field), Some("dict_type"));
    }
}
