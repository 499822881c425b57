use serde::{Deserialize, Serialize};

use super::options::{MENU_REF, STATUS_OPTIONS};
use crate::shared::crud::CrudEntity;
use crate::shared::metadata::{EntityDescriptor, FieldMetadata};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Role {
    #[serde(default, deserialize_with = "crate::shared::crud::string_or_number")]
    pub id: String,
    pub role_name: String,
    pub role_key: String,
    #[serde(default)]
    pub sort: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    /// Меню, доступные роли
    #[serde(default, deserialize_with = "crate::shared::crud::vec_string_or_number")]
    pub menu_ids: Vec<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::id(),
    FieldMetadata::text("role_name", "角色名称").required().max_length(30),
    FieldMetadata::text("role_key", "权限字符").required().max_length(100),
    FieldMetadata::integer("sort", "显示顺序").range(0.0, 9999.0).sortable(),
    FieldMetadata::enumeration("status", "状态", STATUS_OPTIONS).batch(),
    FieldMetadata::id_list("menu_ids", "菜单权限", MENU_REF),
    FieldMetadata::long_text("remark", "备注").max_length(500),
    FieldMetadata::create_time(),
    FieldMetadata::updated_at(),
];

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    index: "sys",
    collection: "role",
    service_path: "/service/system/role",
    element_name: "角色",
    list_name: "角色列表",
    row_key: "id",
    fields: FIELDS,
};

impl CrudEntity for Role {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::ListResponse;
    use serde_json::json;

    #[test]
    fn list_with_numeric_ids() {
        let page: ListResponse<Role> = serde_json::from_value(json!({
            "records": [
                {"id": 1, "role_name": "admin", "role_key": "admin", "menu_ids": [1, 2]},
                {"id": "r2", "role_name": "guest", "role_key": "guest"}
            ],
            "total": 2
        }))
        .unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.records[0].id(), "1");
        assert_eq!(page.records[0].menu_ids, vec!["1", "2"]);
        assert_eq!(page.records[1].row_key(), "r2");
        assert!(page.records[1].menu_ids.is_empty());
    }
}
