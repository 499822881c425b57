use serde::{Deserialize, Serialize};

use super::options::{MENU_REF, MENU_TYPE_OPTIONS, STATUS_OPTIONS, YES_NO_OPTIONS};
use crate::shared::crud::CrudEntity;
use crate::shared::metadata::{EntityDescriptor, FieldMetadata};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Menu {
    #[serde(default, deserialize_with = "crate::shared::crud::string_or_number")]
    pub id: String,
    pub menu_name: String,
    /// Родительский пункт; пусто для корня
    #[serde(default, deserialize_with = "crate::shared::crud::opt_string_or_number")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub menu_type: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub component: Option<String>,
    #[serde(default)]
    pub perms: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub sort: Option<i64>,
    #[serde(default)]
    pub visible: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::id(),
    FieldMetadata::text("menu_name", "菜单名称").required().max_length(50),
    FieldMetadata::reference("parent_id", "上级菜单", MENU_REF),
    FieldMetadata::enumeration("menu_type", "菜单类型", MENU_TYPE_OPTIONS).required(),
    FieldMetadata::text("path", "路由地址").max_length(200),
    FieldMetadata::text("component", "组件路径").max_length(255).hidden(),
    FieldMetadata::text("perms", "权限标识").max_length(100),
    FieldMetadata::text("icon", "图标").hidden(),
    FieldMetadata::integer("sort", "显示顺序").range(0.0, 9999.0).sortable(),
    FieldMetadata::enumeration("visible", "是否显示", YES_NO_OPTIONS).batch(),
    FieldMetadata::enumeration("status", "状态", STATUS_OPTIONS).batch(),
    FieldMetadata::create_time(),
    FieldMetadata::updated_at(),
];

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    index: "sys",
    collection: "menu",
    service_path: "/service/system/menu",
    element_name: "菜单",
    list_name: "菜单列表",
    row_key: "id",
    fields: FIELDS,
};

impl CrudEntity for Menu {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }
}
