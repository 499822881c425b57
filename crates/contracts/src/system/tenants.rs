use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::options::{MENU_REF, STATUS_OPTIONS, TENANT_REF};
use crate::shared::crud::CrudEntity;
use crate::shared::metadata::{EntityDescriptor, FieldMetadata};

// ============================================================================
// Tenant
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tenant {
    #[serde(default, deserialize_with = "crate::shared::crud::string_or_number")]
    pub id: String,
    pub tenant_name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub expire_time: Option<NaiveDate>,
    #[serde(default)]
    pub account_count: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

pub const TENANT_FIELDS: &[FieldMetadata] = &[
    FieldMetadata::id(),
    FieldMetadata::text("tenant_name", "租户名称").required().max_length(50),
    FieldMetadata::text("contact_name", "联系人").max_length(20),
    FieldMetadata::text("contact_phone", "联系电话").max_length(20),
    FieldMetadata::text("domain", "绑定域名").hidden(),
    FieldMetadata::date("expire_time", "过期时间").sortable().batch(),
    FieldMetadata::integer("account_count", "用户数量").range(-1.0, 100000.0),
    FieldMetadata::enumeration("status", "状态", STATUS_OPTIONS).batch(),
    FieldMetadata::long_text("remark", "备注").max_length(500),
    FieldMetadata::create_time(),
    FieldMetadata::updated_at(),
];

pub static TENANT_DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    index: "sys",
    collection: "tenant",
    service_path: "/service/system/tenant",
    element_name: "租户",
    list_name: "租户列表",
    row_key: "id",
    fields: TENANT_FIELDS,
};

impl CrudEntity for Tenant {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn descriptor() -> &'static EntityDescriptor {
        &TENANT_DESCRIPTOR
    }
}

// ============================================================================
// Tenant plan
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TenantPlan {
    #[serde(default, deserialize_with = "crate::shared::crud::string_or_number")]
    pub id: String,
    pub plan_name: String,
    #[serde(deserialize_with = "crate::shared::crud::string_or_number")]
    pub tenant_id: String,
    #[serde(default, deserialize_with = "crate::shared::crud::vec_string_or_number")]
    pub menu_ids: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

pub const TENANT_PLAN_FIELDS: &[FieldMetadata] = &[
    FieldMetadata::id(),
    FieldMetadata::text("plan_name", "套餐名称").required().max_length(50),
    FieldMetadata::reference("tenant_id", "所属租户", TENANT_REF).required(),
    FieldMetadata::id_list("menu_ids", "关联菜单", MENU_REF),
    FieldMetadata::enumeration("status", "状态", STATUS_OPTIONS).batch(),
    FieldMetadata::long_text("remark", "备注").max_length(500),
    FieldMetadata::create_time(),
    FieldMetadata::updated_at(),
];

pub static TENANT_PLAN_DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    index: "sys",
    collection: "tenant_plan",
    service_path: "/service/system/tenant-plan",
    element_name: "租户套餐",
    list_name: "租户套餐",
    row_key: "id",
    fields: TENANT_PLAN_FIELDS,
};

impl CrudEntity for TenantPlan {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn descriptor() -> &'static EntityDescriptor {
        &TENANT_PLAN_DESCRIPTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::Menu;
    use serde_json::json;

    #[test]
    fn references_accept_numeric_ids() {
        let plan: TenantPlan = serde_json::from_value(json!({
            "id": 4, "plan_name": "basic", "tenant_id": 9, "menu_ids": [1, 5]
        }))
        .unwrap();
        assert_eq!(plan.tenant_id, "9");
        assert_eq!(plan.menu_ids, vec!["1", "5"]);

        let child: Menu = serde_json::from_value(json!({
            "id": 12, "menu_name": "用户管理", "menu_type": "C", "parent_id": 1
        }))
        .unwrap();
        assert_eq!(child.parent_id.as_deref(), Some("1"));

        let root: Menu = serde_json::from_value(json!({
            "id": 1, "menu_name": "系统管理", "menu_type": "M", "parent_id": null
        }))
        .unwrap();
        assert_eq!(root.parent_id, None);
    }
}
