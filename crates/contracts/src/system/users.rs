use serde::{Deserialize, Serialize};

use super::options::{SEX_OPTIONS, STATUS_OPTIONS};
use crate::shared::crud::CrudEntity;
use crate::shared::metadata::{EntityDescriptor, FieldMetadata};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "crate::shared::crud::string_or_number")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub nick_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Only sent on create, never returned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::id(),
    FieldMetadata::text("username", "用户名")
        .required()
        .min_length(2)
        .max_length(20)
        .create_only()
        .width(120),
    FieldMetadata::text("nick_name", "昵称").max_length(30),
    FieldMetadata::text("email", "邮箱").max_length(50),
    FieldMetadata::text("phone", "手机号码").max_length(11),
    FieldMetadata::enumeration("sex", "性别", SEX_OPTIONS).hidden(),
    FieldMetadata::enumeration("status", "状态", STATUS_OPTIONS).batch(),
    FieldMetadata::text("password", "密码")
        .required()
        .min_length(6)
        .max_length(20)
        .secret(),
    FieldMetadata::long_text("remark", "备注").max_length(500),
    FieldMetadata::create_time(),
    FieldMetadata::updated_at(),
];

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    index: "sys",
    collection: "user",
    service_path: "/service/system/user",
    element_name: "用户",
    list_name: "用户列表",
    row_key: "id",
    fields: FIELDS,
};

impl CrudEntity for User {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }
}

/// Связь пользователь → роли (`GET/PUT {path}/{id}/roles`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserRoles {
    #[serde(default, deserialize_with = "crate::shared::crud::string_or_number")]
    pub user_id: String,
    #[serde(default, deserialize_with = "crate::shared::crud::vec_string_or_number")]
    pub role_ids: Vec<String>,
}

impl UserRoles {
    pub fn new(user_id: impl Into<String>, role_ids: Vec<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role_ids,
        }
    }

    /// Adds or removes one role, keeping the original order
    pub fn toggle(&mut self, role_id: &str) {
        if let Some(pos) = self.role_ids.iter().position(|r| r == role_id) {
            self.role_ids.remove(pos);
        } else {
            self.role_ids.push(role_id.to_string());
        }
    }

    pub fn has(&self, role_id: &str) -> bool {
        self.role_ids.iter().any(|r| r == role_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_only_in_create_form() {
        let create: Vec<_> = DESCRIPTOR.create_fields().iter().map(|f| f.name).collect();
        let update: Vec<_> = DESCRIPTOR.update_fields().iter().map(|f| f.name).collect();
        assert!(create.contains(&"password"));
        assert!(!update.contains(&"password"));
        assert!(!update.contains(&"username"));
        assert!(!DESCRIPTOR.default_columns().contains(&"password"));
    }

    #[test]
    fn fetched_user_has_no_password() {
        let user: User = serde_json::from_str(r#"{"id":"1","username":"admin"}"#).unwrap();
        let fields = user.to_fields();
        assert!(!fields.contains_key("password"));
    }

    #[test]
    fn role_join_accepts_numeric_ids() {
        let roles: UserRoles = serde_json::from_str(r#"{"user_id":3,"role_ids":[1,"2"]}"#).unwrap();
        assert_eq!(roles, UserRoles::new("3", vec!["1".into(), "2".into()]));
    }

    #[test]
    fn toggle_role() {
        let mut roles = UserRoles::new("1", vec!["r1".into()]);
        roles.toggle("r2");
        roles.toggle("r1");
        assert_eq!(roles.role_ids, vec!["r2".to_string()]);
        assert!(roles.has("r2"));
    }
}
