use crate::shared::metadata::{EnumOption, RefSpec};

pub const STATUS_OPTIONS: &[EnumOption] =
    &[EnumOption::new("0", "正常"), EnumOption::new("1", "停用")];

pub const SEX_OPTIONS: &[EnumOption] = &[
    EnumOption::new("0", "男"),
    EnumOption::new("1", "女"),
    EnumOption::new("2", "未知"),
];

pub const YES_NO_OPTIONS: &[EnumOption] =
    &[EnumOption::new("Y", "是"), EnumOption::new("N", "否")];

pub const MENU_TYPE_OPTIONS: &[EnumOption] = &[
    EnumOption::new("M", "目录"),
    EnumOption::new("C", "菜单"),
    EnumOption::new("F", "按钮"),
];

pub const MENU_REF: RefSpec = RefSpec {
    service_path: "/service/system/menu",
    value_field: "id",
    label_field: "menu_name",
};

pub const ROLE_REF: RefSpec = RefSpec {
    service_path: "/service/system/role",
    value_field: "id",
    label_field: "role_name",
};

/// Dictionary types are referenced by their `dict_type` value, not by id
pub const DICT_TYPE_REF: RefSpec = RefSpec {
    service_path: "/service/system/dict-type",
    value_field: "dict_type",
    label_field: "dict_name",
};

pub const TENANT_REF: RefSpec = RefSpec {
    service_path: "/service/system/tenant",
    value_field: "id",
    label_field: "tenant_name",
};
