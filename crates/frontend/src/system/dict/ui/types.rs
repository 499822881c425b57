use contracts::system::DictType;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::crud::{ActionConfig, CrudPage, CrudPageConfig, RowAction};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

pub fn dict_data_href(dict_type: &str) -> String {
    format!("/system/dict/data?type={}", urlencoding::encode(dict_type))
}

/// 字典管理 (`/system/dict`)
#[component]
pub fn DictTypesList() -> impl IntoView {
    let navigate = StoredValue::new_local(use_navigate());

    let config = CrudPageConfig::<DictType>::new()
        .category(PAGE_CAT_SYSTEM)
        .actions(ActionConfig::editable().with_export())
        .query(&["dict_name", "dict_type", "status"])
        .row_action(RowAction::new("字典数据", move |row: DictType| {
            let href = dict_data_href(&row.dict_type);
            navigate.with_value(|nav| nav(&href, Default::default()));
        }));

    view! { <CrudPage config=config /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_carries_type() {
        assert_eq!(dict_data_href("sys_user_sex"), "/system/dict/data?type=sys_user_sex");
        assert_eq!(dict_data_href("a&b"), "/system/dict/data?type=a%26b");
    }
}
