use contracts::shared::crud::filters::seed_filters;
use contracts::system::DictDatum;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::shared::crud::{CrudPage, CrudPageConfig};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

/// 字典数据 (`/system/dict/data?type=`); the `type` filter is seeded from the URL
#[component]
pub fn DictDataList() -> impl IntoView {
    let query = use_query_map();
    let dict_type = Memo::new(move |_| query.with(|q| q.get("type").unwrap_or_default()));

    move || {
        let dict_type = dict_type.get();
        let config = CrudPageConfig::<DictDatum>::new()
            .category(PAGE_CAT_SYSTEM)
            .query(&["type", "dict_label", "status"])
            .initial_filters(seed_filters([("type", dict_type)]));
        view! { <CrudPage config=config /> }
    }
}
