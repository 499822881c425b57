use contracts::domain::a006_ranking_multiple_factor::RankingMultipleFactor;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::domain::common::{ranking_detail_href, RANKING_QUERY};
use crate::shared::crud::{ActionConfig, CrudPage, CrudPageConfig, RowAction};

pub const LIST_PATH: &str = "/ranking/multiple-factor";

#[component]
pub fn RankingMultipleFactorList() -> impl IntoView {
    let navigate = StoredValue::new_local(use_navigate());

    let config = CrudPageConfig::<RankingMultipleFactor>::new()
        .actions(ActionConfig::READ_ONLY.with_export().with_remove())
        .query(RANKING_QUERY)
        .row_action(RowAction::new("详情", move |row: RankingMultipleFactor| {
            let href = ranking_detail_href(LIST_PATH, &row.stock_code, &row.period);
            navigate.with_value(|nav| nav(&href, Default::default()));
        }));

    view! { <CrudPage config=config /> }
}
