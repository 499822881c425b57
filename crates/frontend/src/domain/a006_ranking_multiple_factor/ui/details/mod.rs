use contracts::domain::a003_report_income_statement::ReportIncomeStatement;
use contracts::domain::a006_ranking_multiple_factor::RankingMultipleFactor;
use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use super::list::LIST_PATH;
use crate::domain::common::RankingDetail;

/// `/ranking/multiple-factor/detail/:code?period=`
#[component]
pub fn RankingMultipleFactorDetail() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();

    move || {
        let code = params.with(|p| p.get("code").unwrap_or_default());
        let period = query.with(|q| q.get("period").unwrap_or_default());
        view! {
            <RankingDetail<RankingMultipleFactor, ReportIncomeStatement>
                code=code
                period=period
                back_href=LIST_PATH
                statements_title="利润表"
            />
        }
    }
}
