use contracts::domain::a004_report_cash_flow::ReportCashFlow;
use contracts::domain::a005_ranking_cash::RankingCash;
use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use super::list::LIST_PATH;
use crate::domain::common::RankingDetail;

/// `/ranking/cash/detail/:code?period=`
#[component]
pub fn RankingCashDetail() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();

    move || {
        let code = params.with(|p| p.get("code").unwrap_or_default());
        let period = query.with(|q| q.get("period").unwrap_or_default());
        view! {
            <RankingDetail<RankingCash, ReportCashFlow>
                code=code
                period=period
                back_href=LIST_PATH
                statements_title="现金流量表"
            />
        }
    }
}
