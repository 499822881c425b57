use contracts::domain::a004_report_cash_flow::ReportCashFlow;
use leptos::prelude::*;

use crate::domain::common::REPORT_QUERY;
use crate::shared::crud::{CrudPage, CrudPageConfig};

#[component]
pub fn CashFlowList() -> impl IntoView {
    let config = CrudPageConfig::<ReportCashFlow>::new().query(REPORT_QUERY);

    view! { <CrudPage config=config /> }
}
