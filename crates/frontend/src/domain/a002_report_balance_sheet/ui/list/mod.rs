use contracts::domain::a002_report_balance_sheet::ReportBalanceSheet;
use leptos::prelude::*;

use crate::domain::common::REPORT_QUERY;
use crate::shared::crud::{CrudPage, CrudPageConfig};

#[component]
pub fn BalanceSheetList() -> impl IntoView {
    let config = CrudPageConfig::<ReportBalanceSheet>::new().query(REPORT_QUERY);

    view! { <CrudPage config=config /> }
}
