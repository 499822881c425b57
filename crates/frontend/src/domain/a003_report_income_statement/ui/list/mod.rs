use contracts::domain::a003_report_income_statement::ReportIncomeStatement;
use leptos::prelude::*;

use crate::domain::common::REPORT_QUERY;
use crate::shared::crud::{CrudPage, CrudPageConfig};

#[component]
pub fn IncomeStatementList() -> impl IntoView {
    let config = CrudPageConfig::<ReportIncomeStatement>::new().query(REPORT_QUERY);

    view! { <CrudPage config=config /> }
}
