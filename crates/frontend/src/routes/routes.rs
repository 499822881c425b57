use crate::domain::a001_stock::ui::list::StockList;
use crate::domain::a002_report_balance_sheet::ui::list::BalanceSheetList;
use crate::domain::a003_report_income_statement::ui::list::IncomeStatementList;
use crate::domain::a004_report_cash_flow::ui::list::CashFlowList;
use crate::domain::a005_ranking_cash::ui::details::RankingCashDetail;
use crate::domain::a005_ranking_cash::ui::list::RankingCashList;
use crate::domain::a006_ranking_multiple_factor::ui::details::RankingMultipleFactorDetail;
use crate::domain::a006_ranking_multiple_factor::ui::list::RankingMultipleFactorList;
use crate::layout::Shell;
use crate::system::dict::ui::data::DictDataList;
use crate::system::dict::ui::types::DictTypesList;
use crate::system::menus::ui::list::MenusList;
use crate::system::roles::ui::list::RolesList;
use crate::system::tenants::ui::list::TenantsList;
use crate::system::tenants::ui::plans::TenantPlansList;
use crate::system::users::ui::list::UsersList;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes, A};
use leptos_router::path;

pub const HOME_PATH: &str = "/stock";

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1 class="page__title">"页面不存在"</h1>
            <A href=HOME_PATH>"返回首页"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=HOME_PATH /> } />
                    <Route path=path!("/stock") view=StockList />

                    <Route path=path!("/report/balance-sheet") view=BalanceSheetList />
                    <Route path=path!("/report/income-statement") view=IncomeStatementList />
                    <Route path=path!("/report/cash-flow") view=CashFlowList />

                    <Route path=path!("/ranking/cash") view=RankingCashList />
                    <Route path=path!("/ranking/cash/detail/:code") view=RankingCashDetail />
                    <Route path=path!("/ranking/multiple-factor") view=RankingMultipleFactorList />
                    <Route
                        path=path!("/ranking/multiple-factor/detail/:code")
                        view=RankingMultipleFactorDetail
                    />

                    <Route path=path!("/system/user") view=UsersList />
                    <Route path=path!("/system/role") view=RolesList />
                    <Route path=path!("/system/menu") view=MenusList />
                    <Route path=path!("/system/dict") view=DictTypesList />
                    <Route path=path!("/system/dict/data") view=DictDataList />
                    <Route path=path!("/system/tenant") view=TenantsList />
                    <Route path=path!("/system/tenant-plan") view=TenantPlansList />
                </Routes>
            </Shell>
        </Router>
    }
}
