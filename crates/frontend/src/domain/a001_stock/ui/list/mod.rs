use contracts::domain::a001_stock::Stock;
use leptos::prelude::*;

use crate::shared::crud::{CrudPage, CrudPageConfig};

/// 股票列表 (`/stock`)
#[component]
pub fn StockList() -> impl IntoView {
    let config = CrudPageConfig::<Stock>::new().query(&[
        "stock_code",
        "stock_name",
        "exchange",
        "market",
        "industry",
        "list_status",
        "list_date",
    ]);

    view! { <CrudPage config=config /> }
}
