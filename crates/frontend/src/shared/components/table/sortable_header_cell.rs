//! Сортируемая ячейка заголовка таблицы
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="资产总计"
//!     field="total_assets"
//!     order=Signal::derive(move || state.with(|s| s.sort_order("total_assets")))
//!     on_sort=Callback::new(move |field| state.update(|s| s.toggle_sort(field)))
//!     align="right"
//! />
//! ```

use contracts::shared::crud::SortOrder;
use leptos::prelude::*;
use thaw::*;

/// Индикатор направления: ▲ / ▼ / ⇅
pub fn sort_indicator(order: Option<SortOrder>) -> &'static str {
    match order {
        Some(SortOrder::Ascend) => " ▲",
        Some(SortOrder::Descend) => " ▼",
        None => " ⇅",
    }
}

pub fn sort_class(order: Option<SortOrder>) -> &'static str {
    if order.is_some() {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Клик по заголовку переключает сортировку: по возрастанию → по убыванию → нет
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// JSON-имя поля
    field: &'static str,

    #[prop(into)]
    order: Signal<Option<SortOrder>>,

    on_sort: Callback<&'static str>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// left / right
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(field)
            >
                {label}
                <span class=move || sort_class(order.get())>
                    {move || sort_indicator(order.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_per_order() {
        assert_eq!(sort_indicator(Some(SortOrder::Ascend)), " ▲");
        assert_eq!(sort_indicator(Some(SortOrder::Descend)), " ▼");
        assert_eq!(sort_indicator(None), " ⇅");
        assert!(sort_class(Some(SortOrder::Ascend)).ends_with("--active"));
    }
}
