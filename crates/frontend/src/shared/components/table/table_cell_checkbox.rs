//! Чекбокс выбора строки
//!
//! ```rust,ignore
//! <TableCellCheckbox
//!     item_id=row.row_key()
//!     selected=selected_keys
//!     on_change=Callback::new(move |(key, checked)| toggle_row(key, checked))
//! />
//! ```

use leptos::prelude::*;
use thaw::*;

/// Клик по чекбоксу не доходит до строки
#[component]
pub fn TableCellCheckbox(
    /// Ключ строки
    #[prop(into)]
    item_id: String,

    #[prop(into)]
    selected: Signal<Vec<String>>,

    /// (ключ, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let item_id_for_checked = item_id.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.with(|keys| keys.contains(&item_id_for_checked))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((item_id.clone(), checked));
                }
            />
        </TableCell>
    }
}
