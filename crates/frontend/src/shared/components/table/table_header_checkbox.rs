//! Чекбокс «выбрать все» в заголовке таблицы
//!
//! ```rust,ignore
//! <TableHeaderCheckbox
//!     row_keys=Signal::derive(move || list.items.with(|rows| rows.iter().map(|r| r.row_key()).collect()))
//!     selected=Signal::derive(move || state.with(|s| s.selection.keys().to_vec()))
//!     on_change=Callback::new(move |check_all: bool| select_all(check_all))
//! />
//! ```

use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Состояние по ключам текущей страницы и выбранным ключам
pub fn header_state(row_keys: &[String], selected: &[String]) -> CheckboxState {
    if row_keys.is_empty() {
        return CheckboxState::Unchecked;
    }
    let count = row_keys.iter().filter(|k| selected.contains(k)).count();
    if count == 0 {
        CheckboxState::Unchecked
    } else if count == row_keys.len() {
        CheckboxState::Checked
    } else {
        CheckboxState::Indeterminate
    }
}

/// Три состояния: unchecked / checked / indeterminate
#[component]
pub fn TableHeaderCheckbox(
    /// Ключи строк текущей страницы
    #[prop(into)]
    row_keys: Signal<Vec<String>>,

    /// Выбранные ключи
    #[prop(into)]
    selected: Signal<Vec<String>>,

    /// true = выбрать все, false = снять все
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_state =
        Signal::derive(move || row_keys.with(|keys| selected.with(|sel| header_state(keys, sel))));

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate доступен только через DOM-свойство
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let state = checkbox_state.get();
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state, CheckboxState::Indeterminate));
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), CheckboxState::Checked)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn three_states() {
        let rows = keys(&["a", "b"]);
        assert_eq!(header_state(&rows, &[]), CheckboxState::Unchecked);
        assert_eq!(header_state(&rows, &keys(&["a"])), CheckboxState::Indeterminate);
        assert_eq!(header_state(&rows, &keys(&["b", "a"])), CheckboxState::Checked);
        assert_eq!(header_state(&[], &keys(&["a"])), CheckboxState::Unchecked);
    }
}
