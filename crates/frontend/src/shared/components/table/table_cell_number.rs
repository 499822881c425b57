//! Ячейка с числом: выравнивание вправо, цвет по знаку
//!
//! ```rust,ignore
//! <TableCellNumber text=format_money(v) value=Some(v) color_by_sign=true />
//! ```

use leptos::prelude::*;
use thaw::*;

pub fn sign_style(value: Option<f64>) -> &'static str {
    match value {
        Some(v) if v > 0.0 => "color: var(--color-success-700)",
        Some(v) if v < 0.0 => "color: var(--color-error-700)",
        _ => "",
    }
}

#[component]
pub fn TableCellNumber(
    /// Уже отформатированный текст
    #[prop(into)]
    text: String,

    /// Исходное значение для цветовой индикации
    value: Option<f64>,

    /// Положительные зелёным, отрицательные красным
    #[prop(optional)]
    color_by_sign: bool,
) -> impl IntoView {
    let style = if color_by_sign { sign_style(value) } else { "" };

    view! {
        <TableCell class="text-right">
            <span style=style>{text}</span>
        </TableCell>
    }
}
