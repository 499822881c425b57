//! Paginated table body: columns from field metadata, controlled selection

use contracts::shared::crud::{CrudEntity, SortOrder, SortSpec};
use contracts::shared::metadata::FieldMetadata;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableCellNumber, TableHeaderCheckbox,
};
use crate::shared::crud::format::{as_number, colored_by_sign, format_value};

/// Button in the trailing actions column
pub struct RowAction<E: Send + Sync + 'static> {
    pub label: &'static str,
    pub on_click: Callback<E>,
    pub danger: bool,
}

impl<E: Send + Sync + 'static> Clone for RowAction<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Send + Sync + 'static> Copy for RowAction<E> {}

impl<E: Send + Sync + 'static> RowAction<E> {
    pub fn new(label: &'static str, on_click: impl Fn(E) + Send + Sync + 'static) -> Self {
        Self {
            label,
            on_click: Callback::new(on_click),
            danger: false,
        }
    }

    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }
}

fn order_of(sort: &[SortSpec], field: &str) -> Option<SortOrder> {
    sort.iter().find(|s| s.field == field).map(|s| s.order)
}

#[component]
pub fn DataTable<E>(
    /// Visible columns, in display order
    #[prop(into)]
    columns: Signal<Vec<&'static FieldMetadata>>,
    #[prop(into)] rows: Signal<Vec<E>>,
    #[prop(into)] loading: Signal<bool>,
    /// Row keys of the current selection
    #[prop(into)]
    selected: Signal<Vec<String>>,
    /// (key, checked) of one row
    on_toggle_row: Callback<(String, bool)>,
    /// Header checkbox: all rows of the page or none
    on_toggle_all: Callback<bool>,
    #[prop(into)] sort: Signal<Vec<SortSpec>>,
    on_sort: Callback<&'static str>,
    #[prop(optional)] row_actions: Vec<RowAction<E>>,
    /// Hide the checkbox column (read-only pages)
    #[prop(optional)]
    no_selection: bool,
) -> impl IntoView
where
    E: CrudEntity,
{
    let row_actions = StoredValue::new(row_actions);
    let has_actions = row_actions.with_value(|a| !a.is_empty());
    let row_keys = Signal::derive(move || rows.with(|r| r.iter().map(|row| row.row_key()).collect::<Vec<_>>()));

    view! {
        <div class="table-wrapper">
            <Table>
                <TableHeader>
                    <TableRow>
                        {(!no_selection).then(|| view! {
                            <TableHeaderCheckbox row_keys=row_keys selected=selected on_change=on_toggle_all />
                        })}
                        {move || {
                            columns
                                .get()
                                .into_iter()
                                .map(|field| {
                                    let min_width = field.ui.column_width.unwrap_or(100) as f64;
                                    let align = if field.field_type.align_right() { "right" } else { "left" };
                                    if field.ui.sortable {
                                        let name = field.name;
                                        let order = Signal::derive(move || sort.with(|s| order_of(s, name)));
                                        view! {
                                            <SortableHeaderCell
                                                label=field.label
                                                field=name
                                                order=order
                                                on_sort=on_sort
                                                min_width=min_width
                                                align=align
                                            />
                                        }
                                        .into_any()
                                    } else {
                                        view! {
                                            <TableHeaderCell resizable=false min_width=min_width>
                                                {field.label}
                                            </TableHeaderCell>
                                        }
                                        .into_any()
                                    }
                                })
                                .collect_view()
                        }}
                        {has_actions.then(|| view! {
                            <TableHeaderCell resizable=false min_width=140.0>"操作"</TableHeaderCell>
                        })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|row| row.row_key()
                        children=move |row: E| {
                            let key = row.row_key();
                            let fields = row.to_fields();
                            let cells = move || {
                                columns
                                    .get()
                                    .into_iter()
                                    .map(|field| {
                                        let value = fields.get(field.name).unwrap_or(&Value::Null);
                                        let text = format_value(field, value);
                                        if field.field_type.is_numeric() {
                                            view! {
                                                <TableCellNumber
                                                    text=text
                                                    value=as_number(value)
                                                    color_by_sign=colored_by_sign(field)
                                                />
                                            }
                                            .into_any()
                                        } else {
                                            view! {
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{text}</TableCellLayout>
                                                </TableCell>
                                            }
                                            .into_any()
                                        }
                                    })
                                    .collect_view()
                            };
                            let actions = has_actions.then(|| {
                                let row = row.clone();
                                view! {
                                    <TableCell on:click=|e| e.stop_propagation()>
                                        <div class="row-actions">
                                            {row_actions
                                                .get_value()
                                                .into_iter()
                                                .map(|action| {
                                                    let row = row.clone();
                                                    view! {
                                                        <a
                                                            class=if action.danger { "row-action row-action--danger" } else { "row-action" }
                                                            href="#"
                                                            on:click=move |ev| {
                                                                ev.prevent_default();
                                                                action.on_click.run(row.clone());
                                                            }
                                                        >
                                                            {action.label}
                                                        </a>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </TableCell>
                                }
                            });
                            view! {
                                <TableRow>
                                    {(!no_selection).then(|| view! {
                                        <TableCellCheckbox item_id=key selected=selected on_change=on_toggle_row />
                                    })}
                                    {cells}
                                    {actions}
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
            <Show when=move || loading.get()>
                <div class="table-overlay">
                    <Spinner />
                </div>
            </Show>
            <Show when=move || !loading.get() && rows.with(|r| r.is_empty())>
                <div class="table-empty">"暂无数据"</div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_order_by_field() {
        let sort = vec![SortSpec::new("year", SortOrder::Descend)];
        assert_eq!(order_of(&sort, "year"), Some(SortOrder::Descend));
        assert_eq!(order_of(&sort, "quarter"), None);
    }
}
