//! Per-page state of the generic CRUD page
//!
//! Query, pagination, sort and selection live in one struct so that a filter
//! change and the page reset happen in the same update: the fetch triggered
//! by that update never sees a new filter with a stale page index.

use contracts::shared::crud::filters::normalize_filters;
use contracts::shared::crud::list::{total_pages, FIRST_PAGE};
use contracts::shared::crud::{CrudEntity, EntityId, Filters, ListQuery, PageRequest, SortOrder, SortSpec};
use contracts::shared::metadata::EntityDescriptor;
use leptos::prelude::*;

// ============================================================================
// Pagination
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based
    pub current: u32,
    pub page_size: u32,
}

impl Pagination {
    pub fn new(page_size: u32) -> Self {
        Self {
            current: FIRST_PAGE,
            page_size,
        }
    }

    pub fn total_pages(&self, total: u64) -> u32 {
        total_pages(total, self.page_size)
    }
}

// ============================================================================
// Selection
// ============================================================================

/// Selected row keys and rows, always the same length and order
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<T> {
    keys: Vec<String>,
    rows: Vec<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            rows: Vec::new(),
        }
    }
}

impl<T: Clone> Selection<T> {
    /// Replaces the selection; duplicate keys keep their first occurrence
    pub fn set(&mut self, pairs: Vec<(String, T)>) {
        self.clear();
        for (key, row) in pairs {
            if !self.contains(&key) {
                self.keys.push(key);
                self.rows.push(row);
            }
        }
    }

    pub fn toggle(&mut self, key: String, row: T, checked: bool) {
        match (self.position(&key), checked) {
            (None, true) => {
                self.keys.push(key);
                self.rows.push(row);
            }
            (Some(pos), false) => {
                self.keys.remove(pos);
                self.rows.remove(pos);
            }
            _ => {}
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.rows.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<E: CrudEntity> Selection<E> {
    /// Backend ids of the selected rows, in selection order
    pub fn ids(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.id().as_string()).collect()
    }
}

// ============================================================================
// Modals
// ============================================================================

/// Which overlay of the page is open
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CrudModal<E> {
    #[default]
    Closed,
    Create,
    Update(E),
    BatchUpdate(Vec<String>),
    Detail(String),
    Import,
}

impl<E> CrudModal<E> {
    pub fn is_open(&self) -> bool {
        !matches!(self, CrudModal::Closed)
    }
}

// ============================================================================
// Action visibility
// ============================================================================

/// Which action groups a page shows (presentation only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionConfig {
    pub create: bool,
    pub modify: bool,
    pub remove: bool,
    pub import: bool,
    pub export: bool,
}

impl ActionConfig {
    pub const ALL: ActionConfig = ActionConfig {
        create: true,
        modify: true,
        remove: true,
        import: true,
        export: true,
    };

    pub const READ_ONLY: ActionConfig = ActionConfig {
        create: false,
        modify: false,
        remove: false,
        import: false,
        export: false,
    };

    /// create + modify + remove
    pub const fn editable() -> Self {
        Self {
            create: true,
            modify: true,
            remove: true,
            import: false,
            export: false,
        }
    }

    pub const fn with_export(mut self) -> Self {
        self.export = true;
        self
    }

    pub const fn with_remove(mut self) -> Self {
        self.remove = true;
        self
    }
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self::ALL
    }
}

// ============================================================================
// Page state
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CrudPageState<E> {
    pub pagination: Pagination,
    /// Normalized user filters
    pub filters: Filters,
    /// Always sent, never shown in the query panel (e.g. the stock of a detail page)
    pub fixed_filters: Filters,
    pub sort: Vec<SortSpec>,
    pub selection: Selection<E>,
    pub modal: CrudModal<E>,
    pub visible_columns: Vec<&'static str>,
    default_page_size: u32,
}

impl<E: CrudEntity> CrudPageState<E> {
    pub fn new(descriptor: &EntityDescriptor, default_page_size: u32) -> Self {
        Self {
            pagination: Pagination::new(default_page_size),
            filters: Filters::new(),
            fixed_filters: Filters::new(),
            sort: Vec::new(),
            selection: Selection::default(),
            modal: CrudModal::Closed,
            visible_columns: descriptor.default_columns(),
            default_page_size,
        }
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = normalize_filters(filters);
        self
    }

    pub fn with_fixed_filters(mut self, filters: Filters) -> Self {
        self.fixed_filters = normalize_filters(filters);
        self
    }

    /// Request for the current state
    pub fn list_query(&self) -> ListQuery {
        let mut filters = self.filters.clone();
        for (key, value) in &self.fixed_filters {
            filters.insert(key.clone(), value.clone());
        }
        ListQuery::new(
            PageRequest::new(
                self.pagination.current,
                self.pagination.page_size,
                &self.sort,
            ),
            filters,
        )
    }

    /// New filters from the query panel: strip empties and go back to page 1.
    /// Returns whether the list request changed; if not, the caller refetches.
    pub fn submit_query(&mut self, raw: Filters) -> bool {
        let before = self.list_query();
        self.filters = normalize_filters(raw);
        self.pagination.current = FIRST_PAGE;
        self.selection.clear();
        self.list_query() != before
    }

    /// Query panel reset: no filters, first page, default page size.
    /// Returns whether the list request changed.
    pub fn reset_query(&mut self) -> bool {
        let before = self.list_query();
        self.filters.clear();
        self.pagination = Pagination::new(self.default_page_size);
        self.selection.clear();
        self.list_query() != before
    }

    /// Pagination callback; a page-size change always lands on page 1
    pub fn change_page(&mut self, page: u32, page_size: u32) {
        if page_size != self.pagination.page_size {
            self.pagination.page_size = page_size;
            self.pagination.current = FIRST_PAGE;
        } else {
            self.pagination.current = page.max(FIRST_PAGE);
        }
        self.selection.clear();
    }

    /// Header click on a sortable column: ascend → descend → none
    pub fn toggle_sort(&mut self, field: &str) {
        let current = self
            .sort
            .iter()
            .find(|s| s.field == field)
            .map(|s| s.order);
        self.sort.clear();
        if let Some(order) = SortOrder::next(current) {
            self.sort.push(SortSpec::new(field, order));
        }
        self.pagination.current = FIRST_PAGE;
        self.selection.clear();
    }

    pub fn sort_order(&self, field: &str) -> Option<SortOrder> {
        self.sort.iter().find(|s| s.field == field).map(|s| s.order)
    }

    /// Page shrank under the current index (e.g. after deleting the last rows)
    pub fn clamp_page(&mut self, total: u64) -> bool {
        let last = self.pagination.total_pages(total);
        if self.pagination.current > last {
            self.pagination.current = last;
            return true;
        }
        false
    }

    pub fn toggle_column(&mut self, column: &'static str, visible: bool) {
        let pos = self.visible_columns.iter().position(|c| *c == column);
        match (pos, visible) {
            (None, true) => self.visible_columns.push(column),
            (Some(pos), false) => {
                self.visible_columns.remove(pos);
            }
            _ => {}
        }
    }

    pub fn is_column_visible(&self, column: &str) -> bool {
        self.visible_columns.iter().any(|c| *c == column)
    }

    pub fn set_selection(&mut self, rows: &[E]) {
        self.selection
            .set(rows.iter().map(|r| (r.row_key(), r.clone())).collect());
    }

    pub fn begin_create(&mut self) {
        self.modal = CrudModal::Create;
    }

    pub fn begin_update(&mut self, row: E) {
        self.modal = CrudModal::Update(row);
    }

    /// One selected row opens the single update form, several open the batch form
    pub fn begin_batch_modify(&mut self) {
        self.modal = match self.selection.len() {
            0 => CrudModal::Closed,
            1 => match self.selection.rows().first() {
                Some(row) => CrudModal::Update(row.clone()),
                None => CrudModal::Closed,
            },
            _ => CrudModal::BatchUpdate(self.selection.ids()),
        };
    }

    pub fn open_detail(&mut self, id: String) {
        self.modal = CrudModal::Detail(id);
    }

    pub fn open_import(&mut self) {
        self.modal = CrudModal::Import;
    }

    pub fn close_modal(&mut self) {
        self.modal = CrudModal::Closed;
    }
}

pub fn create_state<E: CrudEntity>(state: CrudPageState<E>) -> RwSignal<CrudPageState<E>> {
    RwSignal::new(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_stock::{Stock, StockId};
    use contracts::domain::a002_report_balance_sheet::ReportBalanceSheet;
    use serde_json::json;

    fn filters(value: serde_json::Value) -> Filters {
        match value {
            serde_json::Value::Object(map) => map,
            _ => Filters::new(),
        }
    }

    fn report_state() -> CrudPageState<ReportBalanceSheet> {
        CrudPageState::new(ReportBalanceSheet::descriptor(), 10)
    }

    fn stock(id: &str, code: &str) -> Stock {
        Stock {
            id: StockId::new(id),
            stock_code: code.to_string(),
            stock_name: format!("股票{}", code),
            ..Stock::default()
        }
    }

    #[test]
    fn submit_query_resets_page_in_same_update() {
        let mut state = report_state();
        state.change_page(3, 10);
        state.submit_query(filters(json!({
            "stock_code": "600000",
            "year": 2023,
            "quarter": 4,
            "report_date": [],
            "stock_name": ""
        })));

        let query = state.list_query();
        assert_eq!(query.page.current, 1);
        assert_eq!(
            serde_json::Value::Object(query.filters),
            json!({"stock_code": "600000", "year": 2023, "quarter": 4})
        );
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = report_state();
        state.change_page(1, 50);
        state.change_page(4, 50);
        state.submit_query(filters(json!({"stock_code": "600000"})));
        state.reset_query();

        assert_eq!(state.pagination, Pagination::new(10));
        assert!(state.filters.is_empty());
        assert_eq!(state.list_query().page.current, 1);
    }

    #[test]
    fn unchanged_query_reports_no_change() {
        let mut state = report_state();
        assert!(!state.reset_query());
        assert!(state.submit_query(filters(json!({"year": 2023}))));
        assert!(!state.submit_query(filters(json!({"year": 2023, "stock_name": ""}))));
        assert!(state.reset_query());
        assert!(!state.reset_query());

        state.change_page(2, 10);
        assert!(state.submit_query(Filters::new()));
    }

    #[test]
    fn page_size_change_goes_to_first_page() {
        let mut state = report_state();
        state.change_page(5, 10);
        assert_eq!(state.pagination.current, 5);
        state.change_page(5, 20);
        assert_eq!(state.pagination, Pagination { current: 1, page_size: 20 });
    }

    #[test]
    fn fixed_filters_survive_reset() {
        let mut state = report_state().with_fixed_filters(filters(json!({"stock_code": "600000"})));
        state.submit_query(filters(json!({"year": 2022})));
        state.reset_query();
        assert_eq!(
            serde_json::Value::Object(state.list_query().filters),
            json!({"stock_code": "600000"})
        );
    }

    #[test]
    fn sort_cycles_through_three_states() {
        let mut state = report_state();
        state.toggle_sort("year");
        assert_eq!(state.sort_order("year"), Some(SortOrder::Ascend));
        state.toggle_sort("year");
        assert_eq!(state.sort_order("year"), Some(SortOrder::Descend));
        assert!(state.list_query().page.sort.is_some());
        state.toggle_sort("year");
        assert_eq!(state.sort_order("year"), None);
        assert_eq!(state.list_query().page.sort, None);
    }

    #[test]
    fn sorting_drops_selection() {
        let mut state: CrudPageState<Stock> = CrudPageState::new(Stock::descriptor(), 10);
        state.change_page(3, 10);
        state.set_selection(&[stock("1", "600000")]);
        state.toggle_sort("list_date");
        assert!(state.selection.is_empty());
        assert_eq!(state.pagination.current, 1);
    }

    #[test]
    fn selection_keys_and_rows_in_lockstep() {
        let mut state: CrudPageState<Stock> = CrudPageState::new(Stock::descriptor(), 10);
        let a = stock("1", "600000");
        let b = stock("2", "000001");
        state.set_selection(&[a.clone(), b.clone(), a.clone()]);
        assert_eq!(state.selection.keys(), &["600000".to_string(), "000001".to_string()]);
        assert_eq!(state.selection.rows().len(), 2);
        assert_eq!(state.selection.ids(), vec!["1".to_string(), "2".to_string()]);

        state.selection.toggle("600000".into(), a, false);
        assert_eq!(state.selection.keys(), &["000001".to_string()]);
        assert_eq!(state.selection.rows(), &[b]);
    }

    #[test]
    fn batch_modify_degrades_to_update_for_one_row() {
        let mut state: CrudPageState<Stock> = CrudPageState::new(Stock::descriptor(), 10);
        state.begin_batch_modify();
        assert_eq!(state.modal, CrudModal::Closed);

        let a = stock("1", "600000");
        state.set_selection(&[a.clone()]);
        state.begin_batch_modify();
        assert_eq!(state.modal, CrudModal::Update(a.clone()));

        state.set_selection(&[a, stock("2", "000001")]);
        state.begin_batch_modify();
        assert_eq!(
            state.modal,
            CrudModal::BatchUpdate(vec!["1".to_string(), "2".to_string()])
        );
    }

    #[test]
    fn clamp_after_shrink() {
        let mut state = report_state();
        state.change_page(3, 10);
        assert!(state.clamp_page(15));
        assert_eq!(state.pagination.current, 2);
        assert!(!state.clamp_page(15));
    }

    #[test]
    fn column_toggle() {
        let mut state = report_state();
        assert!(!state.is_column_visible("inventory"));
        state.toggle_column("inventory", true);
        assert!(state.is_column_visible("inventory"));
        state.toggle_column("total_assets", false);
        assert!(!state.is_column_visible("total_assets"));
    }
}
