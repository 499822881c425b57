//! List request / response shapes shared by every entity service

use serde::{Deserialize, Serialize};

use super::filters::Filters;

pub const FIRST_PAGE: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascend,
    Descend,
}

impl SortOrder {
    /// Header click cycle: none → ascend → descend → none
    pub fn next(current: Option<SortOrder>) -> Option<SortOrder> {
        match current {
            None => Some(SortOrder::Ascend),
            Some(SortOrder::Ascend) => Some(SortOrder::Descend),
            Some(SortOrder::Descend) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }
}

/// `{current, page_size, sort?}` with `sort` JSON-encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub current: u32,
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl PageRequest {
    pub fn new(current: u32, page_size: u32, sort: &[SortSpec]) -> Self {
        Self {
            current: current.max(FIRST_PAGE),
            page_size,
            sort: encode_sort(sort),
        }
    }
}

/// Encodes the sort list as JSON; empty list means "no sort"
pub fn encode_sort(sort: &[SortSpec]) -> Option<String> {
    if sort.is_empty() {
        return None;
    }
    serde_json::to_string(sort).ok()
}

/// Full list request: pagination plus already-normalized filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(flatten)]
    pub filters: Filters,
}

impl ListQuery {
    pub fn new(page: PageRequest, filters: Filters) -> Self {
        Self { page, filters }
    }

    /// Query used to load option lists for reference fields
    pub fn options(page_size: u32) -> Self {
        Self {
            page: PageRequest::new(FIRST_PAGE, page_size, &[]),
            filters: Filters::new(),
        }
    }
}

/// `{records, total}`; older endpoints answer with `items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(alias = "items")]
    pub records: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total: 0,
        }
    }
}

/// Number of pages for `total` rows, never less than one
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if total == 0 || page_size == 0 {
        return 1;
    }
    let pages = (total + page_size as u64 - 1) / page_size as u64;
    pages.min(u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sort_is_json_encoded_list() {
        let page = PageRequest::new(
            2,
            20,
            &[
                SortSpec::new("total_assets", SortOrder::Descend),
                SortSpec::new("year", SortOrder::Ascend),
            ],
        );
        assert_eq!(
            page.sort.as_deref(),
            Some(r#"[{"field":"total_assets","order":"descend"},{"field":"year","order":"ascend"}]"#)
        );
        assert_eq!(PageRequest::new(0, 10, &[]).current, 1);
        assert_eq!(PageRequest::new(1, 10, &[]).sort, None);
    }

    #[test]
    fn list_query_flattens_filters() {
        let mut filters = Filters::new();
        filters.insert("stock_code".into(), json!("600000"));
        let query = ListQuery::new(PageRequest::new(1, 10, &[]), filters);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"current": 1, "page_size": 10, "stock_code": "600000"})
        );
    }

    #[test]
    fn response_accepts_items_alias() {
        let a: ListResponse<serde_json::Value> =
            serde_json::from_value(json!({"records": [{"id": "1"}], "total": 1})).unwrap();
        let b: ListResponse<serde_json::Value> =
            serde_json::from_value(json!({"items": [{"id": "1"}], "total": 1})).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sort_cycle_and_page_count() {
        assert_eq!(SortOrder::next(None), Some(SortOrder::Ascend));
        assert_eq!(SortOrder::next(Some(SortOrder::Descend)), None);
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(21, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
    }
}
