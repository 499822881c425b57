//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_stock--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: the id copied from
//! the DOM inspector leads straight to `domain/a001_stock/`.

/// Paginated table with query panel and CRUD actions.
pub const PAGE_CAT_LIST: &str = "list";

/// Drill-down page of one record (e.g. ranking detail).
pub const PAGE_CAT_DETAIL: &str = "detail";

/// System administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_SYSTEM];

/// `{entity}--{category}`
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{}--{}", entity, category)
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && ALL_CATEGORIES.contains(&parts[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids() {
        let id = page_id("a001_stock", PAGE_CAT_LIST);
        assert_eq!(id, "a001_stock--list");
        assert!(is_valid_page_id(&id));
        assert!(!is_valid_page_id("a001_stock"));
        assert!(!is_valid_page_id("a001_stock--chart"));
    }
}
