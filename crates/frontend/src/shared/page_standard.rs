//! Page categories for everything rendered inside a tab.
//!
//! The root element of a page carries `id="{entity}--{category}"` and
//! `data-page-category`, e.g. `id="a004_caja--list"`.

/// Paginated table of records
pub const PAGE_CAT_LIST: &str = "list";

/// Create / edit form
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Read-only analytical view
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Administration pages that are not a plain list (permissions)
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
];

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

/// `{entity}--{category}` with both halves non-empty
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids() {
        assert!(is_valid_page_id("a004_caja--list"));
        assert!(is_valid_page_id("d400_dashboard_ventas--dashboard"));
        assert!(!is_valid_page_id("a004_caja"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a004_caja--legacy"));
    }
}
