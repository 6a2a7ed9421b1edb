//! Paginated envelope returned by every list endpoint:
//! `{ "data": [...], "meta": { "total", "page", "pages", "limit" } }`

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page counters. `page` is 1-based, as the backend services count it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: usize,
    pub page: usize,
    pub pages: usize,
    pub limit: usize,
}

impl PageMeta {
    pub fn new(total: usize, page: usize, limit: usize) -> Self {
        let limit = limit.max(1);
        let pages = if total == 0 { 1 } else { total.div_ceil(limit) };
        Self {
            total,
            page: page.clamp(1, pages),
            pages,
            limit,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

impl Default for PageMeta {
    fn default() -> Self {
        Self::new(0, 1, DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            meta: PageMeta::default(),
        }
    }
}

/// Query parameters accepted by the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub limit: usize,
    pub search: String,
    pub empresa_id: Option<i64>,
    /// Module specific filters (e.g. `punto_venta_id`, `caja_id`)
    pub extra: Vec<(String, String)>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: String::new(),
            empresa_id: None,
            extra: Vec::new(),
        }
    }
}

impl ListQuery {
    pub fn page(page: usize, limit: usize) -> Self {
        Self {
            page,
            limit,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_empresa(mut self, empresa_id: Option<i64>) -> Self {
        self.empresa_id = empresa_id;
        self
    }

    pub fn with_filter(mut self, key: &str, value: impl ToString) -> Self {
        self.extra.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds `key` only when a value is selected
    pub fn with_filter_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with_filter(key, value),
            None => self,
        }
    }

    /// Only non-empty params end up in the URL.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.max(1).to_string()),
            ("limit".to_string(), self.limit.max(1).to_string()),
        ];
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search".to_string(), search.to_string()));
        }
        if let Some(empresa_id) = self.empresa_id {
            pairs.push(("empresa_id".to_string(), empresa_id.to_string()));
        }
        pairs.extend(
            self.extra
                .iter()
                .filter(|(_, v)| !v.trim().is_empty())
                .cloned(),
        );
        pairs
    }
}

/// Slices an already fetched dataset into one page (page clamped to the last one).
pub fn paginate_slice<T: Clone>(items: &[T], page: usize, limit: usize) -> Paginated<T> {
    let meta = PageMeta::new(items.len(), page, limit);
    let start = (meta.page - 1) * meta.limit;
    let end = (start + meta.limit).min(items.len());
    Paginated {
        data: items.get(start..end).unwrap_or(&[]).to_vec(),
        meta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_counts_pages() {
        assert_eq!(PageMeta::new(0, 1, 10).pages, 1);
        assert_eq!(PageMeta::new(10, 1, 10).pages, 1);
        assert_eq!(PageMeta::new(11, 1, 10).pages, 2);
        let meta = PageMeta::new(25, 9, 10);
        assert_eq!(meta.page, 3);
        assert!(!meta.has_next());
        assert!(meta.has_prev());
    }

    #[test]
    fn envelope_deserializes_without_meta() {
        let page: Paginated<i64> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(page.data, vec![1, 2]);
        assert_eq!(page.meta.page, 1);

        let page: Paginated<i64> = serde_json::from_str(
            r#"{"data":[3],"meta":{"total":21,"page":3,"pages":3,"limit":10}}"#,
        )
        .unwrap();
        assert_eq!(page.meta.total, 21);
        assert!(!page.meta.has_next());
    }

    #[test]
    fn query_pairs_skip_empty_values() {
        let q = ListQuery::page(2, 25)
            .with_search("  norte ")
            .with_empresa(Some(3))
            .with_filter("punto_venta_id", "")
            .with_filter("estado", "abierta");
        assert_eq!(
            q.to_query_pairs(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("limit".to_string(), "25".to_string()),
                ("search".to_string(), "norte".to_string()),
                ("empresa_id".to_string(), "3".to_string()),
                ("estado".to_string(), "abierta".to_string()),
            ]
        );
    }

    #[test]
    fn optional_filter() {
        let q = ListQuery::default()
            .with_filter_opt("caja_id", Some(4))
            .with_filter_opt::<i64>("usuario_id", None);
        assert_eq!(q.extra, vec![("caja_id".to_string(), "4".to_string())]);
    }

    #[test]
    fn client_side_slicing() {
        let items: Vec<u32> = (1..=23).collect();
        let page = paginate_slice(&items, 3, 10);
        assert_eq!(page.data, vec![21, 22, 23]);
        assert_eq!(page.meta.pages, 3);

        let clamped = paginate_slice(&items, 10, 10);
        assert_eq!(clamped.meta.page, 3);

        let empty: Paginated<u32> = paginate_slice(&[], 1, 10);
        assert!(empty.data.is_empty());
        assert_eq!(empty.meta.pages, 1);
    }
}
