//! Paged list state shared by the domain list pages.
//!
//! Pages keep one `RwSignal<ListState<T>>` and call [`reload`] whenever
//! page, size, search or the selected empresa changes.

use crate::shared::http;
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{ListQuery, PageMeta, Paginated, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
    /// 1-based
    pub page: usize,
    pub limit: usize,
    pub search: String,
    pub loading: bool,
    pub error: Option<String>,
    /// Incremented per request; late responses of older requests are dropped.
    pub request_seq: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            meta: PageMeta::default(),
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: String::new(),
            loading: false,
            error: None,
            request_seq: 0,
        }
    }
}

impl<T> ListState<T> {
    pub fn query(&self) -> ListQuery {
        ListQuery::page(self.page, self.limit).with_search(self.search.clone())
    }

    /// Marks a request in flight and returns its sequence number
    pub fn begin(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.error = None;
        self.request_seq
    }

    /// Applies a response unless a newer request has started since.
    pub fn finish(&mut self, seq: u64, result: Result<Paginated<T>, ApiError>) {
        if seq != self.request_seq {
            return;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.page = page.meta.page;
                self.meta = page.meta;
                self.items = page.data;
            }
            Err(err) => {
                self.items.clear();
                self.meta = PageMeta::new(0, 1, self.limit);
                self.error = Some(err.user_message());
            }
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Changing the page size or the search term goes back to page 1
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(1);
        self.page = 1;
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }
}

pub fn create_list_state<T: Send + Sync + 'static>() -> RwSignal<ListState<T>> {
    RwSignal::new(ListState::default())
}

/// Loads the current page of `T` with module filters applied on top of the
/// page/search query.
pub fn reload<T, F>(state: RwSignal<ListState<T>>, customize: F)
where
    T: AggregateRoot + DeserializeOwned + Send + Sync + 'static,
    F: FnOnce(ListQuery) -> ListQuery,
{
    let query = customize(state.with_untracked(|s| s.query()));
    let mut seq = 0;
    state.update(|s| seq = s.begin());
    spawn_local(async move {
        let result = http::list::<T>(T::resource(), &query).await;
        state.update(|s| s.finish(seq, result));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_response_is_ignored() {
        let mut state = ListState::<i64>::default();
        let first = state.begin();
        let second = state.begin();

        state.finish(first, Ok(Paginated { data: vec![1], meta: PageMeta::new(1, 1, 10) }));
        assert!(state.loading);
        assert!(state.items.is_empty());

        state.finish(second, Ok(Paginated { data: vec![2, 3], meta: PageMeta::new(12, 2, 10) }));
        assert!(!state.loading);
        assert_eq!(state.items, vec![2, 3]);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn error_clears_items() {
        let mut state = ListState::<i64>::default();
        state.items = vec![1];
        let seq = state.begin();
        state.finish(seq, Err(ApiError::NotFound));
        assert!(state.items.is_empty());
        assert_eq!(state.error.as_deref(), Some("El registro solicitado no existe"));
    }

    #[test]
    fn search_and_size_reset_page() {
        let mut state = ListState::<i64>::default();
        state.set_page(4);
        state.set_search("caja".into());
        assert_eq!(state.page, 1);
        state.set_page(3);
        state.set_limit(25);
        assert_eq!((state.page, state.limit), (1, 25));
        assert_eq!(state.query().to_query_pairs()[1], ("limit".to_string(), "25".to_string()));
    }
}
