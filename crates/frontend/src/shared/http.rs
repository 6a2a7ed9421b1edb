//! Typed HTTP calls through the backend proxy.
//!
//! Every failure is logged with `log::error!` and returned as [`ApiError`];
//! screens turn it into a toast with [`ApiError::user_message`].

use crate::shared::api_utils::{proxy_item_url, proxy_url};
use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{ListQuery, PageMeta, Paginated};
use contracts::shared::proxy::Resource;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Page size used when a catalog is fetched in full
pub const FETCH_ALL_PAGE_SIZE: usize = 100;
/// Upper bound on pages walked by [`fetch_all_pages`]
const MAX_PAGES: usize = 200;

async fn send(
    method: &str,
    url: &str,
    request: Result<Request, gloo_net::Error>,
) -> Result<String, ApiError> {
    let result = async {
        let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if response.ok() {
            Ok(body)
        } else {
            Err(ApiError::from_status(status, &body))
        }
    }
    .await;

    if let Err(err) = &result {
        log::error!("{} {} failed: {}", method, url, err);
    }
    result
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Record from a response body; services answer either with the record or
/// with `{ "data": record }`.
fn decode_record<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<T>(body)
        .or_else(|_| serde_json::from_str::<DataEnvelope<T>>(body).map(|e| e.data))
        .map_err(|e| {
            log::error!("Failed to parse response: {}", e);
            ApiError::Parse(e.to_string())
        })
}

/// Paginated envelope; a bare array is accepted as a single page.
fn decode_page<T: DeserializeOwned>(body: &str) -> Result<Paginated<T>, ApiError> {
    if let Ok(page) = serde_json::from_str::<Paginated<T>>(body) {
        return Ok(page);
    }
    match serde_json::from_str::<Vec<T>>(body) {
        Ok(data) => {
            let meta = PageMeta::new(data.len(), 1, data.len().max(1));
            Ok(Paginated { data, meta })
        }
        Err(e) => {
            log::error!("Failed to parse paginated response: {}", e);
            Err(ApiError::Parse(e.to_string()))
        }
    }
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let request = Request::get(url).header("Accept", "application/json").build();
    let body = send("GET", url, request).await?;
    decode_record(&body)
}

/// One page of a resource
pub async fn list<T: DeserializeOwned>(
    resource: Resource,
    query: &ListQuery,
) -> Result<Paginated<T>, ApiError> {
    let url = proxy_url(resource, &query.to_query_pairs());
    let request = Request::get(&url).header("Accept", "application/json").build();
    let body = send("GET", &url, request).await?;
    decode_page(&body)
}

pub async fn fetch_by_id<T: DeserializeOwned>(resource: Resource, id: EntityId) -> Result<T, ApiError> {
    get_json(&proxy_item_url(resource, id)).await
}

/// Walks `meta.pages` and concatenates every page of the query.
pub async fn fetch_all_pages<T: DeserializeOwned>(
    resource: Resource,
    query: ListQuery,
) -> Result<Vec<T>, ApiError> {
    let mut all = Vec::new();
    let mut query = ListQuery {
        page: 1,
        limit: FETCH_ALL_PAGE_SIZE,
        ..query
    };
    loop {
        let page: Paginated<T> = list(resource, &query).await?;
        let received = page.data.len();
        all.extend(page.data);
        if received == 0 || query.page >= page.meta.pages || query.page >= MAX_PAGES {
            break;
        }
        query.page += 1;
    }
    Ok(all)
}

pub async fn create<B: Serialize, T: DeserializeOwned>(resource: Resource, body: &B) -> Result<T, ApiError> {
    let url = proxy_url(resource, &[]);
    let request = Request::post(&url).header("Accept", "application/json").json(body);
    let body = send("POST", &url, request).await?;
    decode_record(&body)
}

pub async fn update<B: Serialize, T: DeserializeOwned>(
    resource: Resource,
    id: EntityId,
    body: &B,
) -> Result<T, ApiError> {
    let url = proxy_item_url(resource, id);
    let request = Request::patch(&url).header("Accept", "application/json").json(body);
    let body = send("PATCH", &url, request).await?;
    decode_record(&body)
}

/// 409 comes back as [`ApiError::Conflict`] (record has dependents)
pub async fn delete(resource: Resource, id: EntityId) -> Result<(), ApiError> {
    let url = proxy_item_url(resource, id);
    let request = Request::delete(&url).header("Accept", "application/json").build();
    send("DELETE", &url, request).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: i64,
    }

    #[test]
    fn record_with_or_without_envelope() {
        let plain: Item = decode_record(r#"{"id":4}"#).unwrap();
        let wrapped: Item = decode_record(r#"{"data":{"id":4}}"#).unwrap();
        assert_eq!(plain, wrapped);
        assert!(matches!(decode_record::<Item>("<html>"), Err(ApiError::Parse(_))));
    }

    #[test]
    fn bare_array_is_one_page() {
        let page: Paginated<Item> = decode_page(r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(page.meta.total, 2);
        assert_eq!(page.meta.pages, 1);

        let page: Paginated<Item> =
            decode_page(r#"{"data":[{"id":3}],"meta":{"total":11,"page":2,"pages":2,"limit":10}}"#)
                .unwrap();
        assert_eq!(page.data, vec![Item { id: 3 }]);
        assert_eq!(page.meta.page, 2);
    }
}
