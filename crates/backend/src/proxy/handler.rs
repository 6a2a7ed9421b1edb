use super::client::UpstreamRequest;
use super::error::ProxyError;
use super::target::{build_target_url, ProxyTarget};
use super::ProxyState;
use crate::shared::format::truncate_for_log;
use axum::body::{Body, Bytes};
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::response::Response;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const ALWAYS_FORWARDED: [&str; 3] = ["content-type", "authorization", "accept"];

/// `/api/proxy?service=<svc>&path=<resource>&...`
///
/// Forwards method, body and the allowed headers to the service and relays
/// status, content type and body back untouched.
pub async fn forward(
    State(state): State<ProxyState>,
    method: Method,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let target = ProxyTarget::from_query(params)?;
    let base = state.config.service_url(target.service);
    let url = build_target_url(base, &target.path, &target.query)?;

    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let mut forwarded = collect_headers(&headers, &state.config.proxy.forward_headers);
    forwarded.push((REQUEST_ID_HEADER.to_string(), request_id.clone()));

    tracing::info!(
        request_id = %request_id,
        service = %target.service,
        method = %method,
        "proxy -> {}",
        url
    );

    let request = UpstreamRequest {
        method: method.clone(),
        url,
        headers: forwarded,
        body: (!body.is_empty()).then_some(body),
    };

    let upstream = match state.upstream.send(request).await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                service = %target.service,
                "proxy upstream failure: {}",
                e
            );
            return Err(e);
        }
    };

    if upstream.status >= 500 {
        tracing::warn!(
            request_id = %request_id,
            service = %target.service,
            status = upstream.status,
            "upstream error body: {}",
            truncate_for_log(&String::from_utf8_lossy(&upstream.body), 300)
        );
    } else {
        tracing::info!(
            request_id = %request_id,
            service = %target.service,
            status = upstream.status,
            "proxy <- {} {}",
            method,
            target.path
        );
    }

    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut builder = Response::builder()
        .status(status)
        .header(REQUEST_ID_HEADER, request_id);
    if let Some(content_type) = upstream.content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder
        .body(Body::from(upstream.body))
        .map_err(|e| ProxyError::Internal(e.to_string()))
}

/// Always-forwarded headers plus the configured extras, names lowercased
fn collect_headers(headers: &HeaderMap, extra: &[String]) -> Vec<(String, String)> {
    let allowed: Vec<String> = ALWAYS_FORWARDED
        .iter()
        .map(|h| h.to_string())
        .chain(extra.iter().map(|h| h.to_ascii_lowercase()))
        .collect();

    headers
        .iter()
        .filter(|(name, _)| allowed.iter().any(|a| a == name.as_str()))
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn forwards_only_allowed_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        headers.insert(header::COOKIE, HeaderValue::from_static("session=1"));
        headers.insert("x-empresa-id", HeaderValue::from_static("4"));

        let mut forwarded = collect_headers(&headers, &["X-Empresa-Id".to_string()]);
        forwarded.sort();
        assert_eq!(
            forwarded,
            vec![
                ("authorization".to_string(), "Bearer abc".to_string()),
                ("content-type".to_string(), "application/json".to_string()),
                ("x-empresa-id".to_string(), "4".to_string()),
            ]
        );
    }
}
