use axum::{routing::get, Router};
use contracts::shared::proxy::PROXY_ENDPOINT;

use crate::proxy::{handler, ProxyState};

/// Application routes (without static hosting and global layers)
pub fn configure_routes(state: ProxyState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            PROXY_ENDPOINT,
            get(handler::forward)
                .post(handler::forward)
                .put(handler::forward)
                .patch(handler::forward)
                .delete(handler::forward),
        )
        .with_state(state)
}
