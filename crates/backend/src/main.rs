use axum::http::{HeaderName, Method};
use axum::middleware;
use backend::proxy::client::ReqwestUpstream;
use backend::proxy::handler::REQUEST_ID_HEADER;
use backend::proxy::ProxyState;
use backend::system::middleware::request_logger::request_logger;
use backend::{routes, shared, system};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let addr = config.socket_addr()?;
    for service in contracts::shared::proxy::Service::ALL {
        tracing::info!("Service {} -> {}", service, config.service_url(service));
    }

    let upstream = ReqwestUpstream::new(Duration::from_secs(config.proxy.timeout_secs))?;
    let static_dir = config.server.static_dir.clone();
    let mut allowed_headers = config.proxy.allowed_headers();
    let state = ProxyState::new(config, Arc::new(upstream));

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    allowed_headers.push(request_id.clone());
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(allowed_headers)
        .expose_headers([request_id]);

    let app = routes::configure_routes(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Set BACKOFFICE_PORT or stop the other process.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
