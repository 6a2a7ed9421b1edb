use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use backend::proxy::client::ReqwestUpstream;
use backend::proxy::ProxyState;
use backend::routes::configure_routes;
use backend::shared::config::Config;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Stand-in for the caja service
fn stub_caja_service() -> Router {
    Router::new()
        .route(
            "/api/cajas",
            get(
                |Query(q): Query<HashMap<String, String>>, headers: HeaderMap| async move {
                    Json(json!({
                        "data": [{"id": 1, "nombre": "Central", "punto_venta_id": 2}],
                        "meta": {"total": 1, "page": q.get("page").cloned().unwrap_or_default(), "pages": 1, "limit": 10},
                        "echo": {
                            "search": q.get("search"),
                            "authorization": headers.get("authorization").and_then(|v| v.to_str().ok()),
                            "request_id": headers.get("x-request-id").and_then(|v| v.to_str().ok()),
                            "cookie": headers.get("cookie").and_then(|v| v.to_str().ok()),
                        }
                    }))
                },
            )
            .post(|Json(body): Json<Value>| async move {
                (StatusCode::CREATED, Json(json!({"id": 99, "nombre": body["nombre"]})))
            }),
        )
        .route(
            "/api/cajas/:id",
            get(|Path(id): Path<i64>| async move { Json(json!({"id": id})) })
                .patch(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
                    Json(json!({"id": id, "estado": body["estado"]}))
                })
                .delete(|Path(_id): Path<i64>| async move {
                    (
                        StatusCode::CONFLICT,
                        Json(json!({"message": "La caja tiene movimientos", "statusCode": 409})),
                    )
                }),
        )
}

async fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

async fn start_proxy() -> String {
    let caja = spawn(stub_caja_service()).await;
    let dead = closed_port().await;

    let config: Config = toml::from_str(&format!(
        r#"
        [services]
        auth = "http://127.0.0.1:{dead}/api"
        caja = "http://{caja}/api/"
        planes = "http://127.0.0.1:{dead}/api"
        inmobiliaria = "http://127.0.0.1:{dead}/api"
        "#
    ))
    .unwrap();
    let upstream = ReqwestUpstream::new(Duration::from_secs(5)).unwrap();
    let state = ProxyState::new(config, Arc::new(upstream));
    let proxy = spawn(configure_routes(state)).await;
    format!("http://{}", proxy)
}

#[tokio::test]
async fn list_request_is_forwarded_with_query_and_headers() {
    let base = start_proxy().await;
    let resp = reqwest::Client::new()
        .get(format!(
            "{}/api/proxy?service=caja&path=cajas&page=2&search=caja%20central",
            base
        ))
        .header("Authorization", "Bearer token-1")
        .header("Cookie", "session=secret")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(resp.headers().contains_key("x-request-id"));
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"][0]["nombre"], "Central");
    assert_eq!(body["meta"]["page"], "2");
    assert_eq!(body["echo"]["search"], "caja central");
    assert_eq!(body["echo"]["authorization"], "Bearer token-1");
    assert!(body["echo"]["request_id"].is_string());
    assert!(body["echo"]["cookie"].is_null());
}

#[tokio::test]
async fn create_update_and_conflict_are_relayed() {
    let base = start_proxy().await;
    let client = reqwest::Client::new();

    let created = client
        .post(format!("{}/api/proxy?service=caja&path=cajas", base))
        .json(&json!({"nombre": "Caja 3"}))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), 201);
    let body: Value = created.json().await.unwrap();
    assert_eq!(body["id"], 99);
    assert_eq!(body["nombre"], "Caja 3");

    let updated: Value = client
        .patch(format!("{}/api/proxy?service=caja&path=cajas%2F7", base))
        .json(&json!({"estado": "cerrada"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated, json!({"id": 7, "estado": "cerrada"}));

    let deleted = client
        .delete(format!("{}/api/proxy?service=caja&path=cajas/7", base))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), 409);
    let body: Value = deleted.json().await.unwrap();
    assert_eq!(body["message"], "La caja tiene movimientos");
}

#[tokio::test]
async fn proxy_rejects_bad_requests() {
    let base = start_proxy().await;
    let client = reqwest::Client::new();

    let unknown = client
        .get(format!("{}/api/proxy?service=pagos&path=cuotas", base))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown.status(), 400);
    let body: Value = unknown.json().await.unwrap();
    assert_eq!(body["message"], "Servicio desconocido: pagos");

    let traversal = client
        .get(format!("{}/api/proxy?service=caja&path=..%2Fadmin", base))
        .send()
        .await
        .unwrap();
    assert_eq!(traversal.status(), 400);

    let encoded_traversal = client
        .get(format!("{}/api/proxy?service=caja&path=%252e%252e%2Fadmin", base))
        .send()
        .await
        .unwrap();
    assert_eq!(encoded_traversal.status(), 400);

    let missing = client
        .get(format!("{}/api/proxy?path=cajas", base))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 400);
}

#[tokio::test]
async fn unreachable_service_is_bad_gateway() {
    let base = start_proxy().await;
    let resp = reqwest::get(format!("{}/api/proxy?service=planes&path=planes-pago", base))
        .await
        .unwrap();
    assert_eq!(resp.status(), 502);
    let body: Value = resp.json().await.unwrap();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("No se pudo contactar el servicio"));
}

#[tokio::test]
async fn health_endpoint() {
    let base = start_proxy().await;
    let text = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(text, "ok");
}
