use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Failures produced by the proxy itself. Upstream HTTP errors (4xx/5xx with
/// a body) are not errors here: they are relayed unchanged.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Falta el parámetro '{0}'")]
    MissingParam(&'static str),

    #[error("Servicio desconocido: {0}")]
    UnknownService(String),

    #[error("Ruta de recurso no válida: {0}")]
    InvalidPath(String),

    #[error("No se pudo contactar el servicio: {0}")]
    Unreachable(String),

    #[error("El servicio no respondió a tiempo: {0}")]
    Timeout(String),

    #[error("Error interno del proxy: {0}")]
    Internal(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingParam(_)
            | ProxyError::UnknownService(_)
            | ProxyError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            ProxyError::Unreachable(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        let target = e
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "desconocido".to_string());
        if e.is_timeout() {
            ProxyError::Timeout(target)
        } else if e.is_connect() || e.is_request() {
            ProxyError::Unreachable(format!("{} ({})", target, e))
        } else {
            ProxyError::Unreachable(e.to_string())
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            ProxyError::UnknownService("pagos".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProxyError::InvalidPath("../x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProxyError::Unreachable("x".into()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ProxyError::Timeout("x".into()).status(),
            StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[test]
    fn message_is_spanish() {
        assert_eq!(
            ProxyError::MissingParam("service").to_string(),
            "Falta el parámetro 'service'"
        );
    }
}
