use serde::Deserialize;
use thiserror::Error;

/// Errors of a call made through the proxy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// 409, the record is referenced by other records
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("not found")]
    NotFound,

    #[error("unauthorized ({0})")]
    Unauthorized(u16),

    /// 400 / 422 rejected by the service validation
    #[error("validation: {0}")]
    Validation(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Error bodies look like `{ "message": "..." }` or
/// `{ "message": ["campo requerido", ...] }`.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

fn extract_message(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return body.trim().to_string();
    };
    match parsed.message {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join("; "),
        _ => parsed.error.unwrap_or_default(),
    }
}

impl ApiError {
    /// Classifies a non-success response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body);
        match status {
            401 | 403 => ApiError::Unauthorized(status),
            404 => ApiError::NotFound,
            409 => ApiError::Conflict(message),
            400 | 422 => ApiError::Validation(message),
            _ => ApiError::Http { status, message },
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict(_))
    }

    /// Text shown in the alert toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "No se pudo conectar con el servidor. Verifique su conexión.".to_string()
            }
            ApiError::Conflict(_) => {
                "No se puede eliminar: el registro tiene registros dependientes".to_string()
            }
            ApiError::NotFound => "El registro solicitado no existe".to_string(),
            ApiError::Unauthorized(_) => {
                "No tiene permisos para realizar esta acción".to_string()
            }
            ApiError::Validation(msg) if !msg.is_empty() => {
                format!("Datos inválidos: {}", msg)
            }
            ApiError::Validation(_) => "Datos inválidos".to_string(),
            ApiError::Http { message, .. } if !message.is_empty() => {
                format!("Error del servidor: {}", message)
            }
            ApiError::Http { status, .. } => format!("Error del servidor ({})", status),
            ApiError::Parse(_) => "Respuesta inesperada del servidor".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_statuses() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized(401));
        assert_eq!(ApiError::from_status(404, "{}"), ApiError::NotFound);
        assert!(ApiError::from_status(409, r#"{"message":"fk"}"#).is_conflict());
        assert_eq!(
            ApiError::from_status(422, r#"{"message":["nombre requerido","ruc inválido"]}"#),
            ApiError::Validation("nombre requerido; ruc inválido".to_string())
        );
        assert_eq!(
            ApiError::from_status(500, "boom"),
            ApiError::Http {
                status: 500,
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn conflict_message_mentions_dependents() {
        let err = ApiError::from_status(409, "");
        assert!(err.user_message().contains("registros dependientes"));
    }

    #[test]
    fn falls_back_to_error_field() {
        let err = ApiError::from_status(502, r#"{"error":"upstream down"}"#);
        assert_eq!(err.user_message(), "Error del servidor: upstream down");
    }
}
