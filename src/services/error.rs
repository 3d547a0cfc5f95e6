use thiserror::Error;

/// Errores del cliente HTTP
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP 401: token inválido/expirado o credenciales incorrectas
    #[error("{0}")]
    Unauthorized(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Construir a partir de una respuesta no-2xx.
    /// `fallback` se usa cuando el body viene vacío.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let message = extract_detail(body).unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                fallback.to_string()
            } else {
                trimmed.to_string()
            }
        });

        if status == 401 {
            ApiError::Unauthorized(message)
        } else {
            ApiError::Http { status, message }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

/// FastAPI devuelve `{"detail": "..."}` o, en errores de validación,
/// `{"detail": [{"msg": "..."}, ...]}`
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
