use thiserror::Error;

/// Errors surfaced by the proxy handlers
///
/// Every variant ends up as a `{"error": ...}` envelope with HTTP 500 at the
/// handler boundary; nothing is retried.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("{0}")]
    Upstream(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl GatewayError {
    pub fn missing_field(field: &str) -> Self {
        GatewayError::InvalidInput(format!("Missing required parameter: {}", field))
    }

    /// Errors caused by the caller rather than configuration or upstream
    pub fn is_client_error(&self) -> bool {
        matches!(self, GatewayError::InvalidInput(_) | GatewayError::UnknownAction(_))
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
