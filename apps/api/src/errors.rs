use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Shape problems in generated or scraped data are never errors; the coercion layer
/// absorbs them. Everything here originates at a network, parse, or storage boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required upstream credential is absent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An upstream call returned a non-success status.
    #[error("Upstream request failed (status {status}): {message}")]
    Upstream { status: u16, message: String },

    /// The generator's reply was not JSON at all.
    #[error("Malformed generation output: {0}")]
    MalformedGeneration(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Session store error: {0}")]
    Session(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::Session(e.to_string())
    }
}

impl AppError {
    /// A call to a third-party service that produced no usable reply (connect failure,
    /// timeout, TLS). Reported as a bad gateway unless reqwest saw a status.
    pub fn transport(service: &str, e: &reqwest::Error) -> Self {
        let status = e.status().unwrap_or(reqwest::StatusCode::BAD_GATEWAY);
        AppError::Upstream {
            status: status.as_u16(),
            message: format!("{service} request failed: {e}"),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Upstream { .. } => "UPSTREAM_REQUEST_ERROR",
            AppError::MalformedGeneration(_) => "MALFORMED_GENERATION_OUTPUT",
            AppError::Llm(_) => "LLM_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Session(_) => "SESSION_STORE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } | AppError::MalformedGeneration(_) | AppError::Llm(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Configuration(_) | AppError::Session(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                msg.clone()
            }
            AppError::Upstream { status, message } => {
                tracing::warn!("Upstream returned {status}: {message}");
                format!("Upstream request failed with status {status}")
            }
            AppError::MalformedGeneration(msg) => {
                tracing::warn!("Malformed generation output: {msg}");
                "The generated portfolio could not be parsed".to_string()
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                "An AI processing error occurred".to_string()
            }
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Session(msg) => {
                tracing::error!("Session store error: {msg}");
                "A session storage error occurred".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_code_table() {
        let cases = [
            (AppError::Configuration("k".into()), 500, "CONFIGURATION_ERROR"),
            (
                AppError::Upstream { status: 429, message: "slow".into() },
                502,
                "UPSTREAM_REQUEST_ERROR",
            ),
            (AppError::MalformedGeneration("x".into()), 502, "MALFORMED_GENERATION_OUTPUT"),
            (AppError::Llm("x".into()), 502, "LLM_ERROR"),
            (AppError::Validation("x".into()), 400, "VALIDATION_ERROR"),
            (AppError::NotFound("x".into()), 404, "NOT_FOUND"),
            (AppError::Session("x".into()), 500, "SESSION_STORE_ERROR"),
            (AppError::Internal(anyhow::anyhow!("x")), 500, "INTERNAL_ERROR"),
        ];
        for (err, status, code) in cases {
            assert_eq!(err.status().as_u16(), status);
            assert_eq!(err.code(), code);
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_upstream() {
        // An unparseable URL fails inside reqwest before any connection is made.
        let e = reqwest::Client::new().get("not a url").send().await.unwrap_err();
        let err = AppError::transport("ScrapingDog", &e);
        assert!(matches!(err, AppError::Upstream { status: 502, .. }));
        assert_eq!(err.code(), "UPSTREAM_REQUEST_ERROR");
        assert!(err.to_string().contains("ScrapingDog request failed"));
    }

    #[test]
    fn test_upstream_renders_bad_gateway() {
        let response = AppError::Upstream { status: 403, message: "denied".into() }.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
