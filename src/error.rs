//! API error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application error type
///
/// Every failure is terminal for its request; there is no retry or fallback.
/// Upstream diagnostic text is passed through into the error body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    // Upstream failures
    #[error("Token endpoint rejected the request: {0}")]
    UpstreamAuth(String),
    #[error("Product endpoint returned an error: {0}")]
    UpstreamData(String),
    #[error("Malformed product payload: {0}")]
    MalformedPayload(String),
    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Caller failures
    #[error("Authentication required")]
    Unauthorized,
    #[error("Unsupported request: {0}")]
    UnsupportedRequest(String),

    // Internal errors
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::UpstreamAuth(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_AUTH_ERROR",
                msg.clone(),
            ),
            ApiError::UpstreamData(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_DATA_ERROR",
                msg.clone(),
            ),
            ApiError::MalformedPayload(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MALFORMED_PAYLOAD",
                msg.clone(),
            ),
            ApiError::Http(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_HTTP_ERROR",
                err.to_string(),
            ),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                self.to_string(),
            ),
            ApiError::UnsupportedRequest(msg) => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_REQUEST", msg.clone())
            }
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                self.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON serialization error: {:?}", err);
        ApiError::Internal
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(ApiError::Unauthorized),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(ApiError::UnsupportedRequest("nope".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::UpstreamAuth("bad creds".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(ApiError::UpstreamData("teapot".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(ApiError::MalformedPayload("not json".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_diagnostics_pass_through() {
        let response = ApiError::UpstreamAuth("ORA-01017: invalid credentials".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // Body is built from the raw upstream text
        let err = ApiError::UpstreamAuth("ORA-01017: invalid credentials".into());
        assert!(err.to_string().contains("ORA-01017"));
    }
}
