//! Bearer-token gate for the invocation path
//!
//! Compares the literal `Authorization` header against `"Bearer " + key`.
//! The comparison is exact and case-sensitive: wrong scheme, trailing
//! whitespace, or a missing header all reject before any upstream call.

use axum::http::{header, HeaderMap};
use subtle::ConstantTimeEq;

use crate::error::{ApiError, ApiResult};

/// Auth gate holding the expected header value
#[derive(Clone)]
pub struct BearerGate {
    expected: String,
}

impl BearerGate {
    /// Create a gate for the configured static key
    pub fn new(api_key: &str) -> Self {
        Self {
            expected: format!("Bearer {}", api_key),
        }
    }

    /// Admit the request only when the header matches exactly
    pub fn check(&self, headers: &HeaderMap) -> ApiResult<()> {
        let provided = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        if constant_time_compare(provided, &self.expected) {
            Ok(())
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}

/// Constant-time comparison to prevent timing attacks
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        // Do a dummy comparison to avoid length-based timing attacks
        let dummy = vec![0u8; a.len()];
        let _ = a.as_bytes().ct_eq(&dummy);
        return false;
    }

    a.as_bytes().ct_eq(b.as_bytes()).into()
}
