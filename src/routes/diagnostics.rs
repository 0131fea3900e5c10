//! Connectivity diagnostics
//!
//! Echoes the caller's method, origin, and headers. Accepts any method,
//! requires no auth, and performs no upstream calls.

use std::collections::BTreeMap;

use axum::{
    http::{header, HeaderMap, Method},
    Json,
};
use serde_json::{json, Value};

pub async fn echo(method: Method, headers: HeaderMap) -> Json<Value> {
    let echoed: BTreeMap<String, String> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or("<non-ascii>").to_string(),
            )
        })
        .collect();

    let origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok());

    Json(json!({
        "method": method.as_str(),
        "origin": origin,
        "headers": echoed,
    }))
}
