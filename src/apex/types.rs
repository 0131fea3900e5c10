//! Upstream APEX wire types and the projected output shape

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token endpoint response. Only `access_token` matters; the implicit expiry
/// is unmodeled because every fetch acquires a fresh token.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Product listing as returned by the APEX REST endpoint
#[derive(Debug, Deserialize)]
pub struct ProductListing {
    pub items: Vec<UpstreamProductRecord>,
}

/// One opaque listing item: a serialized-JSON payload string plus a sibling URL
#[derive(Debug, Deserialize)]
pub struct UpstreamProductRecord {
    pub dane_produktu: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// The nested payload encoded inside `dane_produktu`
///
/// `cena`/`ocena` arrive as strings in practice but the upstream is opaque,
/// so they are carried as raw JSON values rather than coerced.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub nazwa: String,
    pub cena: Value,
    pub ocena: Value,
    #[serde(default)]
    pub liczba_sprzedanych: Option<Value>,
}

/// Output shape: a fixed subset of fields from the parsed nested payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectedProduct {
    pub nazwa: String,
    pub cena: Value,
    pub ocena: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liczba_sprzedanych: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ProjectedProduct {
    /// Project a parsed payload and its sibling URL into the output shape
    pub fn from_payload(payload: ProductPayload, url: Option<String>) -> Self {
        Self {
            nazwa: payload.nazwa,
            cena: payload.cena,
            ocena: payload.ocena,
            liczba_sprzedanych: payload.liczba_sprzedanych,
            url,
        }
    }
}
