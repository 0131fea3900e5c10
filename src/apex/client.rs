//! APEX upstream client
//!
//! One sequential chain per request: acquire a fresh token, then fetch and
//! project the product listing. No caching, no retries, no shared state
//! between concurrent requests beyond the connection pool.

use std::time::Duration;

use reqwest::Client;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};

use super::types::{ProductListing, ProductPayload, ProjectedProduct, TokenResponse};

/// Client for the APEX token and product endpoints
#[derive(Clone)]
pub struct ApexClient {
    http_client: Client,
    username: String,
    password: String,
    token_url: String,
    products_url: String,
}

impl ApexClient {
    /// Create a new client from the immutable process configuration
    #[allow(clippy::expect_used)] // HTTP client creation failure is a fatal system error
    pub fn new(config: &Config) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            username: config.apex_username.clone(),
            password: config.apex_password.clone(),
            token_url: config.token_url.clone(),
            products_url: config.products_url.clone(),
        }
    }

    /// Exchange the service credentials for a short-lived bearer token
    ///
    /// Every caller gets a fresh token; nothing is cached across requests.
    pub async fn acquire_token(&self) -> ApiResult<String> {
        let response = self
            .http_client
            .post(&self.token_url)
            .basic_auth(&self.username, Some(&self.password))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "token endpoint rejected the request");
            return Err(ApiError::UpstreamAuth(body));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    /// Fetch the product listing and project it to the output shape
    ///
    /// Truncation happens on the already-fetched full set, preserving the
    /// upstream order. A single malformed nested payload fails the whole call.
    pub async fn fetch_products(
        &self,
        limit: Option<usize>,
    ) -> ApiResult<Vec<ProjectedProduct>> {
        let token = self.acquire_token().await?;

        let response = self
            .http_client
            .get(&self.products_url)
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "product endpoint returned an error");
            return Err(ApiError::UpstreamData(body));
        }

        let listing: ProductListing = response.json().await?;

        let mut products = Vec::with_capacity(listing.items.len());
        for item in listing.items {
            let payload: ProductPayload = serde_json::from_str(&item.dane_produktu)
                .map_err(|e| ApiError::MalformedPayload(e.to_string()))?;
            products.push(ProjectedProduct::from_payload(payload, item.url));
        }

        if let Some(limit) = limit {
            products.truncate(limit);
        }

        tracing::debug!(count = products.len(), "relayed product listing");
        Ok(products)
    }
}
