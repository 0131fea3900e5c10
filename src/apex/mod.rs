//! Upstream APEX integration
//!
//! Token acquisition (OAuth2 client-credentials) and the product relay.

pub mod client;
pub mod types;

pub use client::ApexClient;
pub use types::{ProductListing, ProjectedProduct, UpstreamProductRecord};
