//! APEX MCP Relay Library
//!
//! This crate relays an Oracle APEX product listing to MCP-style tool callers:
//! it exchanges service credentials for a short-lived bearer token, fetches
//! and reshapes the listing, and exposes it behind a discovery/invoke surface.

pub mod apex;
pub mod auth;
pub mod config;
pub mod error;
pub mod mcp;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
