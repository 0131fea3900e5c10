//! Shared application state

use std::sync::Arc;

use crate::apex::ApexClient;
use crate::auth::BearerGate;
use crate::config::Config;

/// Immutable per-process state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub apex: ApexClient,
    pub gate: BearerGate,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let apex = ApexClient::new(&config);
        let gate = BearerGate::new(&config.mcp_api_key);
        Self {
            config: Arc::new(config),
            apex,
            gate,
        }
    }
}
