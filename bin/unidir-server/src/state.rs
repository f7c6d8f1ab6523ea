//! Shared application state injected into every Axum handler.
//!
//! Everything here is read-only after startup; requests never share mutable
//! state.

use std::sync::Arc;

use crate::config::Config;
use crate::gateway::GatewayClient;

#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Pooled HTTP client for the LLM gateway.
    pub gateway: Arc<GatewayClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let gateway = GatewayClient::new(&config)?;
        Ok(Self { config: Arc::new(config), gateway: Arc::new(gateway) })
    }
}
