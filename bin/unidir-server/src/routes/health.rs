//! Liveness and configuration probe.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_health), components(schemas(RelayHealth)))]
pub struct HealthApi;

/// What an operator needs to know before sending chat traffic.
#[derive(Debug, Serialize, ToSchema)]
pub struct RelayHealth {
    pub status: String,
    pub version: String,
    /// `false` until the gateway credential is set; chat requests fail
    /// with 500 meanwhile.
    pub gateway_configured: bool,
    pub model: String,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}

/// Report relay liveness. Does not call the gateway.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Relay is up", body = RelayHealth)
    )
)]
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<RelayHealth> {
    Json(RelayHealth {
        status: "ok".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        gateway_configured: state.gateway.is_configured(),
        model: state.config.model.clone(),
    })
}
