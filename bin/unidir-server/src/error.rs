//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to a `{"error": "..."}` JSON response with an appropriate status code.

use std::time::Duration;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};
use unidir_types::ErrorBody;

/// All errors that can occur in the relay request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The gateway credential is not set. Needs an operator, not a retry.
    #[error("{0} is not configured")]
    MissingCredential(&'static str),

    /// The caller sent an invalid or malformed request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Upstream answered 429.
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// Upstream answered 402.
    #[error("Payment required. Please add credits to your AI workspace.")]
    PaymentRequired,

    /// Upstream answered with any other non-success status.
    #[error("AI gateway error: {0}")]
    Upstream(u16),

    /// The upstream call did not respond within the configured budget.
    #[error("Request timed out after {}s. Please try again.", .0.as_secs_f32())]
    Timeout(Duration),

    /// Transport-level failure talking to the gateway.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ServerError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
            ServerError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ServerError::MissingCredential(_)
            | ServerError::Upstream(_)
            | ServerError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ServerError::MissingCredential(var) => {
                error!(variable = %var, "gateway credential missing");
            }
            ServerError::BadRequest(m) => warn!(message = %m, "rejected request"),
            ServerError::Transport(e) => error!(error = %e, "gateway transport error"),
            ServerError::Timeout(budget) => {
                warn!(budget_secs = budget.as_secs_f32(), "gateway call timed out");
            }
            ServerError::RateLimited | ServerError::PaymentRequired | ServerError::Upstream(_) => {
                warn!(status = status.as_u16(), "gateway refused the request");
            }
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
