use thiserror::Error;

/// Errors that can be returned by unidir-chat operations.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The relay (or the gateway behind it) is rate limiting us.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// The gateway account has run out of credits.
    #[error("payment required: {0}")]
    PaymentRequired(String),

    /// Any other non-success answer from the relay.
    #[error("relay error ({status}): {message}")]
    Service { status: u16, message: String },

    /// An HTTP request failed (network error, dropped stream, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to read a caller profile or another JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatError {
    /// Short notice to surface to the user, one per failure category.
    pub fn notice(&self) -> &'static str {
        match self {
            ChatError::RateLimited(_) => "Too many requests. Please wait a moment and try again.",
            ChatError::PaymentRequired(_) => "The assistant is temporarily unavailable: credits ran out.",
            ChatError::Service { .. } => "The assistant service returned an error.",
            ChatError::Http(_) | ChatError::Json(_) => "Failed to get a response from the assistant.",
        }
    }
}
