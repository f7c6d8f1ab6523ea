//! Client for the upstream chat-completions gateway.
//!
//! The gateway speaks the OpenAI chat-completions dialect. We always ask for
//! a streamed answer and hand the raw response back to the route, which
//! forwards the body unchanged.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, error};
use unidir_types::ChatTurn;

use crate::config::{Config, GATEWAY_API_KEY_VAR};
use crate::error::ServerError;

/// How long a failed response's body may take to arrive for logging.
const ERROR_BODY_GRACE: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatTurn],
    stream: bool,
}

#[derive(Debug)]
pub struct GatewayClient {
    http: reqwest::Client,
    url: String,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl GatewayClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        // No client-level timeouts: the upstream budget in
        // `stream_completion` is the only deadline, and a request timeout
        // would also cut off the body stream.
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            url: config.gateway_url.clone(),
            model: config.model.clone(),
            api_key: config.gateway_api_key.clone(),
            timeout: config.upstream_timeout,
        })
    }

    /// Fails with [`ServerError::MissingCredential`] when no key is set.
    pub fn ensure_configured(&self) -> Result<&str, ServerError> {
        self.api_key
            .as_deref()
            .ok_or(ServerError::MissingCredential(GATEWAY_API_KEY_VAR))
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Start a streamed completion for `messages`.
    ///
    /// The deadline covers connecting, sending and receiving the response
    /// head. On expiry the in-flight request is dropped and
    /// [`ServerError::Timeout`] is returned; nothing of the upstream body is
    /// ever exposed in that case. A non-success status is classified from
    /// the head alone.
    pub async fn stream_completion(
        &self,
        messages: &[ChatTurn],
    ) -> Result<reqwest::Response, ServerError> {
        let api_key = self.ensure_configured()?;
        let body = CompletionRequest { model: &self.model, messages, stream: true };

        debug!(url = %self.url, model = %self.model, turns = messages.len(), "calling gateway");

        let request = self.http.post(&self.url).bearer_auth(api_key).json(&body).send();
        let response = match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => result.map_err(|e| transport_error(e, self.timeout))?,
            Err(_) => return Err(ServerError::Timeout(self.timeout)),
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        tokio::spawn(log_error_body(status, response));
        Err(classify_status(status))
    }
}

/// Log the body of a failed gateway response without holding up the caller.
async fn log_error_body(status: StatusCode, response: reqwest::Response) {
    match tokio::time::timeout(ERROR_BODY_GRACE, response.text()).await {
        Ok(Ok(detail)) => error!(status = status.as_u16(), body = %detail, "gateway returned an error"),
        Ok(Err(e)) => error!(status = status.as_u16(), error = %e, "gateway returned an error; body unreadable"),
        Err(_) => error!(status = status.as_u16(), "gateway returned an error; body not received in time"),
    }
}

/// Map a reqwest failure, keeping timeouts on the 504 path.
fn transport_error(err: reqwest::Error, budget: Duration) -> ServerError {
    if err.is_timeout() {
        ServerError::Timeout(budget)
    } else {
        ServerError::Transport(err)
    }
}

/// Translate a non-success gateway status into the caller-facing error.
pub fn classify_status(status: StatusCode) -> ServerError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => ServerError::RateLimited,
        StatusCode::PAYMENT_REQUIRED => ServerError::PaymentRequired,
        other => ServerError::Upstream(other.as_u16()),
    }
}
