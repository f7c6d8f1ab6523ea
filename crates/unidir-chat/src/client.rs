use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use unidir_types::{CallerProfile, ErrorBody, RelayRequest};

use crate::consumer;
use crate::conversation::{Conversation, ConversationAction};
use crate::error::ChatError;

/// Default relay endpoint when nothing else is configured.
pub const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:3000/v1/chat";

pub struct RelayClient {
    url: String,
    profile: Option<CallerProfile>,
    client: Client,
}

impl RelayClient {
    pub fn new(url: impl Into<String>, profile: Option<CallerProfile>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("unidir-chat/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self { url: url.into(), profile, client }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Append `text` as a user message, stream the reply into the
    /// conversation and return it.
    ///
    /// The conversation always leaves the streaming state, whether the
    /// request succeeds or not.
    pub async fn send<F>(
        &self,
        conversation: &mut Conversation,
        text: &str,
        on_delta: F,
    ) -> Result<String, ChatError>
    where
        F: FnMut(&str),
    {
        conversation.apply(ConversationAction::UserSent(text.to_owned()));
        let result = self.exchange(conversation, on_delta).await;
        conversation.apply(ConversationAction::StreamEnded);
        result
    }

    async fn exchange<F>(&self, conversation: &mut Conversation, on_delta: F) -> Result<String, ChatError>
    where
        F: FnMut(&str),
    {
        let body = RelayRequest {
            messages: conversation.history(),
            language: Some(conversation.locale().to_string()),
            mode: Some(conversation.mode().to_string()),
            user_profile: self.profile.clone().filter(|p| !p.is_empty()),
        };
        debug!(url = %self.url, turns = body.messages.len(), mode = %conversation.mode(), "sending chat request");

        let resp = self.client.post(&self.url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = match resp.json::<ErrorBody>().await {
                Ok(b) => b.error,
                Err(_) => status.canonical_reason().unwrap_or("unknown error").to_owned(),
            };
            warn!(status = status.as_u16(), error = %message, "relay returned an error");
            return Err(classify(status, message));
        }

        let reply = consumer::consume(resp.bytes_stream(), conversation, on_delta).await?;
        Ok(reply)
    }
}

fn classify(status: StatusCode, message: String) -> ChatError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => ChatError::RateLimited(message),
        StatusCode::PAYMENT_REQUIRED => ChatError::PaymentRequired(message),
        other => ChatError::Service { status: other.as_u16(), message },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::{
        Json, Router,
        body::Body,
        http::{StatusCode as AxumStatus, header},
        response::{IntoResponse, Response},
        routing::post,
    };
    use std::sync::{Arc, Mutex};
    use tracing_test::traced_test;
    use unidir_types::{ChatRole, InteractionMode, Locale};

    async fn spawn_relay(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/v1/chat")
    }

    fn sse_relay(payload: &'static str, seen: Arc<Mutex<Option<serde_json::Value>>>) -> Router {
        Router::new().route(
            "/v1/chat",
            post(move |Json(body): Json<serde_json::Value>| {
                let seen = Arc::clone(&seen);
                async move {
                    {
                        *seen.lock().unwrap() = Some(body);
                    }
                    Response::builder()
                        .header(header::CONTENT_TYPE, "text/event-stream")
                        .body(Body::from(payload))
                        .unwrap()
                }
            }),
        )
    }

    fn error_relay(status: AxumStatus, message: &'static str) -> Router {
        Router::new().route(
            "/v1/chat",
            post(move || async move {
                (status, Json(serde_json::json!({ "error": message }))).into_response()
            }),
        )
    }

    #[tokio::test]
    #[traced_test]
    async fn streams_reply_into_conversation() {
        let seen = Arc::new(Mutex::new(None));
        let url = spawn_relay(sse_relay(
            "data: {\"choices\":[{\"delta\":{\"content\":\"Сәлем\"}}]}\n\ndata: {\"choices\":[{\"delta\":{\"content\":\"!\"}}]}\n\ndata: [DONE]\n\n",
            Arc::clone(&seen),
        ))
        .await;

        let profile = CallerProfile { score: Some(110.0), ..Default::default() };
        let client = RelayClient::new(url, Some(profile));
        let mut conv = Conversation::new(Locale::Kk, InteractionMode::Twin);

        let mut deltas = Vec::new();
        let reply = client.send(&mut conv, "Сәлем", |d| deltas.push(d.to_owned())).await.unwrap();

        assert_eq!(reply, "Сәлем!");
        assert_eq!(deltas, vec!["Сәлем", "!"]);
        assert!(!conv.is_streaming());
        assert_eq!(conv.messages().len(), 2);
        assert_eq!(conv.messages()[1].role, ChatRole::Assistant);

        let body = seen.lock().unwrap().clone().unwrap();
        assert_eq!(body["language"], "kk");
        assert_eq!(body["mode"], "twin");
        assert_eq!(body["userProfile"]["score"].as_f64(), Some(110.0));
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_profile_is_not_sent() {
        let seen = Arc::new(Mutex::new(None));
        let url = spawn_relay(sse_relay("data: [DONE]\n\n", Arc::clone(&seen))).await;

        let client = RelayClient::new(url, Some(CallerProfile::default()));
        let mut conv = Conversation::default();
        let reply = client.send(&mut conv, "Hi", |_| {}).await.unwrap();

        assert_eq!(reply, "");
        let body = seen.lock().unwrap().clone().unwrap();
        assert!(body.get("userProfile").is_none());
        assert_eq!(conv.messages().len(), 1);
    }

    #[tokio::test]
    async fn error_statuses_are_classified() {
        let cases = [
            (AxumStatus::TOO_MANY_REQUESTS, "slow down"),
            (AxumStatus::PAYMENT_REQUIRED, "out of credits"),
            (AxumStatus::INTERNAL_SERVER_ERROR, "AI gateway error: 503"),
        ];

        for (status, message) in cases {
            let url = spawn_relay(error_relay(status, message)).await;
            let client = RelayClient::new(url, None);
            let mut conv = Conversation::default();

            let err = client.send(&mut conv, "Hi", |_| {}).await.unwrap_err();
            match (status, &err) {
                (AxumStatus::TOO_MANY_REQUESTS, ChatError::RateLimited(m)) => assert_eq!(m, message),
                (AxumStatus::PAYMENT_REQUIRED, ChatError::PaymentRequired(m)) => assert_eq!(m, message),
                (_, ChatError::Service { status: 500, message: m }) => assert_eq!(m, message),
                other => panic!("unexpected classification: {other:?}"),
            }
            assert!(!conv.is_streaming());
            assert_eq!(conv.messages().len(), 1);
        }
    }

    #[tokio::test]
    async fn unreachable_relay_is_http_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = RelayClient::new(format!("http://{addr}/v1/chat"), None);
        let mut conv = Conversation::default();
        let err = client.send(&mut conv, "Hi", |_| {}).await.unwrap_err();
        assert!(matches!(err, ChatError::Http(_)));
        assert!(!conv.is_streaming());
    }
}
