//! Chat relay route.
//!
//! `POST /v1/chat` picks a system prompt for the caller's locale and mode,
//! forwards the conversation to the LLM gateway and streams the gateway's
//! event stream back byte for byte. `OPTIONS /v1/chat` answers browser
//! preflights with CORS headers only.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::{debug, info};
use unidir_types::{
    CallerProfile, ChatRole, ChatTurn, ErrorBody, InteractionMode, Locale, RelayRequest,
};
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::prompts;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(relay_chat),
    components(schemas(
        RelayRequest,
        ChatTurn,
        ChatRole,
        CallerProfile,
        ErrorBody,
        InteractionMode,
        Locale
    ))
)]
pub struct ChatApi;

/// Register chat relay routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/chat", post(relay_chat).options(preflight))
}

/// Relay a conversation to the LLM gateway (`POST /v1/chat`).
///
/// On success the body is the gateway's `text/event-stream`, unmodified.
#[utoipa::path(
    post,
    path = "/v1/chat",
    tag = "chat",
    request_body = RelayRequest,
    responses(
        (status = 200, description = "Gateway event stream", body = String, content_type = "text/event-stream"),
        (status = 400, description = "Malformed request", body = ErrorBody),
        (status = 402, description = "Gateway requires payment", body = ErrorBody),
        (status = 429, description = "Gateway rate limit", body = ErrorBody),
        (status = 500, description = "Configuration or gateway error", body = ErrorBody),
        (status = 504, description = "Gateway did not answer in time", body = ErrorBody),
    )
)]
pub async fn relay_chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RelayRequest>, JsonRejection>,
) -> Result<Response, ServerError> {
    state.gateway.ensure_configured()?;

    let Json(req) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    let locale = Locale::from_code_or_default(req.language.as_deref());
    let mode = InteractionMode::from_tag_or_default(req.mode.as_deref());
    let system = prompts::system_prompt(locale, mode, req.user_profile.as_ref());

    debug!(
        %locale,
        %mode,
        turns = req.messages.len(),
        personalised = req.user_profile.as_ref().is_some_and(|p| !p.is_empty()),
        "chat relay request"
    );

    let mut messages = Vec::with_capacity(req.messages.len() + 1);
    messages.push(ChatTurn::system(system));
    messages.extend(req.messages);

    let upstream = state.gateway.stream_completion(&messages).await?;

    info!(%locale, %mode, "relaying gateway stream");

    Ok((
        [(header::CONTENT_TYPE, "text/event-stream")],
        Body::from_stream(upstream.bytes_stream()),
    )
        .into_response())
}

/// Bare `OPTIONS` answer; the CORS layer adds the headers.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use std::sync::Mutex;
    use std::time::Duration;

    use axum::http::{HeaderMap, Request};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use tracing_test::traced_test;

    use super::*;
    use crate::config::Config;
    use crate::routes;

    const SSE_BODY: &str = concat!(
        "data: {\"choices\":[{\"delta\":{\"content\":\"Hello\"}}]}\n\n",
        "data: {\"choices\":[{\"delta\":{\"content\":\" there\"}}]}\n\n",
        "data: [DONE]\n\n",
    );

    #[derive(Default)]
    struct Captured {
        body: Option<Value>,
        authorization: Option<String>,
    }

    /// Serve `app` on an ephemeral local port and return its completions URL.
    async fn spawn_gateway(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/v1/chat/completions")
    }

    /// Gateway that records the request and answers with [`SSE_BODY`].
    async fn recording_gateway() -> (String, Arc<Mutex<Captured>>) {
        let captured = Arc::new(Mutex::new(Captured::default()));
        let sink = captured.clone();
        let app = Router::new().route(
            "/v1/chat/completions",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    {
                        let mut c = sink.lock().unwrap();
                        c.body = Some(body);
                        c.authorization = headers
                            .get(header::AUTHORIZATION)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_owned);
                    }
                    ([(header::CONTENT_TYPE, "text/event-stream")], SSE_BODY)
                }
            }),
        );
        (spawn_gateway(app).await, captured)
    }

    /// Gateway that always answers `status` with a JSON error body.
    async fn failing_gateway(status: StatusCode) -> String {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(move || async move { (status, Json(json!({ "error": "upstream says no" }))) }),
        );
        spawn_gateway(app).await
    }

    fn app_for(gateway_url: String, api_key: Option<&str>, timeout: Duration) -> Router {
        let config = Config {
            gateway_url,
            gateway_api_key: api_key.map(str::to_owned),
            upstream_timeout: timeout,
            enable_swagger: false,
            ..Config::default()
        };
        routes::build(Arc::new(AppState::new(config).unwrap()))
    }

    fn chat_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/v1/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ORIGIN, "https://unidir.kz")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_error(resp: Response) -> (StatusCode, String) {
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body.error)
    }

    fn hi() -> Value {
        json!({ "messages": [{ "role": "user", "content": "Hi" }] })
    }

    #[tokio::test]
    #[traced_test]
    async fn streams_gateway_body_unchanged() {
        let (url, captured) = recording_gateway().await;
        let app = app_for(url, Some("secret"), Duration::from_secs(5));

        let resp = app
            .oneshot(chat_request(json!({
                "messages": [{ "role": "user", "content": "Hi" }],
                "mode": "career",
                "language": "ru",
            })))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/event-stream");
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(bytes, SSE_BODY.as_bytes());

        let c = captured.lock().unwrap();
        assert_eq!(c.authorization.as_deref(), Some("Bearer secret"));
        let sent = c.body.as_ref().unwrap();
        assert_eq!(sent["stream"], true);
        assert_eq!(sent["model"], "google/gemini-2.5-flash");
        let messages = sent["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(
            messages[0]["content"],
            prompts::system_prompt(Locale::Ru, InteractionMode::Career, None)
        );
        assert_eq!(messages[1], json!({ "role": "user", "content": "Hi" }));

        assert!(logs_contain("relaying gateway stream"));
    }

    #[tokio::test]
    async fn defaults_to_russian_general_prompt() {
        let (url, captured) = recording_gateway().await;
        let app = app_for(url, Some("k"), Duration::from_secs(5));

        let resp = app
            .oneshot(chat_request(json!({
                "messages": [{ "role": "user", "content": "Hi" }],
                "language": "xx",
                "mode": "nonsense",
            })))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let _ = resp.into_body().collect().await.unwrap();

        let c = captured.lock().unwrap();
        assert_eq!(
            c.body.as_ref().unwrap()["messages"][0]["content"],
            prompts::system_prompt(Locale::Ru, InteractionMode::General, None)
        );
    }

    #[tokio::test]
    async fn profile_is_folded_into_system_prompt() {
        let (url, captured) = recording_gateway().await;
        let app = app_for(url, Some("k"), Duration::from_secs(5));

        let resp = app
            .oneshot(chat_request(json!({
                "messages": [{ "role": "user", "content": "Hi" }],
                "language": "en",
                "userProfile": { "score": 101, "preferredCities": ["Shymkent"] },
            })))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let _ = resp.into_body().collect().await.unwrap();

        let c = captured.lock().unwrap();
        let system = c.body.as_ref().unwrap()["messages"][0]["content"].as_str().unwrap().to_owned();
        assert!(system.contains("- ENT score: 101"));
        assert!(system.ends_with("- Preferred cities: Shymkent"));
    }

    #[tokio::test]
    async fn missing_credential_fails_before_calling_gateway() {
        let (url, captured) = recording_gateway().await;
        let app = app_for(url, None, Duration::from_secs(5));

        let resp = app.oneshot(chat_request(hi())).await.unwrap();
        let (status, error) = read_error(resp).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.contains("UNIDIR_GATEWAY_API_KEY"));
        assert!(captured.lock().unwrap().body.is_none());
    }

    #[tokio::test]
    async fn upstream_statuses_are_translated() {
        for (upstream, expected) in [
            (StatusCode::TOO_MANY_REQUESTS, StatusCode::TOO_MANY_REQUESTS),
            (StatusCode::PAYMENT_REQUIRED, StatusCode::PAYMENT_REQUIRED),
            (StatusCode::SERVICE_UNAVAILABLE, StatusCode::INTERNAL_SERVER_ERROR),
            (StatusCode::UNAUTHORIZED, StatusCode::INTERNAL_SERVER_ERROR),
        ] {
            let url = failing_gateway(upstream).await;
            let app = app_for(url, Some("k"), Duration::from_secs(5));
            let resp = app.oneshot(chat_request(hi())).await.unwrap();
            assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
            let (status, error) = read_error(resp).await;
            assert_eq!(status, expected, "upstream {upstream}");
            assert!(!error.is_empty());
            assert!(!error.contains("upstream says no"), "upstream body must not leak");
            if expected == StatusCode::INTERNAL_SERVER_ERROR {
                assert!(error.contains(&upstream.as_u16().to_string()));
            }
        }
    }

    #[tokio::test]
    async fn slow_gateway_times_out_without_partial_body() {
        let app_gateway = Router::new().route(
            "/v1/chat/completions",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                ([(header::CONTENT_TYPE, "text/event-stream")], SSE_BODY)
            }),
        );
        let url = spawn_gateway(app_gateway).await;
        let app = app_for(url, Some("k"), Duration::from_millis(200));

        let resp = app.oneshot(chat_request(hi())).await.unwrap();
        assert_ne!(resp.headers()[header::CONTENT_TYPE], "text/event-stream");
        let (status, error) = read_error(resp).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert!(error.contains("timed out"));
    }

    #[tokio::test]
    async fn unreachable_gateway_is_internal_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let app = app_for(format!("http://{addr}/v1/chat/completions"), Some("k"), Duration::from_secs(5));
        let resp = app.oneshot(chat_request(hi())).await.unwrap();
        let (status, error) = read_error(resp).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!error.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let (url, _captured) = recording_gateway().await;
        let app = app_for(url, Some("k"), Duration::from_secs(5));

        let req = Request::builder()
            .method("POST")
            .uri("/v1/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, error) = read_error(app.oneshot(req).await.unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!error.is_empty());
    }

    #[tokio::test]
    async fn long_conversation_is_relayed() {
        let (url, captured) = recording_gateway().await;
        let app = app_for(url, Some("k"), Duration::from_secs(5));

        let turn = "я".repeat(1000);
        let messages: Vec<Value> = (0..40)
            .map(|i| {
                let role = if i % 2 == 0 { "user" } else { "assistant" };
                json!({ "role": role, "content": turn })
            })
            .collect();

        let resp = app.oneshot(chat_request(json!({ "messages": messages }))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let _ = resp.into_body().collect().await.unwrap();

        let c = captured.lock().unwrap();
        assert_eq!(c.body.as_ref().unwrap()["messages"].as_array().unwrap().len(), 41);
    }

    #[tokio::test]
    async fn loosely_typed_profile_is_accepted() {
        let (url, captured) = recording_gateway().await;
        let app = app_for(url, Some("k"), Duration::from_secs(5));

        let resp = app
            .oneshot(chat_request(json!({
                "messages": [{ "role": "user", "content": "Hi" }],
                "language": "en",
                "userProfile": {
                    "interests": null,
                    "preferredCities": null,
                    "score": 105.5,
                    "budget": "1500000",
                },
            })))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let _ = resp.into_body().collect().await.unwrap();

        let c = captured.lock().unwrap();
        let system = c.body.as_ref().unwrap()["messages"][0]["content"].as_str().unwrap().to_owned();
        assert!(system.contains("- ENT score: 105.5"));
        assert!(system.ends_with("- Budget: 1500000 KZT per year"));
        assert!(!system.contains("Interests"));
    }

    #[tokio::test]
    async fn bare_options_returns_headers_only() {
        let app = app_for("http://127.0.0.1:9/unused".into(), None, Duration::from_secs(5));
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/v1/chat")
            .header(header::ORIGIN, "https://unidir.kz")
            .body(Body::empty())
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn browser_preflight_is_answered() {
        let app = app_for("http://127.0.0.1:9/unused".into(), None, Duration::from_secs(5));
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/v1/chat")
            .header(header::ORIGIN, "https://unidir.kz")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization, content-type")
            .body(Body::empty())
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert!(resp.status().is_success());
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_HEADERS));
    }
}
