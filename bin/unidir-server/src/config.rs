//! Server configuration, loaded from environment variables at startup.

use std::time::Duration;

/// Name of the variable holding the gateway bearer credential.
pub const GATEWAY_API_KEY_VAR: &str = "UNIDIR_GATEWAY_API_KEY";

/// Runtime configuration for unidir-server.
///
/// Every field except the gateway credential has a sensible default. A
/// missing credential does not stop the server from starting; chat requests
/// fail with a configuration error until it is set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:3000"`).
    pub bind_address: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Chat-completions endpoint of the LLM gateway.
    pub gateway_url: String,

    /// Bearer credential for the gateway.
    pub gateway_api_key: Option<String>,

    /// Model identifier sent with every completion request.
    pub model: String,

    /// Budget for the upstream call to produce a response (default 55 s).
    pub upstream_timeout: Duration,

    /// Comma-separated list of allowed CORS origins; `None` means any.
    pub cors_allowed_origins: Option<String>,

    /// Serve Swagger UI at `/swagger-ui`.
    pub enable_swagger: bool,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("UNIDIR_BIND", "0.0.0.0:3000"),
            log_level: env_or("UNIDIR_LOG", "info"),
            log_json: parse_bool("UNIDIR_LOG_JSON", false),
            gateway_url: env_or(
                "UNIDIR_GATEWAY_URL",
                "https://ai.gateway.lovable.dev/v1/chat/completions",
            ),
            gateway_api_key: std::env::var(GATEWAY_API_KEY_VAR)
                .ok()
                .filter(|v| !v.trim().is_empty()),
            model: env_or("UNIDIR_MODEL", "google/gemini-2.5-flash"),
            upstream_timeout: Duration::from_secs(parse_env("UNIDIR_UPSTREAM_TIMEOUT_SECS", 55)),
            cors_allowed_origins: std::env::var("UNIDIR_CORS_ORIGINS")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            enable_swagger: parse_bool("UNIDIR_ENABLE_SWAGGER", true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".into(),
            log_level: "info".into(),
            log_json: false,
            gateway_url: "https://ai.gateway.lovable.dev/v1/chat/completions".into(),
            gateway_api_key: None,
            model: "google/gemini-2.5-flash".into(),
            upstream_timeout: Duration::from_secs(55),
            cors_allowed_origins: None,
            enable_swagger: true,
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}
