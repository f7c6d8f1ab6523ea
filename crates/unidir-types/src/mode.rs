//! Interaction modes and supported locales.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Conversational persona selected by the caller.
///
/// The mode picks the server-side system prompt and the client-side welcome
/// text / suggested questions.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InteractionMode {
    /// Open questions about universities and programs.
    #[default]
    General,
    /// "Academic twin": what applicants with a similar profile usually do.
    Twin,
    /// Alternatives when the preferred option is out of reach.
    Alternatives,
    /// Career guidance and the programs that lead there.
    Career,
}

impl InteractionMode {
    /// Parse a mode tag, falling back to [`InteractionMode::General`] for
    /// anything unknown or missing.
    pub fn from_tag_or_default(tag: Option<&str>) -> Self {
        tag.and_then(|t| t.trim().parse().ok()).unwrap_or_default()
    }
}

/// Locales the assistant speaks.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    Kk,
    En,
}

impl Locale {
    /// Parse a locale code such as `"ru"`, `"kk"` or `"en-US"`, falling back
    /// to [`Locale::Ru`] when the language is not supported.
    pub fn from_code_or_default(code: Option<&str>) -> Self {
        code.and_then(|c| {
            let primary = c.trim().split(['-', '_']).next().unwrap_or_default();
            primary.to_ascii_lowercase().parse().ok()
        })
        .unwrap_or_default()
    }
}
