//! System prompt selection.
//!
//! A prompt is chosen by locale, then by interaction mode, and the caller's
//! profile (if it says anything) is appended as a short personalisation
//! block. Unknown locales and modes never reach this module: they are
//! normalised to [`Locale::Ru`] and [`InteractionMode::General`] when the
//! request is parsed.

mod en;
mod kk;
mod profile;
mod ru;

use unidir_types::{CallerProfile, InteractionMode, Locale};

pub use profile::personalization_fragment;

/// Templates and profile labels for one locale.
pub struct PromptSet {
    pub general: &'static str,
    pub twin: &'static str,
    pub alternatives: &'static str,
    pub career: &'static str,
    pub labels: ProfileLabels,
}

/// Human-readable names of the profile fields in one locale.
pub struct ProfileLabels {
    pub header: &'static str,
    pub score: &'static str,
    pub expected_score: &'static str,
    pub language_level: &'static str,
    pub target_degree: &'static str,
    pub budget: &'static str,
    pub currency: &'static str,
    pub interests: &'static str,
    pub preferred_cities: &'static str,
    pub relocation: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
}

impl PromptSet {
    pub fn template(&self, mode: InteractionMode) -> &'static str {
        match mode {
            InteractionMode::General => self.general,
            InteractionMode::Twin => self.twin,
            InteractionMode::Alternatives => self.alternatives,
            InteractionMode::Career => self.career,
        }
    }
}

pub fn prompt_set(locale: Locale) -> &'static PromptSet {
    match locale {
        Locale::Ru => &ru::PROMPTS,
        Locale::Kk => &kk::PROMPTS,
        Locale::En => &en::PROMPTS,
    }
}

/// Full system prompt for `locale` × `mode`, personalised with `profile`.
pub fn system_prompt(
    locale: Locale,
    mode: InteractionMode,
    profile: Option<&CallerProfile>,
) -> String {
    let set = prompt_set(locale);
    let mut prompt = set.template(mode).to_owned();
    if let Some(fragment) = profile.and_then(|p| personalization_fragment(&set.labels, p)) {
        prompt.push_str(&fragment);
    }
    prompt
}
