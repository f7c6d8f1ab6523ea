//! Caller profile forwarded to the relay for prompt personalisation.

use serde::{Deserialize, Serialize};

use crate::de::{lenient_bool, lenient_list, lenient_number, lenient_text};

/// Read-only snapshot of what the applicant told us about themselves.
///
/// Every field is optional; the relay only mentions the populated ones.
/// Both camelCase and snake_case keys are accepted on input. A field of the
/// wrong shape (a float score, a numeric string, `null` lists) is read
/// leniently or treated as absent, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CallerProfile {
    /// Unified National Test (ENT) score already obtained.
    #[serde(
        default,
        alias = "ent_score",
        alias = "entScore",
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub score: Option<f64>,

    /// Score the applicant expects to get.
    #[serde(
        default,
        alias = "expected_score",
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub expected_score: Option<f64>,

    /// Language of instruction proficiency, e.g. `"IELTS 6.5"`.
    #[serde(
        default,
        alias = "language_level",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub language_level: Option<String>,

    /// Target degree, e.g. `"bachelor"` or `"master"`.
    #[serde(
        default,
        alias = "target_degree",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_degree: Option<String>,

    /// Yearly tuition ceiling in tenge.
    #[serde(
        default,
        alias = "max_budget",
        alias = "maxBudget",
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub budget: Option<f64>,

    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,

    #[serde(
        default,
        alias = "preferred_cities",
        deserialize_with = "lenient_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub preferred_cities: Vec<String>,

    #[serde(
        default,
        alias = "willing_to_relocate",
        deserialize_with = "lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub willing_to_relocate: Option<bool>,
}

impl CallerProfile {
    /// `true` when no field carries information.
    pub fn is_empty(&self) -> bool {
        self.score.is_none()
            && self.expected_score.is_none()
            && self.language_level.as_deref().is_none_or(|s| s.trim().is_empty())
            && self.target_degree.as_deref().is_none_or(|s| s.trim().is_empty())
            && self.budget.is_none()
            && self.interests.iter().all(|s| s.trim().is_empty())
            && self.preferred_cities.iter().all(|s| s.trim().is_empty())
            && self.willing_to_relocate.is_none()
    }
}
