use unidir_types::CallerProfile;

use super::ProfileLabels;

/// Render the populated profile fields as a `- label: value` block.
///
/// Returns `None` when nothing is populated so the caller can skip the
/// block entirely. Blank strings and blank list entries count as absent.
pub fn personalization_fragment(labels: &ProfileLabels, profile: &CallerProfile) -> Option<String> {
    let mut lines: Vec<String> = Vec::new();

    if let Some(score) = profile.score {
        lines.push(format!("- {}: {score}", labels.score));
    }
    if let Some(expected) = profile.expected_score {
        lines.push(format!("- {}: {expected}", labels.expected_score));
    }
    if let Some(level) = non_blank(profile.language_level.as_deref()) {
        lines.push(format!("- {}: {level}", labels.language_level));
    }
    if let Some(degree) = non_blank(profile.target_degree.as_deref()) {
        lines.push(format!("- {}: {degree}", labels.target_degree));
    }
    if let Some(budget) = profile.budget {
        lines.push(format!("- {}: {budget} {}", labels.budget, labels.currency));
    }
    if let Some(interests) = join_list(&profile.interests) {
        lines.push(format!("- {}: {interests}", labels.interests));
    }
    if let Some(cities) = join_list(&profile.preferred_cities) {
        lines.push(format!("- {}: {cities}", labels.preferred_cities));
    }
    if let Some(relocate) = profile.willing_to_relocate {
        let answer = if relocate { labels.yes } else { labels.no };
        lines.push(format!("- {}: {answer}", labels.relocation));
    }

    if lines.is_empty() {
        return None;
    }

    Some(format!("\n\n{}\n{}", labels.header, lines.join("\n")))
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn join_list(items: &[String]) -> Option<String> {
    let kept: Vec<&str> = items.iter().map(|s| s.trim()).filter(|s| !s.is_empty()).collect();
    (!kept.is_empty()).then(|| kept.join(", "))
}
