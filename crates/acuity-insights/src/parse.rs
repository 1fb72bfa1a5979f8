//! Parsing of the provider's narrative response.
//!
//! The provider is asked for four blank-line-separated sections: clinical
//! interpretation, prognostic implications, treatment recommendations,
//! and vigilance points. Sections two through four are `-` bulleted.

use acuity_core::models::insight::{Insight, InsightKind};

/// Split a raw response into structured insights.
///
/// Returns `None` when the content is unusable (no interpretation text at
/// all); the caller then takes the fallback path. Missing bullet sections
/// degrade to empty lists, not to failure.
pub fn sections(content: &str) -> Option<Vec<Insight>> {
    let sections: Vec<&str> = content.split("\n\n").collect();
    let interpretation = sections.first().map(|text| text.trim()).unwrap_or_default();
    if interpretation.is_empty() {
        return None;
    }

    let mut clinical = Insight::new(InsightKind::Clinical, interpretation);
    clinical.category = Some("Interprétation".to_string());
    clinical.implications = Some(bullet_points(sections.get(1).copied().unwrap_or_default()));
    clinical.recommendations = Some(bullet_points(sections.get(2).copied().unwrap_or_default()));
    let mut insights = vec![clinical];

    let vigilance = bullet_points(sections.get(3).copied().unwrap_or_default());
    if !vigilance.is_empty() {
        let mut warning = Insight::new(
            InsightKind::Warning,
            "Points nécessitant une attention particulière",
        );
        warning.category = Some("Points de vigilance".to_string());
        warning.implications = Some(vigilance);
        insights.push(warning);
    }

    Some(insights)
}

/// Lines starting with `-`, with the marker stripped. Blank bullets are
/// dropped.
fn bullet_points(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.trim().strip_prefix('-'))
        .map(|point| point.trim().to_string())
        .filter(|point| !point.is_empty())
        .collect()
}
