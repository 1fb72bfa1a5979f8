//! Deterministic local fallback.
//!
//! Whenever the provider is slow, down, unparseable, or unconfigured,
//! callers still get a usable (if generic) insight. The deployed clients
//! match on the reason strings, so they are fixed.

use acuity_core::models::insight::{Insight, InsightKind};

/// Fallback reasons, one per failure mode.
pub mod reason {
    /// The provider did not answer inside the enrichment deadline.
    pub const TIMEOUT: &str = "Timeout";
    /// The provider call failed (transport, HTTP error, bad payload).
    pub const PROVIDER: &str = "Erreur OpenAI";
    /// The provider answered but the content was unusable.
    pub const PARSE: &str = "Erreur de parsing";
    /// No provider is configured.
    pub const DISABLED: &str = "disabled";
}

/// The canned insight substituted when generation fails.
pub fn insight() -> Insight {
    let mut insight = Insight::new(
        InsightKind::Warning,
        "Utilisation des recommandations standards (réponse locale)",
    );
    insight.category = Some("Information".to_string());
    insight.implications = Some(vec!["Utilisation des recommandations standards".to_string()]);
    insight.recommendations = Some(vec!["Consulter les guidelines habituelles".to_string()]);
    insight
}
