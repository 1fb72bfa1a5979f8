//! Prompt construction for the chat provider.
//!
//! The system prompt asks for four sections separated by blank lines,
//! with `-` bullets in the last three. [`crate::parse`] depends on that
//! shape; change one side and the other follows.

use acuity_core::params::ParamSet;
use acuity_core::score_type::ScoreType;

/// System prompt framing every request.
pub const SYSTEM: &str = "En tant qu'assistant médical spécialisé, analysez les paramètres suivants et fournissez une réponse structurée :\n\n1. Une interprétation clinique détaillée du score\n2. Les implications pronostiques (préfixez chaque point par '-')\n3. Des recommandations thérapeutiques basées sur les guidelines actuelles (préfixez chaque point par '-')\n4. Des points de vigilance particuliers (préfixez chaque point par '-')\n\nBasez vos réponses sur les dernières recommandations médicales.";

/// The per-request user prompt: score identity, computed value, and the
/// submitted parameters as pretty-printed JSON.
pub fn build(score_type: ScoreType, params: &ParamSet, score: f64) -> String {
    let params_json =
        serde_json::to_string_pretty(params).unwrap_or_else(|_| "{}".to_string());
    format!(
        "Type de score: {name}\n\
         Score calculé: {score}\n\
         Paramètres cliniques:\n\
         {params_json}\n\n\
         Veuillez fournir:\n\
         1. Une interprétation clinique détaillée\n\
         2. Les implications pronostiques (commencez chaque point par '-')\n\
         3. Des recommandations thérapeutiques (commencez chaque point par '-')\n\
         4. Des points de vigilance particuliers (commencez chaque point par '-')",
        name = score_type.display_name(),
    )
}
