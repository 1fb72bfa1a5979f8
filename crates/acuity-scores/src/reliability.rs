//! Parameter-completeness accounting.
//!
//! A score computed from a partial parameter set is still returned, but its
//! reliability drops by an equal share per missing required parameter:
//! `100 - missing × (100 / required_count)`, floored at zero. Optional
//! parameters never move it.

use acuity_core::params::ParamSet;

use crate::schema::ParamSpec;

/// Reliability (0–100) and the missing required parameter names, in
/// declaration order.
pub fn assess(specs: &[ParamSpec], params: &ParamSet) -> (f64, Vec<String>) {
    let required: Vec<&ParamSpec> = specs.iter().filter(|s| s.required).collect();
    if required.is_empty() {
        return (100.0, Vec::new());
    }

    let missing: Vec<String> = required
        .iter()
        .filter(|s| !params.contains(s.name))
        .map(|s| s.name.to_string())
        .collect();

    let share = 100.0 / required.len() as f64;
    let reliability = (100.0 - missing.len() as f64 * share).max(0.0);
    (reliability, missing)
}
