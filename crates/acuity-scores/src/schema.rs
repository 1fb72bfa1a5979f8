//! Parameter declarations and request-level checks.
//!
//! Each calculator declares the parameters it reads. Absence is never an
//! issue here — reliability accounting owns that — but a present value of
//! the wrong kind, outside its range, or with a label outside the allowed
//! set is.

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use acuity_core::params::{ParamSet, ParamValue};

/// Kind of value a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ParamKind {
    Number,
    Flag,
    Text,
}

impl ParamKind {
    fn describe(&self) -> &'static str {
        match self {
            ParamKind::Number => "a number",
            ParamKind::Flag => "a boolean",
            ParamKind::Text => "a string",
        }
    }
}

/// Declaration of one parameter a score reads.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    /// Accepted numeric window, inclusive on both ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<(f64, f64)>,
    /// Accepted labels for text parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<&'static [&'static str]>,
}

impl ParamSpec {
    pub const fn number(name: &'static str, required: bool, lo: f64, hi: f64) -> Self {
        ParamSpec {
            name,
            kind: ParamKind::Number,
            required,
            range: Some((lo, hi)),
            allowed: None,
        }
    }

    pub const fn flag(name: &'static str, required: bool) -> Self {
        ParamSpec {
            name,
            kind: ParamKind::Flag,
            required,
            range: None,
            allowed: None,
        }
    }

    pub const fn label(
        name: &'static str,
        required: bool,
        allowed: &'static [&'static str],
    ) -> Self {
        ParamSpec {
            name,
            kind: ParamKind::Text,
            required,
            range: None,
            allowed: Some(allowed),
        }
    }
}

/// One problem with a submitted parameter set.
#[derive(Debug, Clone, Serialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ParamIssue {
    pub parameter: String,
    pub message: String,
}

impl ParamIssue {
    fn new(parameter: &str, message: String) -> Self {
        ParamIssue {
            parameter: parameter.to_string(),
            message,
        }
    }
}

/// Check present parameters against their declarations. Unknown parameter
/// names are rejected so a misspelled name cannot silently read as missing.
pub fn check(specs: &[ParamSpec], params: &ParamSet) -> Vec<ParamIssue> {
    let mut issues = Vec::new();

    for (name, value) in params.iter() {
        let Some(spec) = specs.iter().find(|s| s.name == name) else {
            issues.push(ParamIssue::new(name, format!("unknown parameter '{name}'")));
            continue;
        };

        match (spec.kind, value) {
            (ParamKind::Number, ParamValue::Number(v)) => {
                if let Some((lo, hi)) = spec.range
                    && (*v < lo || *v > hi)
                {
                    issues.push(ParamIssue::new(
                        name,
                        format!("'{name}' = {v} is outside the accepted range [{lo}, {hi}]"),
                    ));
                }
            }
            (ParamKind::Flag, ParamValue::Flag(_)) => {}
            (ParamKind::Text, ParamValue::Text(t)) => {
                if let Some(allowed) = spec.allowed
                    && !allowed.contains(&t.as_str())
                {
                    issues.push(ParamIssue::new(
                        name,
                        format!("'{name}' = '{t}' is not one of {allowed:?}"),
                    ));
                }
            }
            (expected, _) => {
                issues.push(ParamIssue::new(
                    name,
                    format!("'{name}' must be {}", expected.describe()),
                ));
            }
        }
    }

    issues
}
