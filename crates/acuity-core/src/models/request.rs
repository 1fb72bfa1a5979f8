use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::params::ParamSet;

/// One score computation request as clients send it.
///
/// `score_type` stays an open string here; the engine resolves it against
/// the registry and rejects unknown ids. `subtype` selects the TIMI variant
/// and accepts the legacy field name `type`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreRequest {
    pub score_type: String,
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(default)]
    pub params: ParamSet,
}
