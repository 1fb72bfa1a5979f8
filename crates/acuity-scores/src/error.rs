use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("subtype is required for TIMI (STEMI or NSTEMI)")]
    SubtypeRequired,

    #[error("unknown TIMI subtype: {0}")]
    UnknownSubtype(String),

    #[error("parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },

    #[error("{score_name}: computation produced a non-finite value")]
    NonFinite { score_name: String },
}

impl ScoreError {
    /// Whether the caller's request is at fault, as opposed to the engine.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ScoreError::NonFinite { .. })
    }
}
