use thiserror::Error;

/// Failure inside an insight generator.
///
/// The enrichment pipeline never propagates these to callers; each one
/// selects the fallback path and the reason string reported with it.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// No provider is configured (missing API key).
    #[error("insight generation is disabled")]
    Disabled,

    /// The request never produced a response (DNS, TLS, connect, I/O).
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("provider returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body did not decode into the expected shape.
    #[error("malformed provider response: {0}")]
    Malformed(String),
}
