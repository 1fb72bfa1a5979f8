use std::env;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Chat-completions settings for the OpenAI generator.
///
/// The key itself lives on [`crate::OpenAiGenerator`], not here, so a
/// config can be logged or serialized without leaking credentials.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        OpenAiConfig {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl OpenAiConfig {
    /// Defaults overridden by `ACUITY_AI_MODEL`, `ACUITY_AI_MAX_TOKENS`
    /// and `ACUITY_AI_TEMPERATURE`. Unparseable values fall back to the
    /// defaults rather than failing startup.
    pub fn from_env() -> Self {
        let defaults = OpenAiConfig::default();
        OpenAiConfig {
            api_url: defaults.api_url,
            model: env::var("ACUITY_AI_MODEL").unwrap_or(defaults.model),
            max_tokens: env::var("ACUITY_AI_MAX_TOKENS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.max_tokens),
            temperature: env::var("ACUITY_AI_TEMPERATURE")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.temperature),
        }
    }
}
