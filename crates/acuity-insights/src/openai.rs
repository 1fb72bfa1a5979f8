//! OpenAI-backed insight generator.
//!
//! Sync HTTP via ureq, run on the blocking pool so the enrichment
//! deadline can abandon a slow call without stalling the runtime.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use acuity_core::params::ParamSet;
use acuity_core::score_type::ScoreType;

use crate::config::OpenAiConfig;
use crate::error::GeneratorError;
use crate::{InsightGenerator, prompt};

/// Outer transport bound on one provider call. The enrichment deadline
/// is much shorter; this only keeps an abandoned call from lingering on
/// the blocking pool.
const TRANSPORT_TIMEOUT: Duration = Duration::from_secs(30);

/// Chat-completions client for the narrative layer.
///
/// Built without a key (empty or unset `OPENAI_API_KEY`), it reports
/// itself disabled and every request takes the local fallback path.
pub struct OpenAiGenerator {
    config: OpenAiConfig,
    api_key: Option<String>,
    agent: ureq::Agent,
}

fn make_agent() -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false)
        .timeout_global(Some(TRANSPORT_TIMEOUT))
        .build()
        .new_agent()
}

impl OpenAiGenerator {
    pub fn new(config: OpenAiConfig, api_key: impl Into<String>) -> Self {
        OpenAiGenerator {
            config,
            api_key: Some(api_key.into()),
            agent: make_agent(),
        }
    }

    /// Key from `OPENAI_API_KEY`, settings from the `ACUITY_AI_*`
    /// variables.
    pub fn from_env() -> Self {
        OpenAiGenerator {
            config: OpenAiConfig::from_env(),
            api_key: env::var("OPENAI_API_KEY").ok().filter(|key| !key.is_empty()),
            agent: make_agent(),
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

impl InsightGenerator for OpenAiGenerator {
    fn enabled(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(
        &self,
        score_type: ScoreType,
        params: &ParamSet,
        score: f64,
    ) -> Result<String, GeneratorError> {
        let Some(api_key) = self.api_key.clone() else {
            return Err(GeneratorError::Disabled);
        };

        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(prompt::SYSTEM),
                ChatMessage::user(prompt::build(score_type, params, score)),
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };
        let agent = self.agent.clone();
        let api_url = self.config.api_url.clone();

        tokio::task::spawn_blocking(move || send_chat(&agent, &api_url, &api_key, &body))
            .await
            .map_err(|join| GeneratorError::Transport(join.to_string()))?
    }
}

fn send_chat(
    agent: &ureq::Agent,
    api_url: &str,
    api_key: &str,
    body: &ChatRequest,
) -> Result<String, GeneratorError> {
    let response = agent
        .post(api_url)
        .header("Content-Type", "application/json")
        .header("Authorization", &format!("Bearer {api_key}"))
        .send_json(body)
        .map_err(|error| GeneratorError::Transport(error.to_string()))?;

    let status = response.status().as_u16();
    if status >= 400 {
        let message = response.into_body().read_to_string().unwrap_or_default();
        return Err(GeneratorError::Api { status, message });
    }

    let decoded: ChatResponse = response
        .into_body()
        .read_json()
        .map_err(|error| GeneratorError::Malformed(error.to_string()))?;

    decoded
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| GeneratorError::Malformed("no response choices".to_string()))
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum Role {
    System,
    User,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: Role,
    content: String,
}

impl ChatMessage {
    fn system(content: impl Into<String>) -> Self {
        ChatMessage { role: Role::System, content: content.into() }
    }

    fn user(content: impl Into<String>) -> Self {
        ChatMessage { role: Role::User, content: content.into() }
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}
