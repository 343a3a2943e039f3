use crate::config::Config;
use crate::conversation::{Conversation, Message};
use thiserror::Error;

const TEMPERATURE: f32 = 0.5;
const MAX_TOKENS: u32 = 300;

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("no API key configured (set OPENAI_API_KEY)")]
    MissingApiKey,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("OpenAI error {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },
    #[error("response contained no choices")]
    NoChoices,
    #[error("first choice had no message content")]
    NoContent,
}

/// Anything that can turn a conversation into the model's reply.
pub trait Translate {
    async fn translate(&self, conversation: &Conversation) -> Result<String, TranslationError>;
}

#[derive(serde::Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
}

#[derive(serde::Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(serde::Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(serde::Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiClient {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            api_key: cfg.openai_api_key.clone(),
            model: cfg.openai_model.clone(),
            endpoint: format!("{}/chat/completions", cfg.api_base.trim_end_matches('/')),
        })
    }
}

impl Translate for OpenAiClient {
    async fn translate(&self, conversation: &Conversation) -> Result<String, TranslationError> {
        if self.api_key.is_empty() {
            return Err(TranslationError::MissingApiKey);
        }
        let req = ChatRequest {
            model: &self.model,
            messages: conversation.messages(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(TranslationError::Status { status, body });
        }

        let parsed: ChatResponse = resp.json().await?;
        let first = parsed.choices.into_iter().next().ok_or(TranslationError::NoChoices)?;
        first.message.content.ok_or(TranslationError::NoContent)
    }
}
