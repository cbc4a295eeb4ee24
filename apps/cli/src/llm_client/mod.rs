//! LLM client — the single point of entry for all model-API calls in vitae.
//!
//! Two hosted backends convert free text into structured section JSON:
//! OpenAI chat completions and the HuggingFace inference API. Provider
//! dispatch is a trait with one implementation per backend, selected once
//! from configuration — never a string-keyed conditional at call sites.

pub mod huggingface;
pub mod openai;
pub mod prompts;
pub mod validation;

use async_trait::async_trait;
use clap::ValueEnum;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::errors::AppError;
use crate::store::Section;

pub(crate) const MAX_RETRIES: u32 = 3;
pub(crate) const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// One hosted text-completion backend.
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Sends the prompt and returns the model's raw text output.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Backend selector, exposed on the CLI as `--api`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    Openai,
    Huggingface,
}

impl Backend {
    /// Builds the selected provider from configuration. Missing credentials
    /// are an invalid-configuration error, reported before any network call.
    pub fn provider(self, config: &Config) -> Result<Box<dyn Provider>, AppError> {
        match self {
            Backend::Openai => {
                let key = config
                    .openai_api_key
                    .clone()
                    .ok_or_else(|| AppError::Validation("OPENAI_API_KEY is not set".to_string()))?;
                Ok(Box::new(openai::OpenAiProvider::new(
                    key,
                    config.openai_model.clone(),
                )))
            }
            Backend::Huggingface => {
                let token = config
                    .hf_api_token
                    .clone()
                    .ok_or_else(|| AppError::Validation("HF_API_TOKEN is not set".to_string()))?;
                Ok(Box::new(huggingface::HuggingFaceProvider::new(
                    token,
                    config.hf_endpoint.clone(),
                )))
            }
        }
    }
}

/// Converts free text into validated JSON for one section.
///
/// Malformed model output is a hard failure — no partial parse is attempted
/// and nothing is persisted on error.
pub async fn convert_section(
    section: Section,
    text: &str,
    provider: &dyn Provider,
) -> Result<Value, AppError> {
    let prompt = prompts::build_prompt(section, text);
    let raw = provider.complete(&prompt).await?;
    let stripped = strip_json_fences(&raw);
    debug!(
        "{} returned {} chars for section '{section}'",
        provider.name(),
        stripped.len()
    );

    let value: Value = serde_json::from_str(stripped).map_err(LlmError::Parse)?;
    validation::validate_section(section, &value).map_err(AppError::Validation)?;
    Ok(value)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
