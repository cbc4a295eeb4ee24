use std::path::PathBuf;

use anyhow::Result;

/// Application configuration loaded from environment variables.
///
/// API credentials are optional here — they are only required once the
/// matching backend is actually selected on the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub hf_api_token: Option<String>,
    pub hf_endpoint: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_dir: PathBuf::from(env_or("VITAE_DATA_DIR", "data")),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            openai_model: env_or("OPENAI_MODEL", "gpt-3.5-turbo"),
            hf_api_token: std::env::var("HF_API_TOKEN").ok(),
            hf_endpoint: env_or(
                "HF_ENDPOINT",
                "https://api-inference.huggingface.co/models/gpt2",
            ),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
