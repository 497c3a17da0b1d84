use anyhow::Result;

use crate::llm_client::DEFAULT_MODEL;

/// Runtime configuration loaded from environment variables (and `.env` if present).
/// Nothing is required: without an API key the runner skips every prompt.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub model_name: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Ok(Self::from_lookup(|key| std::env::var(key).ok()))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            anthropic_api_key: lookup("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty()),
            model_name: lookup("BIAS_PROBE_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }
}
