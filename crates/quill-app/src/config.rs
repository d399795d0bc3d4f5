use std::env;

use log::warn;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
}

impl GeminiConfig {
    /// Reads the API credential and model override from the environment
    /// (a local `.env` is honored). A missing key is a warning, not a
    /// startup failure: requests fail at submit time instead.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();

        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        if api_key.is_none() {
            warn!("GEMINI_API_KEY is not set; generation requests will fail until it is provided");
        }

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-pro".to_string());

        Self { api_key, model }
    }
}
