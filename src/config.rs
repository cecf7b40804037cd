//! Environment-driven runtime settings.

use std::path::PathBuf;
use std::time::Duration;

/// Default model for AI-enhanced search (ranking is tolerant of a cheap model).
const DEFAULT_SEARCH_MODEL: &str = "gpt-4o-mini";
/// Default model for HTS code generation.
const DEFAULT_HTS_MODEL: &str = "gpt-4o";
/// Default timeout for a single AI request.
const DEFAULT_AI_TIMEOUT_SECS: u64 = 20;

/// Runtime settings resolved from the environment.
///
/// Missing variables fall back to defaults; nothing here fails. The API key
/// stays `None` when unset, which disables the AI layer entirely (the core
/// search never needs it).
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path to the product catalog JSON file.
    pub catalog_path: PathBuf,
    /// OpenAI-compatible API key, if configured.
    pub api_key: Option<String>,
    /// Base URL for the chat-completions endpoint.
    pub api_base: String,
    /// Model used for AI-enhanced search.
    pub search_model: String,
    /// Model used for HTS code suggestions.
    pub hts_model: String,
    /// Per-request timeout for AI calls.
    pub ai_timeout: Duration,
}

impl Settings {
    /// Resolve settings from environment variables.
    pub fn from_env() -> Self {
        let catalog_path = std::env::var("FITTING_CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/products.json"));

        let ai_timeout = std::env::var("FITTING_AI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS));

        Self {
            catalog_path,
            api_key: std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            api_base: std::env::var("FITTING_AI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            search_model: std::env::var("FITTING_AI_MODEL")
                .unwrap_or_else(|_| DEFAULT_SEARCH_MODEL.to_string()),
            hts_model: std::env::var("FITTING_HTS_MODEL")
                .unwrap_or_else(|_| DEFAULT_HTS_MODEL.to_string()),
            ai_timeout,
        }
    }
}
