//! Application configuration. API credentials, endpoints, timeouts.

use serde::Deserialize;

/// Default per-request timeout for both external services, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Generative-model API key. Read from NOTE_SYNC_AI_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// Model API base URL. Defaults to the Google Generative Language v1beta
    /// root. Read from NOTE_SYNC_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// Text model name. Read from NOTE_SYNC_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// Vision model name (image notes). Read from NOTE_SYNC_AI_VISION_MODEL.
    #[serde(default)]
    pub ai_vision_model: Option<String>,

    /// Notion integration token. Read from NOTE_SYNC_NOTION_TOKEN.
    #[serde(default)]
    pub notion_token: Option<String>,

    /// Notion API base URL. Read from NOTE_SYNC_NOTION_API_URL.
    #[serde(default)]
    pub notion_api_url: Option<String>,

    /// Default database id used to pre-fill the UI prompt. Read from
    /// NOTE_SYNC_DATABASE_ID.
    #[serde(default)]
    pub database_id: Option<String>,

    /// Per-request timeout in seconds for all external calls. Read from
    /// NOTE_SYNC_HTTP_TIMEOUT_SECS.
    #[serde(default)]
    pub http_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("NOTE_SYNC"));
        if let Ok(path) = std::env::var("NOTE_SYNC_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the model API key if configured.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .or_else(|| std::env::var("NOTE_SYNC_AI_API_KEY").ok())
    }

    /// Returns the model API base URL. Defaults to the Gemini v1beta root.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .or_else(|| std::env::var("NOTE_SYNC_AI_API_URL").ok())
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string())
    }

    /// Returns the text model name. Defaults to "gemini-1.5-flash".
    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .or_else(|| std::env::var("NOTE_SYNC_AI_MODEL").ok())
            .unwrap_or_else(|| "gemini-1.5-flash".to_string())
    }

    /// Returns the vision model name. Defaults to the text model.
    pub fn ai_vision_model_or_default(&self) -> String {
        self.ai_vision_model
            .clone()
            .or_else(|| std::env::var("NOTE_SYNC_AI_VISION_MODEL").ok())
            .unwrap_or_else(|| self.ai_model_or_default())
    }

    /// Returns true if the generative model is configured (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.ai_api_key().is_some()
    }

    /// Returns the Notion token if configured.
    pub fn notion_token(&self) -> Option<String> {
        self.notion_token
            .clone()
            .or_else(|| std::env::var("NOTE_SYNC_NOTION_TOKEN").ok())
    }

    /// Returns the Notion API base URL. Defaults to the public endpoint.
    pub fn notion_api_url_or_default(&self) -> String {
        self.notion_api_url
            .clone()
            .or_else(|| std::env::var("NOTE_SYNC_NOTION_API_URL").ok())
            .unwrap_or_else(|| "https://api.notion.com".to_string())
    }

    /// Returns the default database id for the UI prompt, if any.
    pub fn database_id(&self) -> Option<String> {
        self.database_id
            .clone()
            .or_else(|| std::env::var("NOTE_SYNC_DATABASE_ID").ok())
    }

    /// Returns the per-request timeout in seconds. Defaults to 60.
    pub fn http_timeout_secs_or_default(&self) -> u64 {
        self.http_timeout_secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS)
    }
}
