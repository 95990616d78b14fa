//! Configuration management utilities
//!
//! `Config` carries the settings the adapters need at runtime: which LLM
//! backend to talk to, which models to use, and the market-data credentials.
//! Values come from defaults, an optional JSON file, and environment overrides
//! (in that order).

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

const DEFAULT_BACKEND_URL: &str = "https://api.openai.com/v1";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    /// Config file is not valid JSON for `Config`
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value that cannot be used
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// A required API key is not configured
    #[error("missing API key: {0}")]
    MissingApiKey(&'static str),
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider name (e.g. "openai")
    pub llm_provider: String,
    /// Base URL of the LLM backend
    pub backend_url: String,
    /// Fast model used for summarization and web search
    pub quick_think_llm: String,
    /// Slower model used for deeper reasoning downstream
    pub deep_think_llm: String,
    /// Number of debate rounds a downstream orchestrator runs
    pub max_debate_rounds: u32,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
    /// Alpha Vantage requests allowed per minute
    pub alpha_vantage_rate_limit: u32,
    /// Alpha Vantage API key
    pub alpha_vantage_api_key: Option<String>,
    /// API key sent to the LLM backend
    pub openai_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_provider: "openai".to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            quick_think_llm: "gpt-4o-mini".to_string(),
            deep_think_llm: "o4-mini".to_string(),
            max_debate_rounds: 1,
            request_timeout_secs: 120,
            alpha_vantage_rate_limit: 5,
            alpha_vantage_api_key: None,
            openai_api_key: None,
        }
    }
}

impl Config {
    /// Defaults overlaid with environment variables
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Load configuration from a JSON file, then apply environment overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config.with_env_overrides())
    }

    /// Override fields from `TRADEAGENT_*` and API key environment variables
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("TRADEAGENT_BACKEND_URL") {
            self.backend_url = url;
        }
        if let Ok(provider) = std::env::var("TRADEAGENT_LLM_PROVIDER") {
            self.llm_provider = provider;
        }
        if let Ok(model) = std::env::var("TRADEAGENT_QUICK_THINK_LLM") {
            self.quick_think_llm = model;
        }
        if let Ok(model) = std::env::var("TRADEAGENT_DEEP_THINK_LLM") {
            self.deep_think_llm = model;
        }
        if let Ok(key) = std::env::var("ALPHA_VANTAGE_API_KEY") {
            self.alpha_vantage_api_key = Some(key);
        }
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            self.openai_api_key = Some(key);
        }
        self
    }

    /// Set the LLM backend base URL
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }

    /// Set the quick-thinking model id
    pub fn with_quick_think_llm(mut self, model: impl Into<String>) -> Self {
        self.quick_think_llm = model.into();
        self
    }

    /// Set the deep-thinking model id
    pub fn with_deep_think_llm(mut self, model: impl Into<String>) -> Self {
        self.deep_think_llm = model.into();
        self
    }

    /// Set the Alpha Vantage API key
    pub fn with_alpha_vantage_api_key(mut self, key: impl Into<String>) -> Self {
        self.alpha_vantage_api_key = Some(key.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.backend_url).map_err(|e| ConfigError::Invalid {
            field: "backend_url",
            reason: e.to_string(),
        })?;

        if self.quick_think_llm.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "quick_think_llm",
                reason: "model id is empty".to_string(),
            });
        }
        if self.deep_think_llm.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "deep_think_llm",
                reason: "model id is empty".to_string(),
            });
        }
        if self.alpha_vantage_rate_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "alpha_vantage_rate_limit",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// The Alpha Vantage key, or an error naming the missing variable
    pub fn alpha_vantage_key(&self) -> Result<&str, ConfigError> {
        self.alpha_vantage_api_key
            .as_deref()
            .ok_or(ConfigError::MissingApiKey("ALPHA_VANTAGE_API_KEY"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backend_url, "https://api.openai.com/v1");
        assert_eq!(config.quick_think_llm, "gpt-4o-mini");
        assert_eq!(config.deep_think_llm, "o4-mini");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"quick_think_llm": "gpt-4.1-mini"}"#).unwrap();
        assert_eq!(config.quick_think_llm, "gpt-4.1-mini");
        assert_eq!(config.backend_url, "https://api.openai.com/v1");
        assert_eq!(config.max_debate_rounds, 1);
    }

    #[test]
    fn test_validation_rejects_bad_url() {
        let config = Config::default().with_backend_url("not a url");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "backend_url", .. })
        ));
    }

    #[test]
    fn test_validation_rejects_empty_model() {
        let config = Config::default().with_quick_think_llm("  ");
        assert!(config.validate().is_err());

        let config = Config::default().with_deep_think_llm("");
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "deep_think_llm"),
            other => panic!("unexpected result {other:?}"),
        }
        assert!(Config::default().with_deep_think_llm("o3").validate().is_ok());
    }

    #[test]
    fn test_missing_alpha_vantage_key() {
        let config = Config {
            alpha_vantage_api_key: None,
            ..Default::default()
        };
        let err = config.alpha_vantage_key().unwrap_err();
        assert_eq!(err.to_string(), "missing API key: ALPHA_VANTAGE_API_KEY");

        let config = config.with_alpha_vantage_api_key("demo");
        assert_eq!(config.alpha_vantage_key().unwrap(), "demo");
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = Config::load_from("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }
}
