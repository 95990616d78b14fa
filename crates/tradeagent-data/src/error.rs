//! Error types for market-data operations

use thiserror::Error;

/// Market-data specific errors
///
/// Malformed vendor payloads are not errors: adapters hand the raw text back
/// instead. These variants cover failures to obtain a payload at all.
#[derive(Debug, Error)]
pub enum DataError {
    /// API request failed
    #[error("API error: {0}")]
    ApiError(String),

    /// Rate limit exceeded for API
    #[error("Rate limit exceeded for {provider}: {message}")]
    RateLimitExceeded { provider: String, message: String },

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Date argument the vendor cannot accept
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] tradeagent_utils::ConfigError),

    /// LLM backend error
    #[error("LLM error: {0}")]
    LlmError(#[from] tradeagent_llm::LLMError),

    /// Prompt template error
    #[error("Prompt template error: {0}")]
    TemplateError(#[from] minijinja::Error),
}

/// Result type alias for market-data operations
pub type Result<T> = std::result::Result<T, DataError>;
