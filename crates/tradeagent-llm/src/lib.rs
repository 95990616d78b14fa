//! LLM web-search layer for tradeagent-rs
//!
//! This crate provides the pieces needed to ask an LLM backend for a
//! web-search-augmented answer:
//!
//! - Request/response types for the Responses API
//! - The [`ResponsesProvider`] trait implemented by transports
//! - [`web_search`]: the tool-descriptor fallback and plain-text extraction
//! - Concrete provider implementations (behind feature flags)

pub mod error;
pub mod provider;
pub mod responses;
pub mod web_search;

// Re-export main types
pub use error::{LLMError, Result};
pub use provider::ResponsesProvider;
pub use responses::{
    InputContent, InputMessage, OutputContent, OutputItem, ResponseShape, ResponsesRequest,
    SearchContextSize, WebSearchTool, WebSearchToolType,
};
pub use web_search::{create_with_web_search, extract_output_text, search_text};

// Provider implementations (feature-gated)
#[cfg(feature = "openai")]
pub mod providers;
