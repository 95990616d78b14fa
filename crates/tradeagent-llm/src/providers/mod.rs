//! Concrete provider implementations
//!
//! This module contains implementations of the ResponsesProvider trait for
//! OpenAI-compatible backends.

#[cfg(feature = "openai")]
pub mod openai;

#[cfg(feature = "openai")]
pub use openai::{OpenAIConfig, OpenAIProvider};
