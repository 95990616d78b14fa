//! LLM provider trait definition

use crate::{ResponsesRequest, Result};
use async_trait::async_trait;

/// Trait for backends that serve the Responses API
///
/// Implementations send one request and hand back the decoded JSON body
/// untouched; turning it into text is left to
/// [`extract_output_text`](crate::extract_output_text) so that an oddly shaped
/// body degrades to an empty answer instead of an error.
#[async_trait]
pub trait ResponsesProvider: Send + Sync {
    /// Submit a request and return the raw response body
    async fn create_response(&self, request: &ResponsesRequest) -> Result<serde_json::Value>;

    /// Get the provider name (e.g., "openai")
    fn name(&self) -> &str;
}
