//! Web-search-augmented responses
//!
//! Backends disagree on the name of the web search tool. A request is sent
//! with `web_search` first; if that fails for any reason it is re-sent once
//! with `web_search_preview`, and the second outcome is final.

use crate::{
    ResponseShape, ResponsesProvider, ResponsesRequest, Result, WebSearchTool, WebSearchToolType,
};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Output budget used by the search adapters
pub const DEFAULT_MAX_OUTPUT_TOKENS: usize = 4096;

/// Send `prompt` as a system message with web search enabled
#[instrument(skip(provider, prompt), fields(provider = provider.name()))]
pub async fn create_with_web_search(
    provider: &dyn ResponsesProvider,
    model: &str,
    prompt: &str,
    max_output_tokens: usize,
) -> Result<Value> {
    let base = ResponsesRequest::builder(model)
        .system_prompt(prompt)
        .max_output_tokens(max_output_tokens)
        .build();

    let request = base.with_tool(WebSearchTool::new(WebSearchToolType::WebSearch));
    match provider.create_response(&request).await {
        Ok(body) => Ok(body),
        Err(e) => {
            warn!(
                "{} tool rejected ({}), retrying with {}",
                WebSearchToolType::WebSearch.as_str(),
                e,
                WebSearchToolType::WebSearchPreview.as_str()
            );
            let legacy = base.with_tool(WebSearchTool::new(WebSearchToolType::WebSearchPreview));
            provider.create_response(&legacy).await
        }
    }
}

/// Best-effort plain text of a response body; unreadable bodies give `""`
pub fn extract_output_text(body: &Value) -> String {
    let text = ResponseShape::decode(body).into_text();
    if text.is_empty() {
        debug!("Response carried no output text");
    }
    text
}

/// Run a web search prompt and return the answer text
pub async fn search_text(
    provider: &dyn ResponsesProvider,
    model: &str,
    prompt: &str,
) -> Result<String> {
    let body = create_with_web_search(provider, model, prompt, DEFAULT_MAX_OUTPUT_TOKENS).await?;
    Ok(extract_output_text(&body))
}
