//! Vendor adapters that turn raw responses into compact markdown

pub mod fundamental;
pub mod insider;
pub mod news;
pub mod web_search;

pub use fundamental::{FundamentalDataTool, StatementKind};
pub use insider::InsiderTransactionsTool;
pub use news::NewsSentimentTool;
pub use web_search::WebResearchTool;

use serde_json::Value;
use tracing::warn;

/// Summarize a raw vendor body, or hand it back untouched
///
/// Non-JSON bodies and payloads the summarizer cannot use (it returns an
/// empty string) both yield `raw` unchanged.
pub(crate) fn summarize_or_raw<F>(function: &str, raw: String, summarize: F) -> String
where
    F: FnOnce(&Value) -> String,
{
    let payload = match serde_json::from_str::<Value>(&raw) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("{} response is not JSON ({}), returning raw text", function, e);
            return raw;
        }
    };

    let summary = summarize(&payload);
    if summary.is_empty() {
        warn!("{} response has no usable content, returning raw text", function);
        raw
    } else {
        summary
    }
}
