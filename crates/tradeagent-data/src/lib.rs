//! Market-data and research adapters
//!
//! Each adapter fetches one kind of information and returns a markdown
//! string ready to hand to an LLM:
//!
//! - Company overview and financial statements (Alpha Vantage)
//! - News with per-ticker sentiment (Alpha Vantage)
//! - Insider transactions (Alpha Vantage, raw)
//! - Web-search research through a Responses API backend
//!
//! Vendor payloads that cannot be summarized are returned as raw text rather
//! than as errors. Only failures to obtain a payload (HTTP, rate limits,
//! missing keys, bad dates) surface as [`DataError`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tradeagent_data::{AlphaVantageClient, FundamentalDataTool};
//! use tradeagent_utils::Config;
//!
//! #[tokio::main]
//! async fn main() -> tradeagent_data::Result<()> {
//!     let config = Config::from_env();
//!     let client = AlphaVantageClient::from_config(&config)?;
//!     let tool = FundamentalDataTool::new(Arc::new(client));
//!
//!     println!("{}", tool.overview("IBM").await?);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod markdown;
pub mod prompts;
pub mod tools;

pub use api::{AlphaVantageClient, VendorFetch, VendorParams, format_datetime_for_api};
pub use error::{DataError, Result};
pub use prompts::{DEFAULT_GLOBAL_NEWS_LIMIT, DEFAULT_LOOK_BACK_DAYS, SearchPrompts};
pub use tools::{
    FundamentalDataTool, InsiderTransactionsTool, NewsSentimentTool, StatementKind,
    WebResearchTool,
};
