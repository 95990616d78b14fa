//! Prompt templates for web-search research
//!
//! Templates use MiniJinja syntax (`{{ variable }}`) and are compiled once
//! when [`SearchPrompts`] is created.

use crate::error::Result;
use minijinja::{Environment, context};

const STOCK_NEWS: &str = "stock_news";
const GLOBAL_NEWS: &str = "global_news";
const FUNDAMENTALS: &str = "fundamentals";

const STOCK_NEWS_TEMPLATE: &str = "Search the web for relevant news and social discussion \
    about {{ query }} from {{ start_date }} to {{ end_date }}. \
    Only include items posted in that window.";

const GLOBAL_NEWS_TEMPLATE: &str = "Search for global macroeconomics news from \
    {{ look_back_days }} days before {{ curr_date }} to {{ curr_date }} \
    that would be informative for trading purposes. \
    Only include items posted in that window. Limit to {{ limit }} items.";

const FUNDAMENTALS_TEMPLATE: &str = "Search for fundamentals discussions on {{ ticker }} \
    from one month before {{ curr_date }} through the month of {{ curr_date }}. \
    Only include items posted in that window. \
    Summarize key valuation metrics (P/E, P/S, cash flow, etc.) in a table.";

/// Days of history requested for global news when the caller does not say
pub const DEFAULT_LOOK_BACK_DAYS: u32 = 7;
/// Items requested for global news when the caller does not say
pub const DEFAULT_GLOBAL_NEWS_LIMIT: u32 = 5;

/// Compiled research prompts
#[derive(Debug, Clone)]
pub struct SearchPrompts {
    env: Environment<'static>,
}

impl SearchPrompts {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(STOCK_NEWS, STOCK_NEWS_TEMPLATE)?;
        env.add_template(GLOBAL_NEWS, GLOBAL_NEWS_TEMPLATE)?;
        env.add_template(FUNDAMENTALS, FUNDAMENTALS_TEMPLATE)?;
        Ok(Self { env })
    }

    /// News and social discussion about `query` within a date window
    pub fn stock_news(&self, query: &str, start_date: &str, end_date: &str) -> Result<String> {
        Ok(self
            .env
            .get_template(STOCK_NEWS)?
            .render(context! { query, start_date, end_date })?)
    }

    /// Macro news for the `look_back_days` leading up to `curr_date`
    pub fn global_news(&self, curr_date: &str, look_back_days: u32, limit: u32) -> Result<String> {
        Ok(self
            .env
            .get_template(GLOBAL_NEWS)?
            .render(context! { curr_date, look_back_days, limit })?)
    }

    /// Fundamentals discussion for `ticker` around `curr_date`
    pub fn fundamentals(&self, ticker: &str, curr_date: &str) -> Result<String> {
        Ok(self
            .env
            .get_template(FUNDAMENTALS)?
            .render(context! { ticker, curr_date })?)
    }
}
