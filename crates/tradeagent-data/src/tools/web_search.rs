//! Web-search research through an LLM backend

use std::sync::Arc;
use tracing::instrument;
use tradeagent_llm::providers::{OpenAIConfig, OpenAIProvider};
use tradeagent_llm::{ResponsesProvider, search_text};
use tradeagent_utils::Config;

use crate::error::Result;
use crate::prompts::SearchPrompts;

/// Answers research prompts with a web-search-enabled model
///
/// Each call renders one prompt, sends it with `quick_think_llm`, and returns
/// the answer text (empty when the response carries none).
pub struct WebResearchTool {
    provider: Arc<dyn ResponsesProvider>,
    model: String,
    prompts: SearchPrompts,
}

impl WebResearchTool {
    /// Create a research tool over any responses backend
    pub fn new(provider: Arc<dyn ResponsesProvider>, model: impl Into<String>) -> Result<Self> {
        Ok(Self {
            provider,
            model: model.into(),
            prompts: SearchPrompts::new()?,
        })
    }

    /// OpenAI-compatible backend at `config.backend_url`, model `config.quick_think_llm`
    pub fn from_config(config: &Config) -> Result<Self> {
        let openai = OpenAIConfig::new(config.openai_api_key.clone().unwrap_or_default())
            .with_api_base(config.backend_url.clone())
            .with_timeout(config.request_timeout_secs);
        let provider = OpenAIProvider::with_config(openai)?;

        Self::new(Arc::new(provider), config.quick_think_llm.clone())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// News and social discussion about `query` between two dates
    #[instrument(skip(self), fields(model = %self.model))]
    pub async fn stock_news(
        &self,
        query: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<String> {
        let prompt = self.prompts.stock_news(query, start_date, end_date)?;
        self.search(&prompt).await
    }

    /// Global macro news for the days leading up to `curr_date`
    #[instrument(skip(self), fields(model = %self.model))]
    pub async fn global_news(
        &self,
        curr_date: &str,
        look_back_days: u32,
        limit: u32,
    ) -> Result<String> {
        let prompt = self.prompts.global_news(curr_date, look_back_days, limit)?;
        self.search(&prompt).await
    }

    /// Fundamentals discussion with a valuation table
    #[instrument(skip(self), fields(model = %self.model))]
    pub async fn fundamentals(&self, ticker: &str, curr_date: &str) -> Result<String> {
        let prompt = self.prompts.fundamentals(ticker, curr_date)?;
        self.search(&prompt).await
    }

    async fn search(&self, prompt: &str) -> Result<String> {
        Ok(search_text(self.provider.as_ref(), &self.model, prompt).await?)
    }
}
