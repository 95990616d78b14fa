//! Interactive run setup
//!
//! Every selection goes through a [`Prompter`] so the sequence can be driven
//! by a terminal or by a script. A prompt that is aborted, or that ends with
//! nothing chosen, becomes a [`SelectionError`].

use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::catalog::{self, BASE_URLS, DEEP_MODELS, ModelChoices, SHALLOW_MODELS};
use crate::models::{AnalystType, ResearchDepth, UserSelections};

/// Answer check for text prompts: `Err` carries the message shown to the user
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Source of answers for the setup prompts
///
/// `None` means the user aborted the prompt.
pub trait Prompter {
    /// Free text, re-asked until `validate` accepts it
    fn text(&mut self, prompt: &str, validate: Validator<'_>) -> Option<String>;

    /// One item; returns its index
    fn select(&mut self, prompt: &str, items: &[&str]) -> Option<usize>;

    /// Any number of items; returns their indices
    fn multi_select(&mut self, prompt: &str, items: &[&str]) -> Option<Vec<usize>>;
}

/// Why setup stopped early
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No ticker symbol provided. Exiting...")]
    NoTicker,

    #[error("No date provided. Exiting...")]
    NoDate,

    #[error("No analysts selected. Exiting...")]
    NoAnalysts,

    #[error("No research depth selected. Exiting...")]
    NoResearchDepth,

    #[error("Unsupported LLM provider '{provider}'. Supported: {supported}")]
    UnsupportedProvider { provider: String, supported: String },

    #[error("No shallow thinking llm engine selected. Exiting...")]
    NoShallowModel,

    #[error("No deep thinking llm engine selected. Exiting...")]
    NoDeepModel,

    #[error("No OpenAI backend selected. Exiting...")]
    NoBackend,
}

pub type Result<T> = std::result::Result<T, SelectionError>;

/// Terminal prompts rendered with dialoguer
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&mut self, prompt: &str, validate: Validator<'_>) -> Option<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|input: &String| validate(input.as_str()))
            .interact_text()
            .inspect_err(|e| debug!("Text prompt ended: {}", e))
            .ok()
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Option<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .inspect_err(|e| debug!("Select prompt ended: {}", e))
            .ok()
            .flatten()
    }

    fn multi_select(&mut self, prompt: &str, items: &[&str]) -> Option<Vec<usize>> {
        MultiSelect::with_theme(&self.theme)
            .with_prompt(format!(
                "{prompt} (Space to toggle, 'a' for all, Enter when done)"
            ))
            .items(items)
            .interact_opt()
            .inspect_err(|e| debug!("Multi-select prompt ended: {}", e))
            .ok()
            .flatten()
    }
}

fn validate_ticker(input: &str) -> std::result::Result<(), String> {
    if input.trim().is_empty() {
        Err("Please enter a valid ticker symbol.".to_string())
    } else {
        Ok(())
    }
}

/// `YYYY-MM-DD` that names a real calendar day
pub fn is_valid_date(input: &str) -> bool {
    let shape_ok = Regex::new(r"^\d{4}-\d{2}-\d{2}$")
        .is_ok_and(|re| re.is_match(input));
    shape_ok && NaiveDate::parse_from_str(input, "%Y-%m-%d").is_ok()
}

fn validate_date(input: &str) -> std::result::Result<(), String> {
    if is_valid_date(input.trim()) {
        Ok(())
    } else {
        Err("Please enter a valid date in YYYY-MM-DD format.".to_string())
    }
}

/// Ticker symbol, trimmed and uppercased
pub fn get_ticker(prompter: &mut dyn Prompter) -> Result<String> {
    let answer = prompter
        .text("Enter the ticker symbol to analyze:", &validate_ticker)
        .ok_or(SelectionError::NoTicker)?;

    let ticker = answer.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(SelectionError::NoTicker);
    }
    Ok(ticker)
}

/// Analysis date as `YYYY-MM-DD`
pub fn get_analysis_date(prompter: &mut dyn Prompter) -> Result<String> {
    let answer = prompter
        .text("Enter the analysis date (YYYY-MM-DD):", &validate_date)
        .ok_or(SelectionError::NoDate)?;

    let date = answer.trim();
    if !is_valid_date(date) {
        return Err(SelectionError::NoDate);
    }
    Ok(date.to_string())
}

/// At least one analyst, in display order
pub fn select_analysts(prompter: &mut dyn Prompter) -> Result<Vec<AnalystType>> {
    let labels: Vec<&str> = AnalystType::ALL.iter().map(|a| a.label()).collect();
    let mut picked = prompter
        .multi_select("Select Your [Analysts Team]:", &labels)
        .ok_or(SelectionError::NoAnalysts)?;
    picked.sort_unstable();
    picked.dedup();

    let analysts: Vec<AnalystType> = picked
        .into_iter()
        .filter_map(|i| AnalystType::ALL.get(i).copied())
        .collect();

    if analysts.is_empty() {
        return Err(SelectionError::NoAnalysts);
    }
    Ok(analysts)
}

pub fn select_research_depth(prompter: &mut dyn Prompter) -> Result<ResearchDepth> {
    let labels: Vec<&str> = ResearchDepth::ALL.iter().map(|d| d.label()).collect();
    prompter
        .select("Select Your [Research Depth]:", &labels)
        .and_then(|i| ResearchDepth::ALL.get(i).copied())
        .ok_or(SelectionError::NoResearchDepth)
}

fn select_model(
    prompter: &mut dyn Prompter,
    catalog: &[(&str, ModelChoices)],
    provider: &str,
    prompt: &str,
    aborted: SelectionError,
) -> Result<String> {
    let models = catalog::models_for(catalog, provider).ok_or_else(|| {
        SelectionError::UnsupportedProvider {
            provider: provider.to_string(),
            supported: catalog::provider_keys(catalog).join(", "),
        }
    })?;

    let labels: Vec<&str> = models.iter().map(|(label, _)| *label).collect();
    prompter
        .select(prompt, &labels)
        .and_then(|i| models.get(i))
        .map(|(_, id)| (*id).to_string())
        .ok_or(aborted)
}

/// Quick-thinking model id for `provider` (case and surrounding space ignored)
pub fn select_shallow_thinking_agent(
    prompter: &mut dyn Prompter,
    provider: &str,
) -> Result<String> {
    select_model(
        prompter,
        SHALLOW_MODELS,
        provider,
        "Select Your [Quick-Thinking LLM Engine]:",
        SelectionError::NoShallowModel,
    )
}

/// Deep-thinking model id for `provider` (case and surrounding space ignored)
pub fn select_deep_thinking_agent(prompter: &mut dyn Prompter, provider: &str) -> Result<String> {
    select_model(
        prompter,
        DEEP_MODELS,
        provider,
        "Select Your [Deep-Thinking LLM Engine]:",
        SelectionError::NoDeepModel,
    )
}

/// Backend display name and base URL
pub fn select_llm_provider(prompter: &mut dyn Prompter) -> Result<(String, String)> {
    let labels: Vec<&str> = BASE_URLS.iter().map(|(name, _)| *name).collect();
    prompter
        .select("Select your LLM Provider:", &labels)
        .and_then(|i| BASE_URLS.get(i))
        .map(|(name, url)| ((*name).to_string(), (*url).to_string()))
        .ok_or(SelectionError::NoBackend)
}

/// Run the whole setup sequence
pub fn collect_selections(prompter: &mut dyn Prompter) -> Result<UserSelections> {
    let ticker = get_ticker(prompter)?;
    let analysis_date = get_analysis_date(prompter)?;
    let analysts = select_analysts(prompter)?;
    let research_depth = select_research_depth(prompter)?;

    let (llm_provider, backend_url) = select_llm_provider(prompter)?;
    println!("You selected: {llm_provider}\tURL: {backend_url}");

    let shallow_thinker = select_shallow_thinking_agent(prompter, &llm_provider)?;
    let deep_thinker = select_deep_thinking_agent(prompter, &llm_provider)?;

    Ok(UserSelections {
        ticker,
        analysis_date,
        analysts,
        research_depth,
        llm_provider,
        backend_url,
        shallow_thinker,
        deep_thinker,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Debug)]
    enum Answer {
        Text(&'static str),
        Pick(usize),
        Picks(Vec<usize>),
        Abort,
    }

    /// Replays scripted answers; text answers failing validation are recorded
    /// and the next scripted answer is tried, as a terminal would re-prompt
    #[derive(Default)]
    struct ScriptedPrompter {
        answers: VecDeque<Answer>,
        rejected: Vec<String>,
        prompts: Vec<String>,
        offered: Vec<Vec<String>>,
    }

    impl ScriptedPrompter {
        fn new(answers: Vec<Answer>) -> Self {
            Self {
                answers: answers.into(),
                ..Default::default()
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn text(&mut self, prompt: &str, validate: Validator<'_>) -> Option<String> {
            self.prompts.push(prompt.to_string());
            while let Some(answer) = self.answers.pop_front() {
                match answer {
                    Answer::Text(text) => match validate(text) {
                        Ok(()) => return Some(text.to_string()),
                        Err(message) => self.rejected.push(message),
                    },
                    Answer::Abort => return None,
                    other => panic!("text prompt got {other:?}"),
                }
            }
            None
        }

        fn select(&mut self, prompt: &str, items: &[&str]) -> Option<usize> {
            self.prompts.push(prompt.to_string());
            self.offered.push(items.iter().map(ToString::to_string).collect());
            match self.answers.pop_front()? {
                Answer::Pick(i) => Some(i),
                Answer::Abort => None,
                other => panic!("select prompt got {other:?}"),
            }
        }

        fn multi_select(&mut self, prompt: &str, items: &[&str]) -> Option<Vec<usize>> {
            self.prompts.push(prompt.to_string());
            self.offered.push(items.iter().map(ToString::to_string).collect());
            match self.answers.pop_front()? {
                Answer::Picks(picks) => Some(picks),
                Answer::Abort => None,
                other => panic!("multi-select prompt got {other:?}"),
            }
        }
    }

    #[test]
    fn test_ticker_trimmed_and_uppercased() {
        let mut p = ScriptedPrompter::new(vec![Answer::Text("  aapl ")]);
        assert_eq!(get_ticker(&mut p).unwrap(), "AAPL");
    }

    #[test]
    fn test_blank_ticker_reprompts_then_aborts() {
        let mut p = ScriptedPrompter::new(vec![Answer::Text("   "), Answer::Abort]);
        assert_eq!(get_ticker(&mut p), Err(SelectionError::NoTicker));
        assert_eq!(p.rejected, vec!["Please enter a valid ticker symbol."]);
    }

    #[test]
    fn test_date_validation() {
        assert!(is_valid_date("2024-02-29"));
        assert!(!is_valid_date("2024-02-30"));
        assert!(!is_valid_date("2024-2-3"));
        assert!(!is_valid_date("20240203"));

        let mut p = ScriptedPrompter::new(vec![
            Answer::Text("2024-02-30"),
            Answer::Text("tomorrow"),
            Answer::Text(" 2024-03-01 "),
        ]);
        assert_eq!(get_analysis_date(&mut p).unwrap(), "2024-03-01");
        assert_eq!(p.rejected.len(), 2);
    }

    #[test]
    fn test_date_abort() {
        let mut p = ScriptedPrompter::new(vec![Answer::Abort]);
        assert_eq!(get_analysis_date(&mut p), Err(SelectionError::NoDate));
    }

    #[test]
    fn test_analysts_in_display_order() {
        let mut p = ScriptedPrompter::new(vec![Answer::Picks(vec![3, 0])]);
        assert_eq!(
            select_analysts(&mut p).unwrap(),
            vec![AnalystType::Market, AnalystType::Fundamentals]
        );
        assert_eq!(
            p.offered[0],
            vec![
                "Market Analyst",
                "Social Media Analyst",
                "News Analyst",
                "Fundamentals Analyst",
            ]
        );
    }

    #[test]
    fn test_empty_analyst_selection() {
        let mut p = ScriptedPrompter::new(vec![Answer::Picks(vec![])]);
        assert_eq!(select_analysts(&mut p), Err(SelectionError::NoAnalysts));

        let mut p = ScriptedPrompter::new(vec![Answer::Abort]);
        assert_eq!(select_analysts(&mut p), Err(SelectionError::NoAnalysts));
    }

    #[test]
    fn test_research_depth() {
        let mut p = ScriptedPrompter::new(vec![Answer::Pick(2)]);
        assert_eq!(select_research_depth(&mut p).unwrap(), ResearchDepth::Deep);

        let mut p = ScriptedPrompter::new(vec![Answer::Abort]);
        assert_eq!(select_research_depth(&mut p), Err(SelectionError::NoResearchDepth));
    }

    #[test]
    fn test_shallow_model_uses_normalized_provider() {
        let mut p = ScriptedPrompter::new(vec![Answer::Pick(5)]);
        let model = select_shallow_thinking_agent(&mut p, "OpenAI").unwrap();

        assert_eq!(model, "gpt-4o-mini");
        assert_eq!(p.offered[0][0], "GPT-4.1 - High quality general model");
    }

    #[test]
    fn test_unsupported_provider_lists_supported() {
        let mut p = ScriptedPrompter::new(vec![]);
        let err = select_shallow_thinking_agent(&mut p, "bogus").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Unsupported LLM provider 'bogus'. Supported: openai, anthropic, google, openrouter, ollama"
        );
        assert!(p.prompts.is_empty());
    }

    #[test]
    fn test_deep_model_abort() {
        let mut p = ScriptedPrompter::new(vec![Answer::Abort]);
        assert_eq!(
            select_deep_thinking_agent(&mut p, " anthropic "),
            Err(SelectionError::NoDeepModel)
        );
    }

    #[test]
    fn test_llm_provider() {
        let mut p = ScriptedPrompter::new(vec![Answer::Pick(4)]);
        assert_eq!(
            select_llm_provider(&mut p).unwrap(),
            ("Ollama".to_string(), "http://localhost:11434/v1".to_string())
        );

        let mut p = ScriptedPrompter::new(vec![Answer::Abort]);
        assert_eq!(select_llm_provider(&mut p), Err(SelectionError::NoBackend));
    }

    #[test]
    fn test_collect_selections() {
        let mut p = ScriptedPrompter::new(vec![
            Answer::Text("nvda"),
            Answer::Text("2024-05-08"),
            Answer::Picks(vec![1, 2]),
            Answer::Pick(1),
            Answer::Pick(1),
            Answer::Pick(0),
            Answer::Pick(3),
        ]);

        let selections = collect_selections(&mut p).unwrap();

        assert_eq!(selections.ticker, "NVDA");
        assert_eq!(selections.analysis_date, "2024-05-08");
        assert_eq!(selections.analysts, vec![AnalystType::Social, AnalystType::News]);
        assert_eq!(selections.research_depth, ResearchDepth::Medium);
        assert_eq!(selections.llm_provider, "Anthropic");
        assert_eq!(selections.backend_url, "https://api.anthropic.com/");
        assert_eq!(selections.shallow_thinker, "claude-3-5-haiku-latest");
        assert_eq!(selections.deep_thinker, "claude-opus-4-0");
    }

    #[test]
    fn test_collect_stops_at_first_abort() {
        let mut p = ScriptedPrompter::new(vec![Answer::Text("msft"), Answer::Abort]);
        assert_eq!(collect_selections(&mut p), Err(SelectionError::NoDate));
        assert_eq!(p.prompts.len(), 2);
    }
}
