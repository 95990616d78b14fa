//! Values collected during run setup

use serde::{Deserialize, Serialize};

/// Analyst roles a run can include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalystType {
    Market,
    Social,
    News,
    Fundamentals,
}

impl AnalystType {
    /// Display order used by the analyst picker
    pub const ALL: [AnalystType; 4] = [
        AnalystType::Market,
        AnalystType::Social,
        AnalystType::News,
        AnalystType::Fundamentals,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Market => "Market Analyst",
            Self::Social => "Social Media Analyst",
            Self::News => "News Analyst",
            Self::Fundamentals => "Fundamentals Analyst",
        }
    }
}

/// How many debate and discussion rounds a run performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ResearchDepth {
    Shallow = 1,
    Medium = 3,
    Deep = 5,
}

impl ResearchDepth {
    pub const ALL: [ResearchDepth; 3] = [
        ResearchDepth::Shallow,
        ResearchDepth::Medium,
        ResearchDepth::Deep,
    ];

    /// Number of rounds
    pub fn rounds(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Shallow => "Shallow - Quick research, few debate and strategy discussion rounds",
            Self::Medium => {
                "Medium - Middle ground, moderate debate rounds and strategy discussion"
            }
            Self::Deep => "Deep - Comprehensive research, in depth debate and strategy discussion",
        }
    }
}

impl From<ResearchDepth> for u8 {
    fn from(depth: ResearchDepth) -> Self {
        depth.rounds()
    }
}

impl TryFrom<u8> for ResearchDepth {
    type Error = String;

    fn try_from(rounds: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|d| d.rounds() == rounds)
            .ok_or_else(|| format!("unsupported research depth {rounds}"))
    }
}

/// Everything the interactive setup collects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSelections {
    pub ticker: String,
    pub analysis_date: String,
    pub analysts: Vec<AnalystType>,
    pub research_depth: ResearchDepth,
    pub llm_provider: String,
    pub backend_url: String,
    pub shallow_thinker: String,
    pub deep_thinker: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_research_depth_rounds() {
        assert_eq!(ResearchDepth::Shallow.rounds(), 1);
        assert_eq!(ResearchDepth::Medium.rounds(), 3);
        assert_eq!(ResearchDepth::Deep.rounds(), 5);
        assert!(ResearchDepth::try_from(2).is_err());
    }

    #[test]
    fn test_selections_serialize() {
        let selections = UserSelections {
            ticker: "NVDA".to_string(),
            analysis_date: "2024-05-08".to_string(),
            analysts: vec![AnalystType::Market, AnalystType::Fundamentals],
            research_depth: ResearchDepth::Medium,
            llm_provider: "OpenAI".to_string(),
            backend_url: "https://api.openai.com/v1".to_string(),
            shallow_thinker: "gpt-4o-mini".to_string(),
            deep_thinker: "o4-mini".to_string(),
        };

        let value = serde_json::to_value(&selections).unwrap();
        assert_eq!(value["analysts"], serde_json::json!(["market", "fundamentals"]));
        assert_eq!(value["research_depth"], 3);

        let back: UserSelections = serde_json::from_value(value).unwrap();
        assert_eq!(back, selections);
    }
}
