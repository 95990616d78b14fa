//! Responses API request and response types
//!
//! Only the subset used for web-search prompts is modelled: a single system
//! message, plain-text output, and one web search tool descriptor.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Request body for `POST /responses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsesRequest {
    /// Model identifier
    pub model: String,

    /// Input messages
    pub input: Vec<InputMessage>,

    /// Output text options
    pub text: TextOptions,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum tokens to generate
    pub max_output_tokens: usize,

    /// Nucleus sampling
    pub top_p: f32,

    /// Whether the backend may persist the prompt
    pub store: bool,

    /// Tools the model may call
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<WebSearchTool>,
}

impl ResponsesRequest {
    /// Create a builder for responses requests
    pub fn builder(model: impl Into<String>) -> ResponsesRequestBuilder {
        ResponsesRequestBuilder::new(model)
    }

    /// Copy of this request with its tools replaced by a single descriptor
    pub fn with_tool(&self, tool: WebSearchTool) -> Self {
        Self {
            tools: vec![tool],
            ..self.clone()
        }
    }
}

/// Builder for ResponsesRequest
pub struct ResponsesRequestBuilder {
    model: String,
    input: Vec<InputMessage>,
    temperature: f32,
    max_output_tokens: usize,
    top_p: f32,
    store: bool,
    tools: Vec<WebSearchTool>,
}

impl ResponsesRequestBuilder {
    /// Create a new builder
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            input: Vec::new(),
            temperature: 1.0,
            max_output_tokens: 4096,
            top_p: 1.0,
            store: false,
            tools: Vec::new(),
        }
    }

    /// Add a system message carrying the prompt text
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.input.push(InputMessage::system(prompt));
        self
    }

    /// Set the maximum output tokens
    pub fn max_output_tokens(mut self, max_output_tokens: usize) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Add a tool descriptor
    pub fn tool(mut self, tool: WebSearchTool) -> Self {
        self.tools.push(tool);
        self
    }

    /// Build the request
    pub fn build(self) -> ResponsesRequest {
        ResponsesRequest {
            model: self.model,
            input: self.input,
            text: TextOptions::plain(),
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
            top_p: self.top_p,
            store: self.store,
            tools: self.tools,
        }
    }
}

/// One input message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMessage {
    pub role: String,
    pub content: Vec<InputContent>,
}

impl InputMessage {
    /// System message with a single text part
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: vec![InputContent::InputText { text: text.into() }],
        }
    }
}

/// Content part of an input message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputContent {
    InputText { text: String },
}

/// `text` options of the request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOptions {
    pub format: TextFormat,
}

impl TextOptions {
    /// Plain text output
    pub fn plain() -> Self {
        Self {
            format: TextFormat {
                format_type: "text".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

/// Name under which the backend exposes web search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebSearchToolType {
    /// Current tool name
    WebSearch,
    /// Name used by older backends
    WebSearchPreview,
}

impl WebSearchToolType {
    /// Wire name of the tool
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WebSearch => "web_search",
            Self::WebSearchPreview => "web_search_preview",
        }
    }
}

/// How much retrieved context the backend feeds the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchContextSize {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLocation {
    #[serde(rename = "type")]
    pub location_type: String,
}

/// Web search tool descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSearchTool {
    #[serde(rename = "type")]
    pub tool_type: WebSearchToolType,
    pub user_location: UserLocation,
    pub search_context_size: SearchContextSize,
}

impl WebSearchTool {
    /// Descriptor with approximate user location and low context size
    pub fn new(tool_type: WebSearchToolType) -> Self {
        Self {
            tool_type,
            user_location: UserLocation {
                location_type: "approximate".to_string(),
            },
            search_context_size: SearchContextSize::Low,
        }
    }
}

// ============================================================================
// Response decoding
// ============================================================================

/// One entry of the response `output` array
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputItem {
    pub content: Vec<OutputContent>,
}

impl OutputItem {
    /// Read an item, keeping only the content entries that decode
    pub fn from_value(item: &Value) -> Self {
        let Some(entries) = item.get("content").and_then(Value::as_array) else {
            return Self::default();
        };

        let content = entries
            .iter()
            .filter_map(|entry| match OutputContent::deserialize(entry) {
                Ok(content) => Some(content),
                Err(e) => {
                    debug!("Skipping unreadable output content: {}", e);
                    None
                }
            })
            .collect();
        Self { content }
    }
}

/// Content entry of an output item
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputContent {
    OutputText {
        #[serde(default)]
        text: Option<String>,
    },
    Text {
        #[serde(default)]
        text: Option<String>,
    },
    #[serde(other)]
    Other,
}

impl OutputContent {
    fn text(&self) -> Option<&str> {
        match self {
            Self::OutputText { text } | Self::Text { text } => text.as_deref(),
            Self::Other => None,
        }
    }
}

/// The shapes a response body is read as
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// Pre-aggregated `output_text` field
    Aggregated(String),
    /// Nested `output[].content[]` entries
    Structured(Vec<OutputItem>),
    /// Nothing usable
    Empty,
}

impl ResponseShape {
    /// Classify a response body
    pub fn decode(body: &Value) -> Self {
        if let Some(text) = body.get("output_text").and_then(Value::as_str) {
            if !text.trim().is_empty() {
                return Self::Aggregated(text.to_string());
            }
        }

        match body.get("output") {
            Some(Value::Array(items)) => {
                Self::Structured(items.iter().map(OutputItem::from_value).collect())
            }
            _ => Self::Empty,
        }
    }

    /// Plain text carried by this shape
    pub fn into_text(self) -> String {
        match self {
            Self::Aggregated(text) => text,
            Self::Structured(items) => items
                .iter()
                .flat_map(|item| &item.content)
                .filter_map(OutputContent::text)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string(),
            Self::Empty => String::new(),
        }
    }
}
