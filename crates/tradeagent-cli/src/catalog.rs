//! Model and backend catalogs offered during setup
//!
//! Entries are `(label, id)` pairs in display order.

pub type ModelChoices = &'static [(&'static str, &'static str)];

/// Quick-thinking models per provider key
pub const SHALLOW_MODELS: &[(&str, ModelChoices)] = &[
    (
        "openai",
        &[
            ("GPT-4.1 - High quality general model", "gpt-4.1"),
            ("GPT-5-nano - Ultra-fast and ultra-cheap for trivial tasks", "gpt-5-nano"),
            ("GPT-5-mini - Fast general-purpose lightweight model", "gpt-5-mini"),
            ("GPT-4.1-nano - Ultra-lightweight model for basic operations", "gpt-4.1-nano"),
            ("GPT-4.1-mini - Compact model with good performance", "gpt-4.1-mini"),
            ("GPT-4o-mini - Fast and efficient for quick tasks", "gpt-4o-mini"),
            ("GPT-4o - Standard multimodal model", "gpt-4o"),
            ("o4-mini - Low-cost reasoning model (good default)", "o4-mini"),
        ],
    ),
    (
        "anthropic",
        &[
            ("Claude Haiku 3.5 - Fast inference and low cost", "claude-3-5-haiku-latest"),
            ("Claude Sonnet 3.5 - Strong general reasoning", "claude-3-5-sonnet-latest"),
            ("Claude Sonnet 3.7 - Hybrid reasoning & agentic behavior", "claude-3-7-sonnet-latest"),
            ("Claude Sonnet 4 - High performance standard model", "claude-sonnet-4-0"),
        ],
    ),
    (
        "google",
        &[
            ("Gemini 2.0 Flash-Lite - Lowest latency & cost", "gemini-2.0-flash-lite"),
            ("Gemini 2.0 Flash - Fast multimodal reasoning", "gemini-2.0-flash"),
            ("Gemini 2.5 Flash - Adaptive thinking & efficiency (stable)", "gemini-2.5-flash"),
            (
                "Gemini 2.5 Flash - Adaptive thinking & efficiency (preview)",
                "gemini-2.5-flash-preview",
            ),
            ("Gemini 3 Flash - Next-gen lightweight reasoning (stable)", "gemini-3-flash"),
            ("Gemini 3 Flash - Next-gen lightweight reasoning (preview)", "gemini-3-flash-preview"),
        ],
    ),
    (
        "openrouter",
        &[
            ("Meta: Llama 4 Scout - Fast open-weight model", "meta-llama/llama-4-scout"),
            ("Meta: Llama 3.3 8B Instruct", "meta-llama/llama-3.3-8b-instruct"),
            ("Meta: Llama 3.3 70B Instruct", "meta-llama/llama-3.3-70b-instruct"),
            ("Google: Gemini 2.0 Flash (exp)", "google/gemini-2.0-flash-exp"),
            ("DeepSeek R1 (reasoning)", "deepseek/deepseek-r1"),
        ],
    ),
    (
        "ollama",
        &[
            ("llama3.2 local", "llama3.2"),
            ("llama3.3 local", "llama3.3"),
            ("qwen2.5 local", "qwen2.5"),
        ],
    ),
];

/// Deep-thinking models per provider key
pub const DEEP_MODELS: &[(&str, ModelChoices)] = &[
    (
        "openai",
        &[
            ("o4-mini - Low-cost reasoning model (default)", "o4-mini"),
            ("o4 - Higher-end reasoning model", "o4"),
            ("o3-mini - Lightweight advanced reasoning", "o3-mini"),
            ("o3 - Full advanced reasoning model", "o3"),
            ("o1-preview - Legacy reasoning preview model", "o1-preview"),
            ("o1-mini - Lower-cost long-horizon reasoning", "o1-mini"),
            ("o1 - Premier long-horizon reasoning model", "o1"),
            ("o1-pro - Extended context & planning", "o1-pro"),
            ("GPT-5-mini - Strong reasoning at lower cost", "gpt-5-mini"),
            ("GPT-5 - Flagship general intelligence model", "gpt-5"),
        ],
    ),
    (
        "anthropic",
        &[
            ("Claude Haiku 3.5 - Fast inference", "claude-3-5-haiku-latest"),
            ("Claude Sonnet 3.7 - Hybrid reasoning & tools", "claude-3-7-sonnet-latest"),
            ("Claude Sonnet 4 - High reasoning accuracy", "claude-sonnet-4-0"),
            ("Claude Opus 4 - Most powerful Anthropic model", "claude-opus-4-0"),
        ],
    ),
    (
        "google",
        &[
            ("Gemini 2.5 Flash - Adaptive thinking (stable)", "gemini-2.5-flash"),
            ("Gemini 2.5 Flash - Adaptive thinking (preview)", "gemini-2.5-flash-preview"),
            ("Gemini 2.5 Pro - High-end reasoning (stable)", "gemini-2.5-pro"),
            ("Gemini 2.5 Pro - High-end reasoning (preview)", "gemini-2.5-pro-preview"),
            ("Gemini 3 Pro - Frontier reasoning & multimodal (stable)", "gemini-3-pro"),
            ("Gemini 3 Pro - Frontier reasoning & multimodal (preview)", "gemini-3-pro-preview"),
        ],
    ),
    (
        "openrouter",
        &[
            ("DeepSeek V3 - 685B MoE flagship reasoning model", "deepseek/deepseek-chat-v3"),
            ("DeepSeek R1 - Strong reasoning model", "deepseek/deepseek-r1"),
            ("Qwen2.5 72B Instruct - Strong open reasoning", "qwen/qwen2.5-72b-instruct"),
            (
                "Meta: Llama 3.3 70B Instruct - Strong general open-weight",
                "meta-llama/llama-3.3-70b-instruct",
            ),
        ],
    ),
    (
        "ollama",
        &[
            ("llama3.3 local", "llama3.3"),
            ("qwen2.5 local", "qwen2.5"),
            ("deepseek-r1 local", "deepseek-r1"),
        ],
    ),
];

/// Backend display names and base URLs
pub const BASE_URLS: &[(&str, &str)] = &[
    ("OpenAI", "https://api.openai.com/v1"),
    ("Anthropic", "https://api.anthropic.com/"),
    ("Google", "https://generativelanguage.googleapis.com/v1"),
    ("Openrouter", "https://openrouter.ai/api/v1"),
    ("Ollama", "http://localhost:11434/v1"),
];

/// Choices for `provider` after trimming and lowercasing it
pub fn models_for(catalog: &[(&str, ModelChoices)], provider: &str) -> Option<ModelChoices> {
    let key = provider.trim().to_lowercase();
    catalog
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, models)| *models)
}

/// Provider keys in catalog order
pub fn provider_keys<'a>(catalog: &[(&'a str, ModelChoices)]) -> Vec<&'a str> {
    catalog.iter().map(|(name, _)| *name).collect()
}
