//! Shared utilities for tradeagent-rs
//!
//! This crate provides common functionality used across the tradeagent-rs workspace:
//! logging setup and the runtime configuration consumed by the data adapters
//! and the interactive CLI.

pub mod config;
pub mod logging;

pub use config::{Config, ConfigError};
pub use logging::init_tracing;
