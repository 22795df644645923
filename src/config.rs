//! Service configuration
//!
//! Read once from the environment at startup and shared with the MCP
//! service.

use serde::Serialize;
use thiserror::Error;

use crate::nutrition::WeightParsing;

/// Environment variable selecting the weight parsing mode
pub const WEIGHT_PARSING_VAR: &str = "SPORK_WEIGHT_PARSING";
/// Environment variable holding the default log directive
pub const LOG_VAR: &str = "SPORK_LOG";

const DEFAULT_LOG_DIRECTIVE: &str = "spork=info";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid SPORK_WEIGHT_PARSING value '{0}' (expected 'strict' or 'extended')")]
    InvalidWeightParsing(String),
}

/// Runtime configuration
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// How ingredient weights are read during validation
    pub weight_parsing: WeightParsing,
    /// Default tracing directive, used when RUST_LOG is unset
    pub log_directive: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weight_parsing: WeightParsing::default(),
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(WEIGHT_PARSING_VAR).filter(|v| !v.trim().is_empty()) {
            config.weight_parsing = WeightParsing::from_str(&raw)
                .ok_or_else(|| ConfigError::InvalidWeightParsing(raw.clone()))?;
        }

        if let Some(directive) = lookup(LOG_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_directive = directive.trim().to_string();
        }

        Ok(config)
    }
}
