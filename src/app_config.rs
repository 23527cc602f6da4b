use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::AppError;

// Application configuration module
// Settings are built once at startup and handed to the controller and translator.

/// Default model snapshot
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20240620";

/// Default output token budget per request
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 4096;

/// Default number of completion requests per document
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Default target language display name
pub const DEFAULT_TARGET_LANGUAGE: &str = "japanese";

/// Default directory scanned for Markdown files
pub const DEFAULT_SOURCE_DIR: &str = "./";

/// Default Anthropic API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum output tokens per completion request
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Maximum completion requests for a single document
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Target language display name (e.g., "japanese")
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// API key for the completion endpoint
    #[serde(default)]
    pub api_key: String,

    /// Directory containing the source Markdown files
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Directory receiving translations; defaults to `./<target_language>`
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Service endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the `log` crate's filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_output_tokens() -> u32 {
    DEFAULT_MAX_OUTPUT_TOKENS
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_target_language() -> String {
    DEFAULT_TARGET_LANGUAGE.to_string()
}

fn default_source_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_DIR)
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Validate the configuration for consistency and required values
    ///
    /// A missing API key is not rejected here; the endpoint reports it on the
    /// first request.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.target_language.trim().is_empty() {
            return Err(AppError::Config("target language must not be empty".to_string()));
        }

        if self.max_output_tokens == 0 {
            return Err(AppError::Config("max output tokens must be greater than zero".to_string()));
        }

        if self.max_iterations == 0 {
            return Err(AppError::Config("max iterations must be greater than zero".to_string()));
        }

        if self.model.trim().is_empty() {
            return Err(AppError::Config("model name must not be empty".to_string()));
        }

        if self.api_key.is_empty() {
            warn!("No API key configured; requests to {} will likely be rejected", self.endpoint);
        }

        Ok(())
    }

    /// Directory where translated files are written
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(".").join(&self.target_language))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            model: default_model(),
            max_output_tokens: default_max_output_tokens(),
            max_iterations: default_max_iterations(),
            target_language: default_target_language(),
            api_key: String::new(),
            source_dir: default_source_dir(),
            output_dir: None,
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            log_level: LogLevel::default(),
        }
    }
}
