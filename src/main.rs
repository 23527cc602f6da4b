// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use mdtranslate::app_config::{self, Config};
use mdtranslate::providers::anthropic::Anthropic;
use mdtranslate::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// mdtranslate - translate a directory of Markdown documents with Claude
///
/// Every setting is read from the environment; each flag mirrors the
/// variable of the same name.
#[derive(Parser, Debug)]
#[command(name = "mdtranslate")]
#[command(version)]
#[command(about = "Translate Markdown documents with the Anthropic API")]
#[command(long_about = "Translates every .md file in ORIGINAL_DIR into TARGET_LANGUAGE and writes
the results to ./<TARGET_LANGUAGE>/ (or OUTPUT_DIR). Files whose recorded
fingerprint matches the current source are skipped.

EXAMPLES:
    ANTHROPIC_API_KEY=sk-... mdtranslate
    TARGET_LANGUAGE=german ORIGINAL_DIR=docs mdtranslate
    MAX_OUTPUT_TOKEN=1024 MAX_ITERATIONS=20 mdtranslate")]
struct CommandLineOptions {
    /// Model name to use for translation
    #[arg(long, env = "ANTHROPIC_MODEL_NAME", default_value = app_config::DEFAULT_MODEL)]
    model: String,

    /// Maximum output tokens per request
    #[arg(long, env = "MAX_OUTPUT_TOKEN", default_value_t = app_config::DEFAULT_MAX_OUTPUT_TOKENS)]
    max_output_token: u32,

    /// Maximum requests per document
    #[arg(long, env = "MAX_ITERATIONS", default_value_t = app_config::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Target language name (e.g., 'japanese', 'german')
    #[arg(long, env = "TARGET_LANGUAGE", default_value = app_config::DEFAULT_TARGET_LANGUAGE)]
    target_language: String,

    /// Anthropic API key
    #[arg(long, env = "ANTHROPIC_API_KEY", default_value = "", hide_env_values = true)]
    anthropic_api_key: String,

    /// Directory containing the Markdown files
    #[arg(long, env = "ORIGINAL_DIR", default_value = app_config::DEFAULT_SOURCE_DIR)]
    original_dir: PathBuf,

    /// Directory for translated files (defaults to ./<TARGET_LANGUAGE>)
    #[arg(long, env = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Anthropic API endpoint
    #[arg(long, env = "ANTHROPIC_ENDPOINT", default_value = app_config::DEFAULT_ENDPOINT)]
    anthropic_endpoint: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = app_config::DEFAULT_TIMEOUT_SECS)]
    request_timeout_secs: u64,

    /// Set logging level
    #[arg(long, env = "LOG_LEVEL", value_enum, default_value = "info")]
    log_level: CliLogLevel,
}

impl From<CommandLineOptions> for Config {
    fn from(options: CommandLineOptions) -> Self {
        Config {
            model: options.model,
            max_output_tokens: options.max_output_token,
            max_iterations: options.max_iterations,
            target_language: options.target_language,
            api_key: options.anthropic_api_key,
            source_dir: options.original_dir,
            output_dir: options.output_dir,
            endpoint: options.anthropic_endpoint,
            timeout_secs: options.request_timeout_secs,
            log_level: options.log_level.into(),
        }
    }
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let options = CommandLineOptions::parse();
    let config = Config::from(options);

    CustomLogger::init(config.log_level.to_level_filter())?;

    config.validate()?;

    let provider = Anthropic::new(config.api_key.clone(), config.endpoint.clone(), config.timeout_secs);
    let controller = Controller::with_config(config, provider);
    let summary = controller.run().await?;

    if summary.incomplete > 0 {
        warn!(
            "{} file(s) stopped before the closing marker; delete them from the output directory and rerun with a higher MAX_ITERATIONS",
            summary.incomplete
        );
    }

    Ok(())
}
