/*!
 * Tests for application configuration functionality
 */

use std::path::PathBuf;
use mdtranslate::app_config::{Config, LogLevel};
use mdtranslate::errors::AppError;
use mdtranslate::translation::TranslatorSettings;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.model, "claude-3-5-sonnet-20240620");
    assert_eq!(config.max_output_tokens, 4096);
    assert_eq!(config.max_iterations, 10);
    assert_eq!(config.target_language, "japanese");
    assert_eq!(config.source_dir, PathBuf::from("./"));
    assert_eq!(config.output_dir(), PathBuf::from("./japanese"));
    assert_eq!(config.endpoint, "https://api.anthropic.com");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.api_key.is_empty());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    // A missing key is left for the endpoint to report
    assert!(config.validate().is_ok());

    config.max_iterations = 0;
    assert!(matches!(config.validate(), Err(AppError::Config(_))));
    config.max_iterations = 10;

    config.max_output_tokens = 0;
    assert!(matches!(config.validate(), Err(AppError::Config(_))));
    config.max_output_tokens = 4096;

    config.target_language = "  ".to_string();
    assert!(matches!(config.validate(), Err(AppError::Config(_))));
    config.target_language = "german".to_string();

    assert!(config.validate().is_ok());
}

/// Test that an explicit output directory wins over the language default
#[test]
fn test_output_dir_withExplicitDir_shouldUseIt() {
    let config = Config {
        output_dir: Some(PathBuf::from("out/de")),
        target_language: "german".to_string(),
        ..Config::default()
    };
    assert_eq!(config.output_dir(), PathBuf::from("out/de"));
}

/// Test deserializing a partial JSON config fills in defaults
#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() {
    let config: Config = serde_json::from_str(r#"{"target_language": "korean", "log_level": "debug"}"#).unwrap();

    assert_eq!(config.target_language, "korean");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.max_iterations, 10);
    assert_eq!(config.output_dir(), PathBuf::from("./korean"));
}

/// Test that translator settings are taken from the config
#[test]
fn test_translator_settings_fromConfig_shouldCopyLimits() {
    let config = Config {
        model: "claude-test".to_string(),
        max_output_tokens: 512,
        max_iterations: 3,
        ..Config::default()
    };
    let settings = TranslatorSettings::from(&config);

    assert_eq!(settings.model, "claude-test");
    assert_eq!(settings.max_output_tokens, 512);
    assert_eq!(settings.max_iterations, 3);
}

/// Test log level mapping
#[test]
fn test_log_level_toLevelFilter_shouldMatch() {
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
