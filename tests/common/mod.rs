/*!
 * Common test utilities for the mdtranslate test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use mdtranslate::translation::TranslatorSettings;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Translator settings with a small budget for tests
pub fn test_settings(max_iterations: usize) -> TranslatorSettings {
    TranslatorSettings {
        model: "claude-test".to_string(),
        max_output_tokens: 128,
        max_iterations,
    }
}

/// Wrap text in both document markers
pub fn complete_response(text: &str) -> String {
    format!("<translated_document>\n{}\n</translated_document>", text)
}

/// Route test logs through env_logger; safe to call more than once
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
