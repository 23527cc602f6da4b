/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::fs;
use std::path::Path;
use mdtranslate::file_utils::{FileManager, SourceDocument};
use mdtranslate::fingerprint;
use crate::common;

/// Test that find_files only returns top-level markdown files, sorted
#[test]
fn test_find_files_withMixedDirectory_shouldReturnTopLevelMarkdownOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_test_file(dir, "b.md", "b")?;
    common::create_test_file(dir, "a.md", "a")?;
    common::create_test_file(dir, "notes.txt", "x")?;
    common::create_test_file(dir, "README.markdown", "x")?;
    fs::create_dir(dir.join("nested"))?;
    common::create_test_file(&dir.join("nested"), "deep.md", "x")?;
    fs::create_dir(dir.join("folder.md"))?;

    let files = FileManager::find_files(dir, "md")?;
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["a.md", "b.md"]);
    Ok(())
}

/// Test that output_path keeps the file name
#[test]
fn test_output_path_withValidInputs_shouldKeepFileName() {
    let output_path = FileManager::output_path(Path::new("/docs/guide.md"), Path::new("./japanese"));
    assert_eq!(output_path, Path::new("./japanese/guide.md"));
}

/// Test that read_optional distinguishes missing files
#[test]
fn test_read_optional_withMissingAndPresentFiles_shouldReturnOption() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "present.md", "content")?;

    assert_eq!(FileManager::read_optional(&path)?, Some("content".to_string()));
    assert_eq!(FileManager::read_optional(temp_dir.path().join("absent.md"))?, None);
    Ok(())
}

/// Test that write_to_file creates missing parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("german").join("doc.md");

    FileManager::write_to_file(&target, "hallo")?;

    assert!(FileManager::file_exists(&target));
    assert_eq!(fs::read_to_string(&target)?, "hallo");
    Ok(())
}

/// Test reading a source document
#[test]
fn test_source_document_read_shouldCaptureNameAndFingerprint() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "intro.md", "# Intro")?;

    let document = SourceDocument::read(&path)?;

    assert_eq!(document.name, "intro.md");
    assert_eq!(document.content, "# Intro");
    assert_eq!(document.fingerprint(), fingerprint::compute("# Intro"));
    Ok(())
}
