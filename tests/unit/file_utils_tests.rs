/*!
 * Tests for file utility functions
 */

use std::path::Path;
use anyhow::Result;
use capclip::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    // Create a temporary test file
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(&temp_dir.path().to_path_buf(), "test_file_exists.tmp", "test content")?;

    // Test that file_exists works correctly
    assert!(FileManager::file_exists(test_file.to_str().unwrap()));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that file_exists returns false for directories
#[test]
fn test_file_exists_withDirectory_shouldReturnFalse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    assert!(!FileManager::file_exists(temp_dir.path()));
    Ok(())
}

/// Test that ensure_dir creates missing directories
#[test]
fn test_ensure_dir_withMissingPath_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b").join("c");

    FileManager::ensure_dir(&nested)?;

    assert!(nested.is_dir());

    // A second call on the existing directory is a no-op
    FileManager::ensure_dir(&nested)?;

    Ok(())
}

/// Test that generate_output_path creates the correct path
#[test]
fn test_generate_output_path_withValidInputs_shouldCreateCorrectPath() {
    let snapshot_file = Path::new("/tmp/input/panel.json");
    let output_dir = Path::new("/tmp/output");

    let output_path = FileManager::generate_output_path(snapshot_file, output_dir);

    assert_eq!(output_path, Path::new("/tmp/output/panel.srt"));
}

/// Test the read and write round trip
#[test]
fn test_write_and_read_withValidContent_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file_path = temp_dir.path().join("nested").join("content.srt");

    FileManager::write_to_file(&file_path, "some srt content")?;
    let content = FileManager::read_to_string(&file_path)?;

    assert_eq!(content, "some srt content");

    Ok(())
}

/// Test that read_to_string fails on a missing file
#[test]
fn test_read_to_string_withMissingFile_shouldFail() {
    assert!(FileManager::read_to_string("no_such_file_12345.json").is_err());
}
