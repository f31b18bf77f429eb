/*!
 * Tests for file and directory utilities
 */

use std::fs;
use uiport::file_utils::{FileManager, OutputLayout};
use crate::common;

#[test]
fn test_writeToFile_missingParents_shouldCreateThem() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("reports").join("nested").join("out.html");

    FileManager::write_to_file(&path, "<html></html>").unwrap();

    assert!(FileManager::file_exists(&path));
    assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
}

#[test]
fn test_writeToFile_existingFile_shouldOverwrite() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(temp_dir.path(), "x.zig", "old").unwrap();

    FileManager::write_to_file(&path, "new").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn test_ensureDir_shouldBeIdempotent() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().join("screenshots").join("hello_world");

    FileManager::ensure_dir(&dir).unwrap();
    FileManager::ensure_dir(&dir).unwrap();

    assert!(FileManager::dir_exists(&dir));
    assert!(!FileManager::file_exists(&dir));
}

#[test]
fn test_copyFile_existingSource_shouldCopyIntoNewDirectory() {
    let temp_dir = common::create_temp_dir().unwrap();
    let source = common::create_test_file(temp_dir.path(), "font.ttf", "glyphs").unwrap();
    let target = temp_dir.path().join("assets").join("font.ttf");

    FileManager::copy_file(&source, &target).unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "glyphs");
}

#[test]
fn test_copyFile_missingSource_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let target = temp_dir.path().join("copy.ttf");
    let result = FileManager::copy_file(temp_dir.path().join("absent.ttf"), &target);

    assert!(result.is_err());
    assert!(!target.exists());
}

#[test]
fn test_copyFile_directorySource_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let source = temp_dir.path().join("fonts");
    FileManager::ensure_dir(&source).unwrap();

    let error = FileManager::copy_file(&source, temp_dir.path().join("copy.ttf")).unwrap_err();

    assert!(error.to_string().contains("does not exist"));
}

#[test]
fn test_ensureDir_pathIsFile_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(temp_dir.path(), "reports", "not a directory").unwrap();

    assert!(FileManager::ensure_dir(&path).is_err());
}

#[test]
fn test_outputLayout_root_shouldBeKept() {
    let temp_dir = common::create_temp_dir().unwrap();
    let layout = OutputLayout::new(temp_dir.path());

    assert_eq!(layout.root(), temp_dir.path());
    assert!(layout.report_path("a.md").starts_with(temp_dir.path().join("reports")));
}
