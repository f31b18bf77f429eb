/*!
 * Tests for app configuration functionality
 */

use log::LevelFilter;
use uiport::app_config::{Config, LogLevel};
use uiport::errors::PortError;
use uiport::porting::ReportFormat;
use crate::common;

#[test]
fn test_config_default_shouldPointAtGpuiExamples() {
    let config = Config::default();

    assert!(config.examples_url.ends_with("/crates/gpui/examples"));
    assert!(config.listing_url.starts_with("https://api.github.com/"));
    assert_eq!(config.output_dir, "playground");
    assert_eq!(config.report_format, ReportFormat::Html);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validate_withInvalidUrl_shouldFail() {
    let config = Config {
        examples_url: "not a url".to_string(),
        ..Config::default()
    };
    let error = config.validate().unwrap_err();
    assert!(matches!(error, PortError::Config(_)));
    assert!(error.to_string().contains("examples_url"));

    let config = Config {
        listing_url: String::new(),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validate_withEmptyOutputDir_shouldFail() {
    let config = Config {
        output_dir: "  ".to_string(),
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(PortError::Config(_))));
}

#[test]
fn test_config_load_missingFile_shouldReturnDefaults() {
    let temp_dir = common::create_temp_dir().unwrap();
    let config = Config::load(temp_dir.path().join("absent.json")).unwrap();
    assert_eq!(config.output_dir, "playground");
}

#[test]
fn test_config_load_partialFile_shouldFillDefaults() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(
        temp_dir.path(),
        "uiport.json",
        r#"{ "output_dir": "out", "report_format": "markdown", "log_level": "debug" }"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.output_dir, "out");
    assert_eq!(config.report_format, ReportFormat::Markdown);
    assert_eq!(config.log_level.to_level_filter(), LevelFilter::Debug);
    assert_eq!(config.examples_url, Config::default().examples_url);
}

#[test]
fn test_config_load_malformedFile_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(temp_dir.path(), "uiport.json", "{ output_dir: ").unwrap();
    assert!(Config::load(&path).is_err());
}

#[test]
fn test_config_load_unknownFormat_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path =
        common::create_test_file(temp_dir.path(), "uiport.json", r#"{ "report_format": "pdf" }"#)
            .unwrap();
    assert!(Config::load(&path).is_err());
}

#[test]
fn test_config_serialization_shouldRoundTrip() {
    let config = Config {
        report_format: ReportFormat::Markdown,
        ..Config::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"report_format\":\"markdown\""));

    let parsed: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.report_format, ReportFormat::Markdown);
}
