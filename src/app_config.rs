use anyhow::{Context, Result};
use log::{debug, LevelFilter};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use url::Url;

use crate::errors::PortError;
use crate::porting::ReportFormat;

// @module: Application configuration (loading and validating the porter settings)

/// Environment variable that overrides the configuration file location
pub const CONFIG_ENV_VAR: &str = "UIPORT_CONFIG";

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "uiport.json";

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL serving the raw example sources
    #[serde(default = "default_examples_url")]
    pub examples_url: String,

    /// Directory-listing endpoint returning the available examples
    #[serde(default = "default_listing_url")]
    pub listing_url: String,

    /// Root directory receiving the generated artifacts
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Font copied next to the skeleton so it runs out of the box
    #[serde(default = "default_font_path")]
    pub font_path: String,

    /// Format of the side-by-side comparison report
    #[serde(default)]
    pub report_format: ReportFormat,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
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
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_examples_url() -> String {
    "https://raw.githubusercontent.com/zed-industries/zed/main/crates/gpui/examples".to_string()
}

fn default_listing_url() -> String {
    "https://api.github.com/repos/zed-industries/zed/contents/crates/gpui/examples".to_string()
}

fn default_output_dir() -> String {
    "playground".to_string()
}

fn default_font_path() -> String {
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf".to_string()
}

impl Config {
    /// Resolve the configuration path, honouring the environment override
    pub fn resolve_path() -> PathBuf {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Load the configuration from `path`, falling back to defaults when the file is absent
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), PortError> {
        Url::parse(&self.examples_url).map_err(|e| {
            PortError::Config(format!("Invalid examples_url '{}': {}", self.examples_url, e))
        })?;
        Url::parse(&self.listing_url).map_err(|e| {
            PortError::Config(format!("Invalid listing_url '{}': {}", self.listing_url, e))
        })?;

        if self.output_dir.trim().is_empty() {
            return Err(PortError::Config("output_dir must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            examples_url: default_examples_url(),
            listing_url: default_listing_url(),
            output_dir: default_output_dir(),
            font_path: default_font_path(),
            report_format: ReportFormat::default(),
            log_level: LogLevel::default(),
        }
    }
}
