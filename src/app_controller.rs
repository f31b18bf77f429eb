use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app_config::Config;
use crate::errors::PortError;
use crate::file_utils::{FileManager, OutputLayout};
use crate::porting::skeleton::DEFAULT_FONT_ASSET;
use crate::porting::{Analysis, Analyzer, ReportGenerator, SkeletonGenerator};
use crate::sources::{ExampleSource, SOURCE_EXTENSION};

// @module: Application controller for porting one example

/// Outcome of copying the font asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontStatus {
    /// The font was copied to the given path
    Copied(PathBuf),
    /// The font could not be copied; the skeleton needs it placed by hand
    Missing { from: PathBuf, to: PathBuf },
}

/// Everything one port run produced
#[derive(Debug, Clone)]
pub struct PortOutcome {
    /// Normalized example identifier
    pub name: String,
    /// Analysis the artifacts were generated from
    pub analysis: Analysis,
    pub skeleton_path: PathBuf,
    pub reference_path: PathBuf,
    pub report_path: PathBuf,
    pub screenshots_dir: PathBuf,
    pub font: FontStatus,
}

/// Strip a recognized source extension and reject identifiers that are not plain names
pub fn normalize_example_name(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let name = trimmed.strip_suffix(SOURCE_EXTENSION).unwrap_or(trimmed);

    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(anyhow!("Invalid example name: {:?}", raw));
    }

    Ok(name.to_string())
}

/// Main application controller
pub struct Controller<S: ExampleSource> {
    // @field: App configuration
    config: Config,
    source: S,
    analyzer: Analyzer<'static>,
    skeletons: SkeletonGenerator,
    reports: ReportGenerator,
    layout: OutputLayout,
}

impl<S: ExampleSource> Controller<S> {
    // @method: Create a new controller with the given configuration and example source
    pub fn with_config(config: Config, source: S) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let skeletons = SkeletonGenerator::new()
            .context("Failed to prepare skeleton template")?
            .with_font_asset(&Self::font_asset(&config));
        let reports = ReportGenerator::new(config.report_format)
            .context("Failed to prepare report template")?;
        let layout = OutputLayout::new(&config.output_dir);

        Ok(Self {
            config,
            source,
            analyzer: Analyzer::default(),
            skeletons,
            reports,
            layout,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// List the examples the source offers
    pub async fn list_examples(&self) -> Result<Vec<String>> {
        let spinner = Self::spinner("Fetching example list...");
        let result = self.source.list().await;
        spinner.finish_and_clear();

        result.map_err(PortError::Fetch).context("Error fetching examples")
    }

    /// Fetch, analyze and generate every artifact for one example
    pub async fn port(&self, raw_name: &str) -> Result<PortOutcome> {
        let name = normalize_example_name(raw_name)?;
        info!("Fetching GPUI example: {}", name);

        let spinner = Self::spinner(&format!("Downloading {}", self.source.location(&name)));
        let fetched = self.source.fetch(&name).await;
        spinner.finish_and_clear();
        let source = fetched
            .map_err(PortError::Fetch)
            .with_context(|| format!("Could not fetch example: {}", name))?;

        info!("Analyzing {} bytes of Rust code...", source.len());
        let analysis = self.analyzer.analyze_example(&name, &source);
        Self::log_analysis(&analysis);

        let skeleton = self
            .skeletons
            .generate(&name, &source, &analysis)
            .context("Failed to generate skeleton")?;
        let report = self
            .reports
            .generate_report(&name, &source, &skeleton, &analysis)
            .context("Failed to generate report")?;

        let skeleton_path = self.layout.skeleton_path(&skeleton.file_name());
        FileManager::write_to_file(&skeleton_path, &skeleton.content)?;
        info!("Generated {:?}", skeleton_path);

        let reference_path = self.layout.reference_path(&name);
        FileManager::write_to_file(&reference_path, &source)?;
        debug!("Saved original source to {:?}", reference_path);

        let report_path = self.layout.report_path(&report.file_name());
        FileManager::write_to_file(&report_path, &report.content)?;
        info!("Generated report {:?}", report_path);

        let screenshots_dir = self.layout.screenshots_dir(&name);
        FileManager::ensure_dir(&screenshots_dir)?;
        debug!("Screenshot directory ready at {:?}", screenshots_dir);

        let font = self.copy_font();

        Ok(PortOutcome {
            name,
            analysis,
            skeleton_path,
            reference_path,
            report_path,
            screenshots_dir,
            font,
        })
    }

    // A missing font never aborts the run
    fn copy_font(&self) -> FontStatus {
        let from = PathBuf::from(&self.config.font_path);
        let to = self.layout.asset_path(&from);

        match FileManager::copy_file(&from, &to) {
            Ok(()) => {
                debug!("Copied font to {:?}", to);
                FontStatus::Copied(to)
            }
            Err(e) => {
                warn!("Could not copy font: {}", e);
                warn!(
                    "Copy a TrueType font to {:?} (or set font_path in the config) \
                     before running the skeleton",
                    to
                );
                FontStatus::Missing { from, to }
            }
        }
    }

    fn log_analysis(analysis: &Analysis) {
        info!("Analysis:");
        info!("  - Div chains found: {}", analysis.div_chains.len());
        info!("  - Colors used: {}", analysis.colors.len());
        info!("  - Window size: {}", analysis.window_size);
        info!("  - Warnings: {}", analysis.warnings.len());

        for warning in &analysis.warnings {
            warn!("{}", warning);
        }
    }

    // @returns: Font path as the generated program sees it, relative to the output root
    fn font_asset(config: &Config) -> String {
        Path::new(&config.font_path)
            .file_name()
            .map(|name| format!("assets/{}", name.to_string_lossy()))
            .unwrap_or_else(|| DEFAULT_FONT_ASSET.to_string())
    }

    fn spinner(message: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}
