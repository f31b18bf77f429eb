#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

use uiport::app_config::Config;
use uiport::app_controller::{Controller, FontStatus};
use uiport::sources::GithubExampleSource;

/// uiport - port GPUI examples to ZapUI
///
/// Downloads a GPUI example, flags the constructs that need manual work and
/// generates a ZapUI (Zig) skeleton plus a side-by-side comparison report.
#[derive(Parser, Debug)]
#[command(name = "uiport")]
#[command(version)]
#[command(about = "Generate ZapUI skeletons from GPUI examples")]
#[command(long_about = "uiport downloads a GPUI example, analyzes it and writes a ZapUI skeleton.

EXAMPLES:
    uiport hello_world        # Port the hello_world example
    uiport shadow.rs          # The .rs extension is optional
    uiport --list             # List the available examples

CONFIGURATION:
    Settings are read from uiport.json in the working directory, or from the
    file named by the UIPORT_CONFIG environment variable. Defaults are used
    when neither exists.")]
struct CommandLineOptions {
    /// Example to port (e.g. 'hello_world')
    #[arg(value_name = "EXAMPLE", required_unless_present = "list")]
    example: Option<String>,

    /// List the available examples
    #[arg(long, conflicts_with = "example")]
    list: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI color for log level
    fn decoration(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("⚠️ ", "1;33"),
            Level::Info => ("  ", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
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
            let (emoji, color) = Self::decoration(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Info until the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    let config_path = Config::resolve_path();
    let config = Config::load(&config_path)?;
    log::set_max_level(config.log_level.to_level_filter());

    let source = GithubExampleSource::from_config(&config)
        .context("Failed to create HTTP client")?;
    let controller = Controller::with_config(config, source)?;

    if cli.list {
        let examples = controller.list_examples().await?;
        println!("Available GPUI examples:");
        for example in examples {
            println!("  {}", example);
        }
        return Ok(());
    }

    let Some(example) = cli.example else {
        // clap enforces EXAMPLE unless --list is given
        return Ok(());
    };

    let outcome = controller.port(&example).await?;

    info!("✅ Generated {:?}", outcome.skeleton_path);
    info!("   Report: {:?}", outcome.report_path);
    info!("   Screenshots go in {:?}", outcome.screenshots_dir);
    if let FontStatus::Missing { from, to } = &outcome.font {
        info!("   Font missing: copy {:?} to {:?} by hand", from, to);
    }
    info!("   Edit the skeleton and add it to build.zig to compile.");

    Ok(())
}
