/*!
 * # uiport - GPUI example porter
 *
 * A Rust library and CLI that helps port GPUI layout examples to ZapUI
 * (Zig) by lexical pattern matching and template filling.
 *
 * ## Features
 *
 * - Fetch GPUI example sources, or list the available examples
 * - Flag constructs that need manual porting (event handlers, iteration,
 *   conditional rendering, canvas, images, animations, ...)
 * - Extract colors and the initial window size
 * - Generate a ZapUI skeleton with color constants, TODO markers and the
 *   window/event-loop boilerplate
 * - Generate an HTML or Markdown side-by-side comparison report
 *
 * No parsing happens: detection is purely lexical and the skeletons are
 * starting points, not compiled output.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `porting`: the analysis and translation engine:
 *   - `porting::catalog`: unsupported-feature and translation tables
 *   - `porting::analyzer`: metadata extraction
 *   - `porting::skeleton`: skeleton generation
 *   - `porting::report`: comparison reports
 * - `sources`: where example text comes from (GitHub, mock)
 * - `app_controller`: runs one port end to end
 * - `app_config`: configuration management
 * - `file_utils`: file system operations and output layout
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

#![allow(clippy::uninlined_format_args)]

pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod porting;
pub mod sources;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, FontStatus, PortOutcome};
pub use errors::{PortError, SourceError};
pub use porting::{Analysis, Analyzer, PatternCatalog, ReportGenerator, SkeletonGenerator};
