/*!
 * Example sources.
 *
 * The analysis engine only needs source text; where it comes from is
 * behind the `ExampleSource` trait:
 * - `github`: raw-content and directory-listing endpoints over HTTP
 * - `mock`: in-memory examples for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::SourceError;

/// Extension of example source files
pub const SOURCE_EXTENSION: &str = ".rs";

/// Common trait for all example sources
#[async_trait]
pub trait ExampleSource: Send + Sync + Debug {
    /// List the available example identifiers, sorted
    async fn list(&self) -> Result<Vec<String>, SourceError>;

    /// Fetch the source text of one example
    async fn fetch(&self, name: &str) -> Result<String, SourceError>;

    /// Human readable location of an example, used in logs and reports
    fn location(&self, name: &str) -> String;
}

pub mod github;
pub mod mock;

pub use self::github::GithubExampleSource;
pub use self::mock::{MockBehavior, MockSource};
