/*!
 * Error types for the uiport application.
 *
 * The analysis engine itself never fails; these types cover the
 * peripheral layers (example retrieval, templating and configuration),
 * using the thiserror crate for ergonomic definitions. File operations
 * report through anyhow with path context.
 */

use thiserror::Error;

/// Errors that can occur when retrieving example sources
#[derive(Error, Debug)]
pub enum SourceError {
    /// Error when making the HTTP request fails
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Error returned by the remote endpoint itself
    #[error("Endpoint responded with error: {status_code} - {url}")]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// URL that was requested
        url: String,
    },

    /// Error when the directory listing can not be decoded
    #[error("Failed to parse listing response: {0}")]
    ParseError(String),

    /// The endpoint answered but the example has no content
    #[error("Example '{0}' is empty")]
    EmptyExample(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum PortError {
    /// Retrieval of an example or the example listing failed
    #[error("Fetch error: {0}")]
    Fetch(#[from] SourceError),

    /// Rendering one of the output templates failed
    #[error("Template error: {0}")]
    Template(String),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl From<handlebars::RenderError> for PortError {
    fn from(error: handlebars::RenderError) -> Self {
        Self::Template(error.to_string())
    }
}

impl From<handlebars::TemplateError> for PortError {
    fn from(error: handlebars::TemplateError) -> Self {
        Self::Template(error.to_string())
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => Self::HttpStatus {
                status_code: status.as_u16(),
                url: error.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => Self::RequestFailed(error.to_string()),
        }
    }
}
