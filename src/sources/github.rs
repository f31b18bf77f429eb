use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use super::{ExampleSource, SOURCE_EXTENSION};
use crate::app_config::Config;
use crate::errors::SourceError;

/// GitHub API requires a user agent on every request
const USER_AGENT: &str = concat!("uiport/", env!("CARGO_PKG_VERSION"));

/// Entry of the directory-listing endpoint
#[derive(Debug, Deserialize)]
pub struct ListingEntry {
    /// File name, e.g. `hello_world.rs`
    pub name: String,
    /// Entry kind (`file` or `dir`)
    #[serde(rename = "type")]
    pub kind: String,
}

/// Example source backed by the GitHub raw-content and contents endpoints
#[derive(Debug, Clone)]
pub struct GithubExampleSource {
    /// Base URL of the raw example files
    examples_url: String,
    /// Directory-listing endpoint
    listing_url: String,
    /// HTTP client for making requests
    client: Client,
}

impl GithubExampleSource {
    /// Create a source for the given endpoints
    pub fn new(examples_url: &str, listing_url: &str) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            examples_url: examples_url.trim_end_matches('/').to_string(),
            listing_url: listing_url.to_string(),
            client,
        })
    }

    /// Create a source from the configured endpoints
    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        Self::new(&config.examples_url, &config.listing_url)
    }

    /// Raw-content URL of one example
    pub fn raw_url(&self, name: &str) -> String {
        format!("{}/{}{}", self.examples_url, name, SOURCE_EXTENSION)
    }

    async fn get_text(&self, url: &str) -> Result<String, SourceError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Example identifiers from a directory listing: `.rs` files, extension stripped, sorted
pub fn example_names(entries: Vec<ListingEntry>) -> Vec<String> {
    let mut names: Vec<String> = entries
        .into_iter()
        .filter(|entry| entry.kind == "file")
        .filter_map(|entry| entry.name.strip_suffix(SOURCE_EXTENSION).map(str::to_string))
        .collect();
    names.sort();
    names
}

#[async_trait]
impl ExampleSource for GithubExampleSource {
    async fn list(&self) -> Result<Vec<String>, SourceError> {
        let body = self.get_text(&self.listing_url).await?;
        let entries: Vec<ListingEntry> =
            serde_json::from_str(&body).map_err(|e| SourceError::ParseError(e.to_string()))?;
        Ok(example_names(entries))
    }

    async fn fetch(&self, name: &str) -> Result<String, SourceError> {
        let source = self.get_text(&self.raw_url(name)).await?;
        if source.trim().is_empty() {
            return Err(SourceError::EmptyExample(name.to_string()));
        }
        Ok(source)
    }

    fn location(&self, name: &str) -> String {
        self.raw_url(name)
    }
}
