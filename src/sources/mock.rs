/*!
 * In-memory example source for testing.
 *
 * - `MockSource::working()` serves the examples it was given
 * - `MockSource::failing()` fails every request like an unreachable host
 */

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::ExampleSource;
use crate::errors::SourceError;

/// Behavior mode for the mock source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Serves the registered examples
    Working,
    /// Every request fails with a request error
    Failing,
}

/// Mock example source
#[derive(Debug, Clone)]
pub struct MockSource {
    behavior: MockBehavior,
    examples: BTreeMap<String, String>,
    request_count: Arc<AtomicUsize>,
}

impl MockSource {
    /// Source serving `examples`
    pub fn working() -> Self {
        Self {
            behavior: MockBehavior::Working,
            examples: BTreeMap::new(),
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Source whose every request fails
    pub fn failing() -> Self {
        Self {
            behavior: MockBehavior::Failing,
            ..Self::working()
        }
    }

    /// Register an example
    pub fn with_example(mut self, name: &str, source: &str) -> Self {
        self.examples.insert(name.to_string(), source.to_string());
        self
    }

    /// Number of requests served or refused so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    fn record_request(&self) -> Result<(), SourceError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            MockBehavior::Working => Ok(()),
            MockBehavior::Failing => Err(SourceError::RequestFailed(
                "Simulated connection failure".to_string(),
            )),
        }
    }
}

#[async_trait]
impl ExampleSource for MockSource {
    async fn list(&self) -> Result<Vec<String>, SourceError> {
        self.record_request()?;
        Ok(self.examples.keys().cloned().collect())
    }

    async fn fetch(&self, name: &str) -> Result<String, SourceError> {
        self.record_request()?;
        self.examples
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::HttpStatus {
                status_code: 404,
                url: self.location(name),
            })
    }

    fn location(&self, name: &str) -> String {
        format!("mock://examples/{}.rs", name)
    }
}
