/*!
 * Lexical matchers used by the pattern catalog.
 *
 * Detection is deliberately text based. Everything that looks at source
 * text goes through the `Matcher` trait so a stricter, parser-backed
 * implementation can replace `RegexMatcher` without touching the
 * analysis contract.
 */

use regex::Regex;
use std::fmt::Debug;

/// Capability to detect and rewrite constructs in raw source text
pub trait Matcher: Send + Sync + Debug {
    /// The pattern this matcher was built from, for diagnostics
    fn pattern(&self) -> &str;

    /// Whether the construct occurs anywhere in `text`
    fn is_match(&self, text: &str) -> bool;

    /// Capture groups of the first occurrence, group 0 excluded
    ///
    /// Groups that did not participate in the match are returned as empty strings.
    fn first_groups(&self, text: &str) -> Option<Vec<String>>;

    /// Every occurrence in text order
    ///
    /// Yields the first capture group when the pattern has one, otherwise the whole match.
    fn find_all(&self, text: &str) -> Vec<String>;

    /// Rewrite every occurrence using `${n}` style back-references
    fn replace_all(&self, text: &str, replacement: &str) -> String;
}

/// `Matcher` backed by the regex crate
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    /// Compile a new matcher
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl Matcher for RegexMatcher {
    fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    fn first_groups(&self, text: &str) -> Option<Vec<String>> {
        let captures = self.regex.captures(text)?;
        Some(
            captures
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
                .collect(),
        )
    }

    fn find_all(&self, text: &str) -> Vec<String> {
        if self.regex.captures_len() > 1 {
            self.regex
                .captures_iter(text)
                .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
                .collect()
        } else {
            self.regex
                .find_iter(text)
                .map(|m| m.as_str().to_string())
                .collect()
        }
    }

    fn replace_all(&self, text: &str, replacement: &str) -> String {
        self.regex.replace_all(text, replacement).into_owned()
    }
}
