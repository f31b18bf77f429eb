/*!
 * Source analysis.
 *
 * Scans raw GPUI example text with the pattern catalog and records the
 * metadata the generators need: warnings for constructs that must be
 * ported by hand, the colors in use, the initial window size and the
 * `div()` builder chains.
 *
 * Analysis never fails. Tokens that do not parse are skipped and the
 * corresponding defaults stay in place.
 */

use log::debug;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use super::catalog::PatternCatalog;
use super::color::ColorToken;
use super::naming;

/// Window size used when the source does not declare one
pub const DEFAULT_WINDOW_SIZE: WindowSize = WindowSize {
    width: 500,
    height: 500,
};

/// Initial window dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSize {
    fn default() -> Self {
        DEFAULT_WINDOW_SIZE
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Metadata extracted from one example source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Messages of the unsupported-feature rules that fired
    pub warnings: BTreeSet<String>,
    /// Colors referenced by the source
    pub colors: BTreeSet<ColorToken>,
    /// Dimensions of the first `size(px(..), px(..))` construct
    pub window_size: WindowSize,
    /// Display title of the example, empty for anonymous sources
    pub title: String,
    /// Ids of the unsupported-feature rules that fired
    pub features: BTreeSet<&'static str>,
    /// `div()` builder chains in source order
    pub div_chains: Vec<String>,
}

/// Analyzer bound to a pattern catalog
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'c> {
    catalog: &'c PatternCatalog,
}

impl Default for Analyzer<'static> {
    fn default() -> Self {
        Self::new(PatternCatalog::shared())
    }
}

impl<'c> Analyzer<'c> {
    /// Create an analyzer over the given catalog
    pub fn new(catalog: &'c PatternCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this analyzer reads
    pub fn catalog(&self) -> &'c PatternCatalog {
        self.catalog
    }

    /// Analyze anonymous source text
    pub fn analyze(&self, source: &str) -> Analysis {
        let mut analysis = Analysis::default();

        self.collect_warnings(source, &mut analysis);
        self.collect_colors(source, &mut analysis);
        if let Some(size) = self.window_size(source) {
            analysis.window_size = size;
        }
        analysis.div_chains = self.div_chains(source);

        debug!(
            "Analysis: {} warning(s), {} color(s), window {}, {} div chain(s)",
            analysis.warnings.len(),
            analysis.colors.len(),
            analysis.window_size,
            analysis.div_chains.len()
        );

        analysis
    }

    /// Analyze the source of a named example, deriving its display title
    pub fn analyze_example(&self, name: &str, source: &str) -> Analysis {
        Analysis {
            title: naming::display_title(name),
            ..self.analyze(source)
        }
    }

    /// Apply the translation table to one builder chain
    pub fn translate_chain(&self, chain: &str) -> String {
        self.catalog.translate(chain)
    }

    fn collect_warnings(&self, source: &str, analysis: &mut Analysis) {
        for rule in self.catalog.unsupported() {
            if rule.detect(source) {
                analysis.warnings.insert(rule.message.to_string());
                analysis.features.insert(rule.id);
            }
        }
    }

    fn collect_colors(&self, source: &str, analysis: &mut Analysis) {
        let extractors = self.catalog.extractors();

        for digits in extractors.hex_color.find_all(source) {
            analysis.colors.insert(ColorToken::hex(&digits));
        }

        for name in extractors.named_color.find_all(source) {
            if let Some(token) = ColorToken::named(&name) {
                analysis.colors.insert(token);
            }
        }
    }

    // First construct wins, even when it fails to parse
    fn window_size(&self, source: &str) -> Option<WindowSize> {
        let groups = self.catalog.extractors().window_size.first_groups(source)?;
        let [width, height] = groups.as_slice() else {
            return None;
        };

        match (parse_pixels(width), parse_pixels(height)) {
            (Some(width), Some(height)) => Some(WindowSize { width, height }),
            _ => {
                debug!("Skipping unparsable window size: px({}), px({})", width, height);
                None
            }
        }
    }

    fn div_chains(&self, source: &str) -> Vec<String> {
        self.catalog
            .extractors()
            .div_chain
            .find_all(source)
            .into_iter()
            .map(|chain| chain.trim_end().to_string())
            .collect()
    }
}

/// Parse a pixel argument such as `800.0` or `640.` and truncate it
fn parse_pixels(token: &str) -> Option<u32> {
    let value: f64 = token.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value.trunc() as u32)
}
