/*!
 * Analysis and translation engine.
 *
 * Control flows catalog -> analyzer -> {skeleton, report}:
 *
 * - `matcher`: lexical `Matcher` capability and its regex implementation
 * - `catalog`: unsupported-feature and syntax-translation tables
 * - `color`: color tokens and channel conversion
 * - `naming`: titles and type identifiers derived from example names
 * - `analyzer`: metadata extraction from raw source text
 * - `templates`: handlebars wrapper shared by the generators
 * - `skeleton`: target-language skeleton generation
 * - `report`: side-by-side comparison reports
 */

pub use self::analyzer::{Analysis, Analyzer, WindowSize, DEFAULT_WINDOW_SIZE};
pub use self::catalog::{PatternCatalog, PatternRule, Precedence, TranslationRule};
pub use self::color::{ColorToken, ColorValue, NamedColor};
pub use self::matcher::{Matcher, RegexMatcher};
pub use self::report::{ReportDocument, ReportFormat, ReportGenerator};
pub use self::skeleton::{SkeletonDocument, SkeletonGenerator, SkeletonTarget, ZapUiGl};

pub mod analyzer;
pub mod catalog;
pub mod color;
pub mod matcher;
pub mod naming;
pub mod report;
pub mod skeleton;
pub mod templates;
