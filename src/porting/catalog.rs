/*!
 * Pattern catalog: the fixed knowledge base of the porter.
 *
 * Two read-only tables live here:
 * - the unsupported-feature table, listing GPUI constructs that the
 *   skeleton can only flag for manual work,
 * - the syntax-translation table, listing mechanical rewrites applied to
 *   `div()` builder chains.
 *
 * The extraction patterns used by the analyzer (colors, window size,
 * builder chains) are kept alongside so that every lexical rule of the
 * engine is declared in one place.
 */

use once_cell::sync::Lazy;

use super::matcher::{Matcher, RegexMatcher};

/// A construct the target toolkit can not express mechanically
#[derive(Debug)]
pub struct PatternRule {
    /// Stable identifier of the rule
    pub id: &'static str,
    /// Human readable warning attached to the analysis
    pub message: &'static str,
    /// Marker text placed in the skeleton where the construct must be ported by hand
    pub todo: Option<&'static str>,
    matcher: Box<dyn Matcher>,
}

impl PatternRule {
    /// Create a rule from a lexical pattern
    ///
    /// # Panics
    /// Panics if `pattern` is not a valid regex. Catalog patterns are static.
    pub fn new(
        id: &'static str,
        pattern: &str,
        message: &'static str,
        todo: Option<&'static str>,
    ) -> Self {
        Self::with_matcher(
            id,
            Box::new(RegexMatcher::new(pattern).expect("Invalid unsupported-feature pattern")),
            message,
            todo,
        )
    }

    /// Create a rule around any matcher implementation
    pub fn with_matcher(
        id: &'static str,
        matcher: Box<dyn Matcher>,
        message: &'static str,
        todo: Option<&'static str>,
    ) -> Self {
        Self { id, message, todo, matcher }
    }

    /// Whether the construct occurs anywhere in `source`
    pub fn detect(&self, source: &str) -> bool {
        self.matcher.is_match(source)
    }

    /// The underlying pattern
    pub fn pattern(&self) -> &str {
        self.matcher.pattern()
    }
}

/// Precedence tier of a translation rule, most specific first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Calls whose arguments are rewritten (colors, pixel values)
    Argument,
    /// Argument-less method calls renamed one to one
    Call,
    /// Bare namespaced constants
    Constant,
    /// Rewrites that wrap an already translated expression
    Wrap,
}

/// A mechanical source-to-target rewrite
#[derive(Debug)]
pub struct TranslationRule {
    /// Stable identifier of the rule
    pub tag: &'static str,
    /// Tier deciding the application order
    pub precedence: Precedence,
    /// Replacement template using `${n}` back-references
    pub replacement: &'static str,
    matcher: Box<dyn Matcher>,
}

impl TranslationRule {
    /// Create a rule from a lexical pattern
    ///
    /// # Panics
    /// Panics if `pattern` is not a valid regex. Catalog patterns are static.
    pub fn new(
        tag: &'static str,
        precedence: Precedence,
        pattern: &str,
        replacement: &'static str,
    ) -> Self {
        Self {
            tag,
            precedence,
            replacement,
            matcher: Box::new(RegexMatcher::new(pattern).expect("Invalid translation pattern")),
        }
    }

    /// Rewrite every occurrence in `text`
    pub fn apply(&self, text: &str) -> String {
        self.matcher.replace_all(text, self.replacement)
    }

    /// The underlying pattern
    pub fn pattern(&self) -> &str {
        self.matcher.pattern()
    }
}

/// Patterns the analyzer uses to pull metadata out of the source
#[derive(Debug)]
pub struct Extractors {
    /// `rgb(0xRRGGBB)` literals, capturing the hex digits
    pub hex_color: Box<dyn Matcher>,
    /// `gpui::red()` style named colors, capturing the name
    pub named_color: Box<dyn Matcher>,
    /// `size(px(W), px(H))`, capturing both arguments
    pub window_size: Box<dyn Matcher>,
    /// `div()` builder chains up to the next statement or block
    pub div_chain: Box<dyn Matcher>,
}

impl Default for Extractors {
    fn default() -> Self {
        let regex = |pattern: &str| -> Box<dyn Matcher> {
            Box::new(RegexMatcher::new(pattern).expect("Invalid extraction pattern"))
        };

        Self {
            hex_color: regex(r"\brgb\(0x([0-9a-fA-F]+)\)"),
            named_color: regex(r"\bgpui::(red|green|blue|yellow|black|white)\(\)"),
            window_size: regex(r"\bsize\(\s*px\(([^()]*)\)\s*,\s*px\(([^()]*)\)\s*\)"),
            div_chain: regex(r"\bdiv\(\)[^;{]+"),
        }
    }
}

/// The complete, immutable rule set
#[derive(Debug)]
pub struct PatternCatalog {
    unsupported: Vec<PatternRule>,
    translations: Vec<TranslationRule>,
    extractors: Extractors,
}

static BUILTIN: Lazy<PatternCatalog> = Lazy::new(PatternCatalog::builtin);

impl PatternCatalog {
    /// Assemble a catalog, ordering translations most-specific-first
    ///
    /// Rules of the same tier keep their declaration order.
    pub fn new(
        unsupported: Vec<PatternRule>,
        mut translations: Vec<TranslationRule>,
        extractors: Extractors,
    ) -> Self {
        translations.sort_by_key(|rule| rule.precedence);
        Self {
            unsupported,
            translations,
            extractors,
        }
    }

    /// Shared instance of the built-in GPUI to ZapUI catalog
    pub fn shared() -> &'static PatternCatalog {
        &BUILTIN
    }

    /// Unsupported-feature rules in declaration order
    pub fn unsupported(&self) -> &[PatternRule] {
        &self.unsupported
    }

    /// Translation rules in application order
    pub fn translations(&self) -> &[TranslationRule] {
        &self.translations
    }

    /// Extraction patterns
    pub fn extractors(&self) -> &Extractors {
        &self.extractors
    }

    /// Look up an unsupported-feature rule by id
    pub fn rule(&self, id: &str) -> Option<&PatternRule> {
        self.unsupported.iter().find(|rule| rule.id == id)
    }

    /// Apply every translation rule, in order, to one text fragment
    pub fn translate(&self, fragment: &str) -> String {
        self.translations
            .iter()
            .fold(fragment.to_string(), |text, rule| rule.apply(&text))
    }

    fn builtin() -> Self {
        Self::new(builtin_unsupported(), builtin_translations(), Extractors::default())
    }
}

fn builtin_unsupported() -> Vec<PatternRule> {
    vec![
        PatternRule::new(
            "click_handler",
            r"\.on_click\(",
            "Event handlers need manual implementation",
            Some(
                "implement click handlers manually \
                 (port each .on_click closure to a ZapUI callback)",
            ),
        ),
        PatternRule::new(
            "mouse_handler",
            r"\.on_mouse_",
            "Mouse events need manual implementation",
            Some("implement mouse event handlers manually (.on_mouse_* listeners)"),
        ),
        PatternRule::new(
            "format_child",
            r"\.child\([^)]*format!",
            "Format strings: use std.fmt.bufPrint",
            Some("build formatted child text with std.fmt.bufPrint"),
        ),
        PatternRule::new(
            "string_child",
            r#"\.child\("([^"]+)"\)"#,
            "String children: wrap with div().child_text()",
            None,
        ),
        PatternRule::new(
            "render_trait",
            r"impl Render",
            "Render trait: convert to render function",
            None,
        ),
        PatternRule::new(
            "entity_state",
            r"cx\.new\(",
            "Context/state: needs manual conversion",
            Some("move entity state created with cx.new() into fields of the view struct"),
        ),
        PatternRule::new(
            "conditional",
            r"\.when\(",
            "Conditional rendering: use if/else",
            Some("rewrite conditional rendering (.when) as if/else around the child"),
        ),
        PatternRule::new(
            "iterator_map",
            r"\.map\(",
            "Iterator mapping: use Zig for loop",
            Some("rewrite iterator mapping (.map) as a Zig for loop building children"),
        ),
        PatternRule::new(
            "uniform_list",
            r"uniform_list",
            "List virtualization: not yet implemented",
            None,
        ),
        PatternRule::new(
            "canvas",
            r"canvas\(",
            "Canvas/custom painting: not yet implemented",
            None,
        ),
        PatternRule::new("image", r"img\(", "Image loading: not yet implemented", None),
        PatternRule::new("svg", r"svg\(", "SVG rendering: not yet implemented", None),
        PatternRule::new("animation", r"Animation", "Animations: not yet implemented", None),
    ]
}

fn builtin_translations() -> Vec<TranslationRule> {
    vec![
        TranslationRule::new(
            "color_literal_arg",
            Precedence::Argument,
            r"\.(bg|border_color|text_color)\(rgb\(0x([0-9a-fA-F]+)\)\)",
            ".${1}(zapui.rgb(0x${2}))",
        ),
        TranslationRule::new(
            "named_color_arg",
            Precedence::Argument,
            r"\.(bg|border_color|text_color)\(gpui::(\w+)\(\)\)",
            ".${1}(${2})",
        ),
        TranslationRule::new(
            "pixel_arg",
            Precedence::Argument,
            r"\.(gap|size|w|h|rounded)\(px\(([^)]+)\)\)",
            ".${1}(px(${2}))",
        ),
        TranslationRule::new(
            "numbered_call",
            Precedence::Call,
            r"\.(gap|size|border|p|px|py|m)_(\d+)\(\)",
            ".${1}_${2}()",
        ),
        TranslationRule::new(
            "layout_call",
            Precedence::Call,
            concat!(
                r"\.(flex|flex_col|flex_row|w_full|h_full|justify_center|items_center",
                r"|overflow_hidden)\(\)",
            ),
            ".${1}()",
        ),
        TranslationRule::new(
            "style_call",
            Precedence::Call,
            concat!(
                r"\.(shadow_lg|shadow_md|shadow_sm|border_dashed|rounded_md|rounded_lg",
                r"|rounded_full|text_xl|text_lg|text_sm)\(\)",
            ),
            ".${1}()",
        ),
        TranslationRule::new("div_call", Precedence::Call, r"\bdiv\(\)", "div()"),
        TranslationRule::new(
            "named_color",
            Precedence::Constant,
            r"\bgpui::(red|green|blue|yellow|black|white)\(\)",
            "${1}",
        ),
        TranslationRule::new(
            "string_child",
            Precedence::Wrap,
            r#"\.child\("([^"]+)"\)"#,
            r#".child(div().child_text("${1}"))"#,
        ),
    ]
}
