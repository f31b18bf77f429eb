/*!
 * Tests for source analysis
 */

use std::collections::BTreeSet;
use uiport::porting::{Analyzer, ColorToken, PatternCatalog, WindowSize, DEFAULT_WINDOW_SIZE};
use crate::common;

fn color_strings(analyzer: &Analyzer, source: &str) -> Vec<String> {
    analyzer
        .analyze(source)
        .colors
        .iter()
        .map(|c| c.as_str().to_string())
        .collect()
}

#[test]
fn test_analyze_clickExample_shouldMatchEndToEndScenario() {
    let analysis = Analyzer::default().analyze(common::CLICK_EXAMPLE);

    let expected_warnings: BTreeSet<String> =
        ["Event handlers need manual implementation".to_string()].into_iter().collect();
    assert_eq!(analysis.warnings, expected_warnings);

    let expected_colors: BTreeSet<ColorToken> = [ColorToken::hex("336699")].into_iter().collect();
    assert_eq!(analysis.colors, expected_colors);

    assert_eq!(analysis.window_size, WindowSize { width: 640, height: 480 });
}

#[test]
fn test_analyze_warnings_shouldEqualExactlyTheRulesThatMatch() {
    let analyzer = Analyzer::default();
    let sources = [
        common::HELLO_WORLD,
        common::CLICK_EXAMPLE,
        "",
        "items.map(|i| div().child(\"x\")).collect::<Vec<_>>()",
        "canvas(|_| {}).when(true, |c| c) Animation img( svg(",
    ];

    for source in sources {
        let expected: BTreeSet<String> = PatternCatalog::shared()
            .unsupported()
            .iter()
            .filter(|rule| rule.detect(source))
            .map(|rule| rule.message.to_string())
            .collect();
        assert_eq!(analyzer.analyze(source).warnings, expected, "source {:?}", source);
    }
}

#[test]
fn test_analyze_helloWorld_shouldFlagFormatRenderAndState() {
    let analysis = Analyzer::default().analyze(common::HELLO_WORLD);

    let warnings: Vec<&str> = analysis.warnings.iter().map(String::as_str).collect();
    assert_eq!(
        warnings,
        vec![
            "Context/state: needs manual conversion",
            "Format strings: use std.fmt.bufPrint",
            "Render trait: convert to render function",
        ]
    );
    assert!(analysis.features.contains("render_trait"));
}

#[test]
fn test_analyze_repeatedConstruct_shouldReportMessageOnce() {
    let analysis = Analyzer::default().analyze("a.on_click(x); b.on_click(y); c.on_click(z);");
    assert_eq!(analysis.warnings.len(), 1);
}

#[test]
fn test_analyze_helloWorld_shouldCollectHexAndNamedColors() {
    let colors = color_strings(&Analyzer::default(), common::HELLO_WORLD);
    assert_eq!(colors, vec!["0000ff", "505050", "ffffff", "green", "red"]);
}

#[test]
fn test_analyze_hexCase_shouldNormalizeToOneToken() {
    let colors = color_strings(&Analyzer::default(), "bg(rgb(0xABCDEF)).text_color(rgb(0xabcdef))");
    assert_eq!(colors, vec!["abcdef"]);
}

#[test]
fn test_analyze_unknownOrUnqualifiedNames_shouldNotBeColors() {
    let source = "gpui::px() red() gpui::purple() hsla(0.5, 1.0, 0.5, 1.0)";
    let colors = color_strings(&Analyzer::default(), source);
    assert!(colors.is_empty());
}

#[test]
fn test_analyze_sameText_shouldBeIdempotent() {
    let analyzer = Analyzer::default();
    assert_eq!(analyzer.analyze(common::HELLO_WORLD), analyzer.analyze(common::HELLO_WORLD));
}

#[test]
fn test_analyze_noSizeConstruct_shouldUseDefault() {
    let analysis = Analyzer::default().analyze("div().size(px(300.0))");
    assert_eq!(analysis.window_size, DEFAULT_WINDOW_SIZE);
    assert_eq!(analysis.window_size, WindowSize { width: 500, height: 500 });
}

#[test]
fn test_analyze_sizeConstruct_shouldTruncateToIntegers() {
    let analysis = Analyzer::default().analyze("size(px(800.0), px(600.0))");
    assert_eq!(analysis.window_size, WindowSize { width: 800, height: 600 });

    let analysis = Analyzer::default().analyze("size( px(1024.75) , px(768.2) )");
    assert_eq!(analysis.window_size, WindowSize { width: 1024, height: 768 });
}

#[test]
fn test_analyze_twoSizeConstructs_shouldUseFirstOnly() {
    let source = "size(px(320.0), px(240.0)); size(px(800.0), px(600.0));";
    let analysis = Analyzer::default().analyze(source);
    assert_eq!(analysis.window_size, WindowSize { width: 320, height: 240 });
}

#[test]
fn test_analyze_divChains_shouldBeTrimmedAndOrdered() {
    let analysis = Analyzer::default().analyze("let a = div().flex()   ;\nlet b = div().p_2()\n;");
    assert_eq!(analysis.div_chains, vec!["div().flex()", "div().p_2()"]);
}

#[test]
fn test_analyzeExample_shouldDeriveTitle() {
    let analyzer = Analyzer::default();
    let analysis = analyzer.analyze_example("hello_world", common::CLICK_EXAMPLE);
    assert_eq!(analysis.title, "Hello World");
    assert!(analyzer.analyze(common::CLICK_EXAMPLE).title.is_empty());
}

#[test]
fn test_translateChain_shouldUseCatalogOrder() {
    let analyzer = Analyzer::default();
    assert_eq!(
        analyzer.translate_chain("div().bg(gpui::yellow()).child(\"hi\")"),
        "div().bg(yellow).child(div().child_text(\"hi\"))"
    );
}

#[test]
fn test_analyze_shortHexLiteral_shouldStillBeRecorded() {
    let colors = color_strings(&Analyzer::default(), "div().bg(rgb(0xfff)).bg(rgb(0x336699))");
    assert_eq!(colors, vec!["336699", "fff"]);
}
