/*!
 * Tests for skeleton generation
 */

use uiport::porting::{Analysis, Analyzer, SkeletonGenerator, SkeletonTarget, ZapUiGl};
use crate::common;

fn generate(name: &str, source: &str) -> String {
    let analysis = Analyzer::default().analyze_example(name, source);
    SkeletonGenerator::new()
        .unwrap()
        .generate(name, source, &analysis)
        .unwrap()
        .content
}

#[test]
fn test_generate_sameInputs_shouldBeByteIdentical() {
    let first = generate("hello_world", common::HELLO_WORLD);
    let second = generate("hello_world", common::HELLO_WORLD);
    assert_eq!(first, second);
}

#[test]
fn test_generate_helloWorld_shouldNameWindowAndView() {
    let skeleton = generate("hello_world", common::HELLO_WORLD);

    assert!(skeleton.starts_with("//! Hello World - Port of GPUI's hello_world.rs example"));
    assert!(skeleton.contains("\"Hello World - ZapUI\""));
    assert!(skeleton.contains("const HelloWorld = struct {"));
    assert!(skeleton.contains("var view = HelloWorld{};"));
}

#[test]
fn test_generate_helloWorld_shouldCarryWindowSize() {
    let skeleton = generate("hello_world", common::HELLO_WORLD);
    assert!(skeleton.contains("const WIDTH: f32 = 640;"));
    assert!(skeleton.contains("const HEIGHT: f32 = 480;"));
}

#[test]
fn test_generate_noSizeConstruct_shouldUseDefaultDimensions() {
    let skeleton = generate("plain", "fn main() {}");
    assert!(skeleton.contains("const WIDTH: f32 = 500;"));
    assert!(skeleton.contains("const HEIGHT: f32 = 500;"));
}

#[test]
fn test_generate_clickExample_shouldDeclareColorAndClickTodo() {
    let skeleton = generate("click", common::CLICK_EXAMPLE);

    assert!(skeleton.contains("const color_336699 = zapui.rgba(0.200, 0.400, 0.600, 1.0);"));
    assert!(skeleton.contains("//   - Event handlers need manual implementation"));
    assert!(skeleton.contains("// TODO: implement click handlers manually"));
}

#[test]
fn test_generate_helloWorld_shouldDeclareEveryColorOnce() {
    let skeleton = generate("hello_world", common::HELLO_WORLD);

    for declaration in [
        "const color_0000ff =",
        "const color_505050 =",
        "const color_ffffff =",
        "const red =",
        "const green = zapui.hsla(0.333, 1.000, 0.250, 1.0);",
    ] {
        assert_eq!(skeleton.matches(declaration).count(), 1, "{}", declaration);
    }
}

#[test]
fn test_generate_noWarningsNoColors_shouldSayStraightforward() {
    let skeleton = generate("empty", "fn main() {}");
    assert!(skeleton.contains("None - this example should be straightforward to port!"));
    assert!(skeleton.contains("// No colors extracted"));
    assert!(skeleton.contains("No div chains extracted"));
}

#[test]
fn test_generate_manyChains_shouldReproduceAtMostFive() {
    let source = (0..8)
        .map(|i| format!("let e{} = div().p_{}();", i, i))
        .collect::<Vec<_>>()
        .join("\n");
    let skeleton = generate("chains", &source);

    assert_eq!(skeleton.matches("Translated from Rust:").count(), 5);
    assert!(skeleton.contains("div().p_4()"));
    assert!(!skeleton.contains("div().p_5()"));
}

#[test]
fn test_generate_chain_shouldShowTranslatedText() {
    let skeleton = generate("colors", r#"let e = div().bg(gpui::red()).child("Hi");"#);
    assert!(skeleton.contains(r#"div().bg(red).child(div().child_text("Hi"))"#));
}

#[test]
fn test_generate_anyInput_shouldIncludeEventLoopBoilerplate() {
    let skeleton = generate("empty", "");
    assert!(skeleton.contains("window.getKey(.escape) == .press"));
    assert!(skeleton.contains("window.getFramebufferSize()"));
    assert!(skeleton.contains("renderer.setViewport("));
    assert!(skeleton.contains("reference/empty.rs"));
}

#[test]
fn test_generate_lineCount_shouldBeReported() {
    let analysis = Analysis::default();
    let doc = SkeletonGenerator::new()
        .unwrap()
        .generate("three", "a\nb\nc\n", &analysis)
        .unwrap();
    assert!(doc.content.contains("Ported from 3 lines of Rust."));
    assert_eq!(doc.file_name(), "three.zig");
}

#[test]
fn test_withFontAsset_shouldChangeLoadedFont() {
    let generator = SkeletonGenerator::new().unwrap().with_font_asset("assets/Inter.ttf");
    let doc = generator.generate("x", "", &Analysis::default()).unwrap();
    assert!(doc.content.contains("loadFontFile(\"assets/Inter.ttf\")"));
}

#[test]
fn test_zapUiGl_target_shouldEmitZig() {
    let target = ZapUiGl;
    assert_eq!(target.file_extension(), "zig");
    assert_eq!(target.line_comment(), "//");
    assert_eq!(SkeletonGenerator::new().unwrap().target().name(), "zapui-gl");
}

#[test]
fn test_generate_shortHexLiteral_shouldEmitPlaceholderNextToValidConstant() {
    let skeleton = generate("short_hex", "div().bg(rgb(0xfff)).bg(rgb(0x336699))");

    assert!(skeleton.contains("const color_336699 = zapui.rgba(0.200, 0.400, 0.600, 1.0);"));
    assert!(skeleton.contains("// const color_fff = zapui.rgba(?, ?, ?, 1.0);  // TODO:"));
    assert!(!skeleton.contains("\nconst color_fff"));
}
