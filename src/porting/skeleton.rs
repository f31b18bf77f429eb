/*!
 * Skeleton generation.
 *
 * Turns an `Analysis` and the original text into an intentionally
 * incomplete target-language file: color constants, a warning banner,
 * a render stub carrying TODO markers for every construct flagged by the
 * catalog, and the window/event-loop boilerplate of the target.
 *
 * The target itself is a strategy (`SkeletonTarget`) so one engine can
 * emit skeletons for several rendering backends.
 */

use serde::Serialize;

use super::analyzer::{Analysis, Analyzer};
use super::color::{ColorToken, ColorValue};
use super::naming;
use super::templates::{Escaping, TemplateEngine};
use crate::errors::PortError;

/// Maximum number of builder chains reproduced in the render stub
pub const MAX_TRANSLATED_CHAINS: usize = 5;

/// Width of the single-line preview of an original chain
const CHAIN_PREVIEW_CHARS: usize = 80;

/// Font the generated program loads, relative to the output root
pub const DEFAULT_FONT_ASSET: &str = "assets/DejaVuSans.ttf";

/// Indentation of statements inside the render stub
const BODY_INDENT: &str = "        ";

/// Target toolkit a skeleton is generated for
pub trait SkeletonTarget: Send + Sync {
    /// Short identifier of the target
    fn name(&self) -> &'static str;

    /// Extension of generated files, without the dot
    fn file_extension(&self) -> &'static str;

    /// Line comment token of the target language
    fn line_comment(&self) -> &'static str;

    /// Handlebars template of the whole file
    fn template(&self) -> &'static str;

    /// Constant declaration for one extracted color
    fn color_constant(&self, token: &ColorToken) -> String;
}

/// ZapUI on top of zglfw and the OpenGL renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct ZapUiGl;

impl ZapUiGl {
    const TEMPLATE: &'static str = r#"//! {{title}} - Port of GPUI's {{name}}.rs example
//!
//! Auto-generated skeleton by uiport (target: {{target}}).
//! Ported from {{source_lines}} lines of Rust. Manual adjustments needed - see warnings below.

const std = @import("std");
const zapui = @import("zapui");
const zglfw = @import("zglfw");

const GlRenderer = zapui.GlRenderer;
const TextSystem = zapui.TextSystem;
const Scene = zapui.Scene;
const zaffy = zapui.zaffy;
const Pixels = zapui.Pixels;

// GPUI-style API
const div = zapui.elements.div.div;
const v_flex = zapui.elements.div.v_flex;
const h_flex = zapui.elements.div.h_flex;
const reset = zapui.elements.div.reset;
const px = zapui.elements.div.px;

// ============================================================================
// Colors extracted from GPUI example
// ============================================================================

{{colors}}

// ============================================================================
// WARNINGS - Features needing manual implementation:
// ============================================================================
{{warnings}}

// ============================================================================
// View
// ============================================================================

const {{type_name}} = struct {
    fn render(self: *{{type_name}}, tree: *zaffy.Zaffy, scene: *Scene, text_system: *TextSystem) !void {
        _ = self;
        reset();
        const rem: Pixels = 16.0;

        // TODO: Translate the render logic from Rust
{{todos}}

        // Original div chains (auto-translated, may need fixes):
{{chains}}

        // Build and paint
        // try root.buildWithTextSystem(tree, rem, text_system);
        // tree.computeLayoutWithSize(root.node_id.?, WIDTH, HEIGHT);
        // root.paint(scene, text_system, 0, 0, tree, null, null);
        _ = .{ tree, scene, text_system, rem };
    }
};

// ============================================================================
// Main
// ============================================================================

const WIDTH: f32 = {{width}};
const HEIGHT: f32 = {{height}};

pub fn main() !void {
    zglfw.init() catch return;
    defer zglfw.terminate();

    zglfw.windowHint(.context_version_major, 3);
    zglfw.windowHint(.context_version_minor, 3);
    zglfw.windowHint(.opengl_profile, .opengl_core_profile);

    const window = zglfw.Window.create(@intFromFloat(WIDTH), @intFromFloat(HEIGHT), "{{title}} - ZapUI", null, null) catch return;
    defer window.destroy();

    zglfw.makeContextCurrent(window);
    zglfw.swapInterval(1);

    zapui.renderer.gl.loadGlFunctions(zglfw.getProcAddress) catch return;

    const allocator = std.heap.page_allocator;
    var renderer = try GlRenderer.init(allocator);
    defer renderer.deinit();

    var text_system = TextSystem.init(allocator) catch return;
    defer text_system.deinit();
    _ = text_system.loadFontFile("{{font_asset}}") catch return;
    text_system.setAtlas(renderer.getGlyphAtlas());
    text_system.setColorAtlas(renderer.getColorAtlas());

    var view = {{type_name}}{};
    var last_size = window.getFramebufferSize();
    renderer.setViewport(@floatFromInt(last_size[0]), @floatFromInt(last_size[1]), 1.0);

    while (!window.shouldClose()) {
        zglfw.pollEvents();
        if (window.getKey(.escape) == .press) break;

        // Resize
        const fb_size = window.getFramebufferSize();
        if (fb_size[0] != last_size[0] or fb_size[1] != last_size[1]) {
            last_size = fb_size;
            renderer.setViewport(@floatFromInt(fb_size[0]), @floatFromInt(fb_size[1]), 1.0);
        }
        renderer.clear(zapui.rgb(0x1a1a1a));

        var scene = Scene.init(allocator);
        defer scene.deinit();

        var tree = zaffy.Zaffy.init(allocator);
        defer tree.deinit();

        view.render(&tree, &scene, &text_system) catch |err| {
            std.debug.print("Render error: {}\n", .{err});
        };

        renderer.drawScene(&scene) catch {};
        window.swapBuffers();
    }
}

// ============================================================================
// Original Rust Source (for reference)
// ============================================================================
//
// A copy of the original is stored next to this file under reference/{{name}}.rs
//
"#;

    fn expression(value: ColorValue) -> String {
        match value {
            ColorValue::Rgba(r, g, b, a) => {
                format!("zapui.rgba({:.3}, {:.3}, {:.3}, {:.1})", r, g, b, a)
            }
            ColorValue::Hsla(h, s, l, a) => {
                format!("zapui.hsla({:.3}, {:.3}, {:.3}, {:.1})", h, s, l, a)
            }
        }
    }
}

impl SkeletonTarget for ZapUiGl {
    fn name(&self) -> &'static str {
        "zapui-gl"
    }

    fn file_extension(&self) -> &'static str {
        "zig"
    }

    fn line_comment(&self) -> &'static str {
        "//"
    }

    fn template(&self) -> &'static str {
        Self::TEMPLATE
    }

    fn color_constant(&self, token: &ColorToken) -> String {
        match (token, token.value()) {
            (ColorToken::Named(color), Some(value)) => format!(
                "const {} = {};  // GPUI's {}()",
                color.name(),
                Self::expression(value),
                color.name()
            ),
            (ColorToken::Hex(digits), Some(value)) => format!(
                "const color_{} = {};  // rgb(0x{})",
                digits,
                Self::expression(value),
                digits
            ),
            (_, None) => format!(
                "// const color_{0} = zapui.rgba(?, ?, ?, 1.0);  \
                 // TODO: rgb(0x{0}) is not a six-digit hex color",
                token.as_str()
            ),
        }
    }
}

/// A generated skeleton file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonDocument {
    /// Example identifier the skeleton was generated for
    pub name: String,
    /// File extension of the target language
    pub extension: &'static str,
    /// Generated text
    pub content: String,
}

impl SkeletonDocument {
    /// File name of the skeleton, e.g. `hello_world.zig`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }
}

#[derive(Serialize)]
struct SkeletonContext<'a> {
    name: &'a str,
    title: String,
    type_name: String,
    target: &'static str,
    source_lines: usize,
    width: u32,
    height: u32,
    font_asset: &'a str,
    colors: String,
    warnings: String,
    todos: String,
    chains: String,
}

const TEMPLATE_NAME: &str = "skeleton";

/// Generator producing skeletons for one target
pub struct SkeletonGenerator {
    engine: TemplateEngine,
    target: Box<dyn SkeletonTarget>,
    analyzer: Analyzer<'static>,
    font_asset: String,
}

impl SkeletonGenerator {
    /// Create a generator for the default ZapUI/OpenGL target
    pub fn new() -> Result<Self, PortError> {
        Self::with_target(Box::new(ZapUiGl))
    }

    /// Create a generator for any target
    pub fn with_target(target: Box<dyn SkeletonTarget>) -> Result<Self, PortError> {
        let mut engine = TemplateEngine::new(Escaping::Raw);
        engine.register_template(TEMPLATE_NAME, target.template())?;
        Ok(Self {
            engine,
            target,
            analyzer: Analyzer::default(),
            font_asset: DEFAULT_FONT_ASSET.to_string(),
        })
    }

    /// Font path the generated program loads
    pub fn with_font_asset(mut self, font_asset: &str) -> Self {
        self.font_asset = font_asset.to_string();
        self
    }

    /// The target this generator emits
    pub fn target(&self) -> &dyn SkeletonTarget {
        self.target.as_ref()
    }

    /// Generate the skeleton for `name`
    ///
    /// Output depends only on the arguments; identical inputs give identical bytes.
    pub fn generate(
        &self,
        name: &str,
        source: &str,
        analysis: &Analysis,
    ) -> Result<SkeletonDocument, PortError> {
        let context = SkeletonContext {
            name,
            title: naming::display_title(name),
            type_name: naming::type_identifier(name),
            target: self.target.name(),
            source_lines: source.lines().count(),
            width: analysis.window_size.width,
            height: analysis.window_size.height,
            font_asset: &self.font_asset,
            colors: self.colors_block(analysis),
            warnings: self.warnings_block(analysis),
            todos: self.todos_block(analysis),
            chains: self.chains_block(analysis),
        };

        Ok(SkeletonDocument {
            name: name.to_string(),
            extension: self.target.file_extension(),
            content: self.engine.render(TEMPLATE_NAME, &context)?,
        })
    }

    fn colors_block(&self, analysis: &Analysis) -> String {
        if analysis.colors.is_empty() {
            return format!("{} No colors extracted", self.target.line_comment());
        }

        analysis
            .colors
            .iter()
            .map(|token| self.target.color_constant(token))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn warnings_block(&self, analysis: &Analysis) -> String {
        let comment = self.target.line_comment();
        if analysis.warnings.is_empty() {
            return format!("{}   None - this example should be straightforward to port!", comment);
        }

        analysis
            .warnings
            .iter()
            .map(|warning| format!("{}   - {}", comment, warning))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Catalog order keeps the markers stable
    fn todos_block(&self, analysis: &Analysis) -> String {
        let comment = self.target.line_comment();
        let todos: Vec<String> = self
            .analyzer
            .catalog()
            .unsupported()
            .iter()
            .filter(|rule| analysis.features.contains(rule.id))
            .filter_map(|rule| rule.todo)
            .map(|todo| format!("{}{} TODO: {}", BODY_INDENT, comment, todo))
            .collect();

        if todos.is_empty() {
            return format!("{}{} No constructs flagged for manual porting", BODY_INDENT, comment);
        }
        todos.join("\n")
    }

    fn chains_block(&self, analysis: &Analysis) -> String {
        let comment = self.target.line_comment();
        if analysis.div_chains.is_empty() {
            return format!("{}{} No div chains extracted", BODY_INDENT, comment);
        }

        analysis
            .div_chains
            .iter()
            .take(MAX_TRANSLATED_CHAINS)
            .map(|chain| {
                let preview: String = chain
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .chars()
                    .take(CHAIN_PREVIEW_CHARS)
                    .collect();
                let translated = self
                    .analyzer
                    .translate_chain(chain)
                    .lines()
                    .map(|line| format!("{}{}     {}", BODY_INDENT, comment, line.trim()))
                    .collect::<Vec<_>>()
                    .join("\n");

                format!(
                    "{indent}{c} Translated from Rust:\n\
                     {indent}{c} {preview}...\n\
                     {indent}{c} const elem =\n\
                     {translated};",
                    indent = BODY_INDENT,
                    c = comment,
                    preview = preview,
                    translated = translated,
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
