/*!
 * Comparison report generation.
 *
 * The report puts the original source and the generated skeleton side by
 * side, together with a few counts taken from the analysis and links to
 * the screenshots produced by the external capture workflow. It only
 * references those images; it never creates them.
 */

use serde::{Deserialize, Serialize};

use super::analyzer::Analysis;
use super::naming;
use super::skeleton::SkeletonDocument;
use super::templates::{Escaping, TemplateEngine};
use crate::errors::PortError;

/// Screenshot directory as seen from the report directory
pub const SCREENSHOT_PREFIX: &str = "../screenshots";

/// Output format of the comparison report
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Markdown,
}

impl ReportFormat {
    // @returns: File extension of the report
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Markdown => "md",
        }
    }
}

/// A generated comparison report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    /// Example identifier
    pub name: String,
    /// Format of `content`
    pub format: ReportFormat,
    /// Generated text
    pub content: String,
}

impl ReportDocument {
    /// File name of the report, e.g. `hello_world.html`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.format.extension())
    }
}

/// Screenshot references expected from the capture workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRefs {
    pub gpui: String,
    pub zapui: String,
    pub diff: String,
    pub animation: String,
}

impl AssetRefs {
    pub fn for_example(name: &str) -> Self {
        let asset = |file: &str| format!("{}/{}/{}", SCREENSHOT_PREFIX, name, file);
        Self {
            gpui: asset("gpui.png"),
            zapui: asset("zapui.png"),
            diff: asset("diff.png"),
            animation: asset("compare.gif"),
        }
    }
}

#[derive(Serialize)]
struct ReportContext<'a> {
    name: &'a str,
    title: String,
    skeleton_file: String,
    source: &'a str,
    skeleton: &'a str,
    source_fence: String,
    skeleton_fence: String,
    skeleton_lang: &'static str,
    source_lines: usize,
    skeleton_lines: usize,
    color_count: usize,
    window_size: String,
    warnings: Vec<&'a str>,
    assets: AssetRefs,
}

const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{title}} - GPUI vs ZapUI</title>
<style>
body { font-family: sans-serif; margin: 2em; background: #fafafa; color: #222; }
.columns { display: flex; gap: 1em; }
.columns > section { flex: 1; min-width: 0; }
pre { background: #1a1a1a; color: #e0e0e0; padding: 1em; overflow-x: auto; font-size: 12px; }
img { max-width: 100%; border: 1px solid #ccc; }
th { text-align: left; padding-right: 1em; }
</style>
</head>
<body>
<h1>{{title}}</h1>

<h2>Summary</h2>
<table>
<tr><th>Rust lines</th><td>{{source_lines}}</td></tr>
<tr><th>Skeleton lines</th><td>{{skeleton_lines}}</td></tr>
<tr><th>Colors</th><td>{{color_count}}</td></tr>
<tr><th>Window size</th><td>{{window_size}}</td></tr>
</table>

<h2>Warnings</h2>
{{#if warnings}}<ul>{{#each warnings}}<li>{{this}}</li>{{/each}}</ul>{{else}}<p>None - this example should be straightforward to port!</p>{{/if}}

<h2>Screenshots</h2>
<div class="columns">
<section><h3>GPUI</h3><img src="{{assets.gpui}}" alt="GPUI screenshot"></section>
<section><h3>ZapUI</h3><img src="{{assets.zapui}}" alt="ZapUI screenshot"></section>
</div>
<h3>Difference</h3>
<img src="{{assets.diff}}" alt="Pixel difference">
<h3>Animated comparison</h3>
<img src="{{assets.animation}}" alt="Animated comparison">

<h2>Source</h2>
<div class="columns">
<section><h3>{{name}}.rs</h3><pre><code>{{source}}</code></pre></section>
<section><h3>{{skeleton_file}}</h3><pre><code>{{skeleton}}</code></pre></section>
</div>
</body>
</html>
"#;

const MARKDOWN_TEMPLATE: &str = r#"# {{title}}

## Summary

| Metric | Value |
|---|---|
| Rust lines | {{source_lines}} |
| Skeleton lines | {{skeleton_lines}} |
| Colors | {{color_count}} |
| Window size | {{window_size}} |

## Warnings

{{#if warnings}}{{#each warnings}}- {{this}}
{{/each}}{{else}}None - this example should be straightforward to port!
{{/if}}

## Screenshots

| GPUI | ZapUI |
|---|---|
| ![GPUI]({{assets.gpui}}) | ![ZapUI]({{assets.zapui}}) |

Difference: ![Pixel difference]({{assets.diff}})

Animated comparison: ![Animated comparison]({{assets.animation}})

## {{name}}.rs

{{source_fence}}rust
{{source}}
{{source_fence}}

## {{skeleton_file}}

{{skeleton_fence}}{{skeleton_lang}}
{{skeleton}}
{{skeleton_fence}}
"#;

/// Generator for comparison reports
pub struct ReportGenerator {
    format: ReportFormat,
    engine: TemplateEngine,
}

impl ReportGenerator {
    /// Create a generator for the given format
    pub fn new(format: ReportFormat) -> Result<Self, PortError> {
        let (escaping, template) = match format {
            ReportFormat::Html => (Escaping::Html, HTML_TEMPLATE),
            ReportFormat::Markdown => (Escaping::Raw, MARKDOWN_TEMPLATE),
        };

        let mut engine = TemplateEngine::new(escaping);
        engine.register_template(format.extension(), template)?;
        Ok(Self { format, engine })
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Render the report for one example
    pub fn generate_report(
        &self,
        name: &str,
        source: &str,
        skeleton: &SkeletonDocument,
        analysis: &Analysis,
    ) -> Result<ReportDocument, PortError> {
        let title = if analysis.title.is_empty() {
            naming::display_title(name)
        } else {
            analysis.title.clone()
        };

        let context = ReportContext {
            name,
            title,
            skeleton_file: skeleton.file_name(),
            source,
            skeleton: &skeleton.content,
            source_fence: code_fence(source),
            skeleton_fence: code_fence(&skeleton.content),
            skeleton_lang: skeleton.extension,
            source_lines: source.lines().count(),
            skeleton_lines: skeleton.content.lines().count(),
            color_count: analysis.colors.len(),
            window_size: analysis.window_size.to_string(),
            warnings: analysis.warnings.iter().map(String::as_str).collect(),
            assets: AssetRefs::for_example(name),
        };

        Ok(ReportDocument {
            name: name.to_string(),
            format: self.format,
            content: self.engine.render(self.format.extension(), &context)?,
        })
    }
}

/// Backtick fence longer than any backtick run inside `text`
fn code_fence(text: &str) -> String {
    let longest = text
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}
