/*!
 * Handlebars wrapper shared by the skeleton and report generators.
 */

use handlebars::{no_escape, Handlebars};
use serde::Serialize;

use crate::errors::PortError;

/// Escaping applied to interpolated values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escaping {
    /// Values are inserted verbatim (generated code, Markdown)
    Raw,
    /// Values are HTML-escaped
    Html,
}

/// Template engine holding a fixed set of registered templates
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create an engine with the given escaping policy
    pub fn new(escaping: Escaping) -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        if escaping == Escaping::Raw {
            handlebars.register_escape_fn(no_escape);
        }
        Self { handlebars }
    }

    /// Register a template under `name`
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<(), PortError> {
        self.handlebars.register_template_string(name, template)?;
        Ok(())
    }

    /// Render a registered template
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, PortError> {
        Ok(self.handlebars.render(name, data)?)
    }
}
