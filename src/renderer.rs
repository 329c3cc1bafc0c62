//! Template renderer and rendering functionality for Forge.
//! Wraps MiniJinja behind a narrow trait so the pipeline can be exercised
//! with a fake engine in tests.

use crate::error::{Error, Result};
use crate::naming;
use minijinja::{Environment, ErrorKind};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
///
/// The naming utilities are exposed to templates as filters
/// (`dash_case`, `camel_case`) so generated paths and symbols use the
/// same conversions as the pipeline itself.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with the naming filters
    /// registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_filter("dash_case", dash_case_filter);
        env.add_filter("camel_case", camel_case_filter);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if:
    ///   - Template addition fails
    ///   - Template retrieval fails
    ///   - Template rendering fails
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("temp", template).map_err(Error::MinijinjaError)?;

        let tmpl = env.get_template("temp").map_err(Error::MinijinjaError)?;

        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}

fn dash_case_filter(value: String) -> std::result::Result<String, minijinja::Error> {
    naming::to_dash_case(&value)
        .map_err(|e| minijinja::Error::new(ErrorKind::InvalidOperation, e.to_string()))
}

fn camel_case_filter(value: String) -> std::result::Result<String, minijinja::Error> {
    naming::to_camel_case(&value)
        .map_err(|e| minijinja::Error::new(ErrorKind::InvalidOperation, e.to_string()))
}
