//! Rendering a single template to its output location.
//! Implements the two-tier output-path policy: an explicit path from the
//! descriptor wins; otherwise the template's own destination marker is
//! consulted. Having neither is a fatal configuration error, not a
//! silent no-op.

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::resolver::{OutputPath, TemplateDescriptor};
use log::debug;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Recognized destination marker, expected on the template's first line:
/// `{# destination: path/to/output #}`. The path portion is itself a
/// template and is rendered with the same context as the body.
fn destination_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        Regex::new(r"^\{#-?\s*destination:\s*(?<path>.+?)\s*-?#\}[ \t]*\r?\n?").unwrap()
    })
}

/// Splits a template source into its body and the destination declared by
/// its marker, if any. The marker line is not part of the rendered output.
pub fn split_destination(source: &str) -> (&str, Option<&str>) {
    match destination_marker().captures(source) {
        Some(captures) => {
            let declared = captures.name("path").map(|m| m.as_str());
            let body = &source[captures.get(0).map_or(0, |m| m.end())..];
            (body, declared)
        }
        None => (source, None),
    }
}

/// Renders one template against one context to its resolved output path.
///
/// Self-declared destinations are resolved relative to `target_root`.
/// Rendering overwrites any existing file at the resolved path; staged
/// re-runs are expected to re-render the same paths.
///
/// # Returns
/// * `Result<PathBuf>` - The path the rendered output was written to
///
/// # Errors
/// * `Error::MissingOutputPathError` if the descriptor has no explicit
///   path and the template declares no destination
/// * `Error::MinijinjaError` if rendering the body or the declared path fails
pub fn render_template(
    engine: &dyn TemplateRenderer,
    descriptor: &TemplateDescriptor,
    context: &serde_json::Value,
    target_root: &Path,
) -> Result<PathBuf> {
    let source = fs::read_to_string(&descriptor.source).map_err(Error::IoError)?;
    let (body, declared) = split_destination(&source);

    let target_path = match &descriptor.output {
        OutputPath::Explicit(path) => path.clone(),
        OutputPath::SelfDeclared => {
            let declared = declared.ok_or_else(|| Error::MissingOutputPathError {
                template_name: descriptor.name.clone(),
            })?;
            let rendered_path = engine.render(declared, context)?;
            target_root.join(rendered_path)
        }
    };

    debug!("Rendering {} to {}", descriptor.name, target_path.display());

    let content = engine.render(body, context)?;
    write_file(&target_path, &content)?;
    Ok(target_path)
}

fn write_file(dest_path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(dest_path, content).map_err(Error::IoError)
}
