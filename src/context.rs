//! Rendering context construction for Forge templates.
//! Assembles the name/value bindings exposed to a single template render
//! call. The key set is fixed and known in advance; every template may
//! reference any subset of it.

use crate::spec::{Application, Spec};
use std::path::Path;

/// Builds the context for one template render call.
///
/// Pure, no I/O. The root specification and author are always populated;
/// `app` and `output_path` are independently optional. Project-level
/// templates (such as the service descriptor) are rendered with
/// `app = None`, which templates observe as a null binding rather than a
/// missing one.
///
/// # Arguments
/// * `spec` - Root specification document
/// * `app` - Application entry currently being generated, if any
/// * `output_path` - Output path override hint, if any
/// * `author` - Author recorded in generated file headers
pub fn build_context(
    spec: &Spec,
    app: Option<&Application>,
    output_path: Option<&Path>,
    author: &str,
) -> serde_json::Value {
    serde_json::json!({
        "spec": spec,
        "app": app,
        "output_path": output_path.map(|p| p.display().to_string()),
        "author": author,
    })
}
