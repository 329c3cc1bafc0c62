//! Specification model for Forge.
//! The specification is the declarative input document describing the
//! project and its application entries. It is parsed once per invocation
//! and immutable thereafter.

use crate::constants::SPEC_FILES;
use crate::error::{Error, Result};
use crate::naming;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root specification document.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spec {
    /// Project name in its canonical camel case form
    pub project_name: String,

    /// Namespace identifier for generated code (e.g. `com.example.blog`)
    pub package_name: String,

    /// Target platform version; selects the template set
    pub platform_version: String,

    /// Application entries, in document order
    #[serde(default)]
    pub applications: Vec<Application>,
}

/// One named generation unit within a specification.
///
/// Beyond the name, the fields are opaque to the pipeline: they are passed
/// through to templates untouched, in document order.
#[derive(Debug, Serialize, Deserialize)]
pub struct Application {
    pub name: String,

    #[serde(flatten)]
    pub fields: IndexMap<String, serde_json::Value>,
}

/// Loads the specification from its conventional location inside
/// `search_dir`, trying multiple file formats.
/// Supports: forge.json, forge.yml, forge.yaml
///
/// # Arguments
/// * `search_dir` - Directory containing the specification document
///
/// # Returns
/// * `Result<Spec>` - Parsed and validated specification
///
/// # Errors
/// * `Error::SpecNotFoundError` if no specification file exists
/// * `Error::SpecParseError` if the document is malformed or violates an
///   invariant; no partial objects are returned
pub fn load_spec<P: AsRef<Path>>(search_dir: P) -> Result<Spec> {
    for file in SPEC_FILES {
        let spec_path = search_dir.as_ref().join(file);
        if !spec_path.exists() {
            continue;
        }

        debug!("Loading specification from {}", spec_path.display());
        let content = std::fs::read_to_string(&spec_path).map_err(Error::IoError)?;
        return parse_spec(&content);
    }

    Err(Error::SpecNotFoundError {
        search_dir: search_dir.as_ref().display().to_string(),
        tried: SPEC_FILES.join(", "),
    })
}

/// Parses and validates specification content.
/// Tries JSON first, then YAML.
pub fn parse_spec(content: &str) -> Result<Spec> {
    let spec: Spec = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::SpecParseError(format!("invalid document: {}", e)))?,
    };

    // The project name must be convertible to a filesystem-safe dash case
    // name; fail at load time rather than halfway through generation.
    naming::to_dash_case(&spec.project_name)?;

    if !is_valid_package_name(&spec.package_name) {
        return Err(Error::SpecParseError(format!(
            "'{}' is not a valid package name",
            spec.package_name
        )));
    }

    Ok(spec)
}

fn is_valid_package_name(package_name: &str) -> bool {
    !package_name.is_empty()
        && package_name.split('.').all(|segment| {
            segment.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
                && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}
