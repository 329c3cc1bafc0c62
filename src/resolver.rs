//! Template discovery for Forge.
//! Resolves the set of applicable templates for a target platform version
//! by name-prefix filtering, in a stable order so generation output is
//! reproducible across runs.

use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Output-path resolution policy for one template, decided once at
/// resolution time rather than at each rendering call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputPath {
    /// The caller supplied the output path
    Explicit(PathBuf),
    /// The template's own destination marker supplies the output path
    SelfDeclared,
}

/// A template source plus its output-path resolution policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    /// Template file name (e.g. `Scaffold_Entity.java`)
    pub name: String,
    /// Path to the template source
    pub source: PathBuf,
    /// How the rendered output path is determined
    pub output: OutputPath,
}

impl TemplateDescriptor {
    /// Creates a descriptor whose output path comes from the template's
    /// own destination marker.
    pub fn self_declared<S: Into<String>, P: Into<PathBuf>>(name: S, source: P) -> Self {
        Self { name: name.into(), source: source.into(), output: OutputPath::SelfDeclared }
    }

    /// Creates a descriptor with an explicit output path.
    pub fn explicit<S: Into<String>, P: Into<PathBuf>>(
        name: S,
        source: P,
        target: PathBuf,
    ) -> Self {
        Self { name: name.into(), source: source.into(), output: OutputPath::Explicit(target) }
    }
}

/// Resolves the set of applicable templates for a platform version.
///
/// Templates live under `<templates_root>/<platform_version>/`. Only files
/// whose name starts with `prefix` are included; everything else is a
/// library or partial template and is never rendered on its own. The
/// result is sorted lexicographically by name, so two successive
/// resolutions of the same template set return the identical sequence.
///
/// # Errors
/// * `Error::TemplateDoesNotExistsError` if the version directory is missing
pub fn resolve_templates<P: AsRef<Path>>(
    templates_root: P,
    platform_version: &str,
    prefix: &str,
) -> Result<Vec<TemplateDescriptor>> {
    let version_dir = templates_root.as_ref().join(platform_version);
    if !version_dir.is_dir() {
        return Err(Error::TemplateDoesNotExistsError {
            template_dir: version_dir.display().to_string(),
        });
    }

    let mut descriptors = Vec::new();
    for entry in WalkDir::new(&version_dir) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if !name.starts_with(prefix) {
            debug!("Skipping non-target template {}", name);
            continue;
        }

        descriptors.push(TemplateDescriptor::self_declared(name, entry.path()));
    }

    descriptors.sort_by(|a, b| a.name.cmp(&b.name));

    debug!("Resolved {} templates for version {}", descriptors.len(), platform_version);
    Ok(descriptors)
}
