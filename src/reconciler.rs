//! Directory reconciliation for Forge.
//! The external build tool refuses to overwrite an existing project, so
//! its output ends up nested under a directory named after the project.
//! This module merges that nested tree into the intended destination root
//! and normalizes execute permissions on the generated launcher scripts.

use crate::constants::{GRADLEW_UNIX_FILE_NAME, GRADLEW_WINDOWS_FILE_NAME};
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Merges the contents of `nested_dir` into `dest_root`, overwriting on
/// conflict, then deletes `nested_dir`.
///
/// Succeeds without doing anything if `nested_dir` does not exist.
///
/// # Errors
/// * `Error::ReconcileError` if the nested tree cannot be walked
/// * `Error::IoError` if a copy or the final delete fails
pub fn reconcile<P: AsRef<Path>>(nested_dir: P, dest_root: P) -> Result<()> {
    let nested_dir = nested_dir.as_ref();
    let dest_root = dest_root.as_ref();

    if !nested_dir.is_dir() {
        debug!("Nothing to reconcile, {} does not exist", nested_dir.display());
        return Ok(());
    }

    for entry in WalkDir::new(nested_dir) {
        let entry = entry.map_err(|e| Error::ReconcileError(e.to_string()))?;
        let relative_path = entry
            .path()
            .strip_prefix(nested_dir)
            .map_err(|e| Error::ReconcileError(e.to_string()))?;
        if relative_path.as_os_str().is_empty() {
            continue;
        }

        let target_path = dest_root.join(relative_path);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path).map_err(Error::IoError)?;
        } else {
            if let Some(parent) = target_path.parent() {
                fs::create_dir_all(parent).map_err(Error::IoError)?;
            }
            fs::copy(entry.path(), &target_path).map_err(Error::IoError)?;
        }
    }

    fs::remove_dir_all(nested_dir).map_err(Error::IoError)?;

    set_launcher_permissions(dest_root);
    Ok(())
}

/// Sets the execute bit on the launcher scripts at the destination root.
/// Best effort: absence of either script is not an error.
fn set_launcher_permissions(dest_root: &Path) {
    for name in [GRADLEW_UNIX_FILE_NAME, GRADLEW_WINDOWS_FILE_NAME] {
        let script = dest_root.join(name);
        if !script.exists() {
            continue;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Ok(metadata) = fs::metadata(&script) {
                let mut permissions = metadata.permissions();
                permissions.set_mode(permissions.mode() | 0o755);
                if let Err(e) = fs::set_permissions(&script, permissions) {
                    debug!("Could not set execute permission on {}: {}", script.display(), e);
                }
            }
        }
    }
}
