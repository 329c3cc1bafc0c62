//! Error handling for the Forge application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Forge operations.
///
/// Each variant corresponds to one stage of the generation pipeline
/// (parse, io, render, external build, reconcile) so callers can react
/// to a specific failure kind.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The specification document was not found at the conventional location
    #[error("No specification found in '{search_dir}' (tried: {tried}).")]
    SpecNotFoundError { search_dir: String, tried: String },

    /// The specification document exists but violates the schema
    #[error("Invalid specification: {0}.")]
    SpecParseError(String),

    /// An identifier cannot be converted to a filesystem-safe name
    #[error("Invalid identifier: '{identifier}'.")]
    InvalidIdentifierError { identifier: String },

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// A template declared no destination and no explicit output path was given
    #[error(
        "Template '{template_name}' declares no destination and no explicit output path was given."
    )]
    MissingOutputPathError { template_name: String },

    /// The version-specific template directory does not exist
    #[error("Template directory does not exist: '{template_dir}'.")]
    TemplateDoesNotExistsError { template_dir: String },

    /// The external build tool exited unsuccessfully
    #[error("Build tool failed running task '{task}': {detail}.")]
    BuildToolError { task: String, detail: String },

    /// The external build tool did not finish within the configured timeout
    #[error("Build tool timed out after {seconds}s running task '{task}'.")]
    BuildTimeoutError { task: String, seconds: u64 },

    /// Represents errors that occur while flattening the generated directory tree
    #[error("Reconcile error: {0}.")]
    ReconcileError(String),
}

impl Error {
    /// Returns true for expected, user-recoverable conditions (a malformed
    /// specification, a missing template set, a failing build tool).
    /// Everything else is reported with full diagnostic detail.
    pub fn is_process_error(&self) -> bool {
        matches!(
            self,
            Error::SpecNotFoundError { .. }
                | Error::SpecParseError(_)
                | Error::InvalidIdentifierError { .. }
                | Error::MissingOutputPathError { .. }
                | Error::TemplateDoesNotExistsError { .. }
                | Error::BuildToolError { .. }
                | Error::BuildTimeoutError { .. }
        )
    }
}

/// Convenience type alias for Results with Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Process errors are reported concisely and exit with status code 1;
/// unexpected errors are reported with full detail and exit with status
/// code 2.
pub fn default_error_handler(err: Error) -> ! {
    if err.is_process_error() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
    eprintln!("Unexpected error: {:?}", err);
    std::process::exit(2);
}
