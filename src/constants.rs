//! Common constants used throughout the Forge application.

/// Supported specification file names
pub const SPEC_FILES: [&str; 3] = ["forge.json", "forge.yml", "forge.yaml"];

/// Prefix of templates that produce scaffolding output directly.
/// Templates without this prefix are libraries/partials and are never
/// rendered on their own.
pub const TEMPLATE_PREFIX: &str = "Scaffold_";

/// Project-level template that renders the service descriptor
pub const SERVICE_DESCRIPTOR_TEMPLATE: &str = "service.xml";

/// Name of the rendered service descriptor file
pub const SERVICE_DESCRIPTOR_FILE: &str = "service.xml";

/// Build tool task that materializes the service tier from the descriptor
pub const BUILD_SERVICE_TASK: &str = "buildService";

/// Launcher script for unix-like systems
pub const GRADLEW_UNIX_FILE_NAME: &str = "gradlew";

/// Launcher script for Windows
pub const GRADLEW_WINDOWS_FILE_NAME: &str = "gradlew.bat";
