//! Forge is a multi-stage scaffolding pipeline for service projects.
//! Given a declarative specification it generates a module skeleton,
//! renders a service descriptor, invokes an external build tool to
//! materialize the service tier, renders per-application templates and
//! reconciles the resulting directory tree.

/// External build tool invocation
pub mod build;

/// Command-line interface module for the Forge application
pub mod cli;

/// Common constants used throughout the application
pub mod constants;

/// Rendering context construction
/// Assembles the bindings exposed to a single template render call
pub mod context;

/// Error types and handling for the Forge application
pub mod error;

/// Rendering a single template to its resolved output location
pub mod generator;

/// Identifier case conversion used for paths and generated symbols
pub mod naming;

/// Pipeline orchestration
/// Combines all components into the end-to-end generation flow
pub mod pipeline;

/// Directory reconciliation
/// Flattens the nested tree produced by the external build tool
pub mod reconciler;

/// Template rendering engine
pub mod renderer;

/// Template discovery and output-path resolution policy
pub mod resolver;

/// Specification model and loading
/// Supports JSON and YAML formats (forge.json, forge.yml, forge.yaml)
pub mod spec;
