//! Forge's main application entry point and orchestration logic.
//! Handles command-line argument parsing, logger setup and the overall
//! generation flow.

use std::time::Duration;

use forge::{
    build::GradleInvoker,
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    pipeline::Pipeline,
    renderer::MiniJinjaRenderer,
    spec::load_spec,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Arguments
/// * `args` - Parsed command line arguments
///
/// # Flow
/// 1. Loads the specification from the output directory
/// 2. Runs the generation pipeline against it
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let invoker = GradleInvoker::new(args.build_timeout.map(Duration::from_secs));

    println!("Started creating service scaffolding. Fetching the specification");
    let spec = load_spec(&args.output_dir)?;

    let pipeline = Pipeline::new(
        &engine,
        &invoker,
        args.templates,
        args.output_dir,
        args.author,
        args.task,
    );
    pipeline.run(&spec)?;

    println!("Done.");
    Ok(())
}
