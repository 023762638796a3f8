//! CLI logic for the Figures demo driver.
//!
//! This module loads configuration, runs the demo scene and writes the
//! resulting drawing.

pub mod error;
pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use config::load_config;
pub use error::{ConfigError, FiguresError};

use std::io::{self, Write};

use log::info;

use figures_core::scene::Scene;

/// Run the Figures CLI application, printing to stdout.
///
/// # Errors
///
/// Returns `FiguresError` for:
/// - Configuration loading errors
/// - Errors writing to stdout
pub fn run(args: &Args) -> Result<(), FiguresError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(args, &mut out)
}

/// Run the Figures CLI application, writing the drawing to `out`.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_to(args: &Args, out: &mut impl Write) -> Result<(), FiguresError> {
    info!(config_path:? = args.config; "Drawing demo scene");

    let app_config = config::load_config(args.config.as_ref())?;

    let mut scene = Scene::demo();
    let drawing = scene.run(app_config.scene());

    drawing.write_to(out)?;
    out.flush()?;

    info!(lines = drawing.len(); "Drawing written");

    Ok(())
}
