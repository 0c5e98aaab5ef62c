//! update-deployment binary
//!
//! Command-line entry point for patching `deployment.toml`.

use clap::Parser;
use deployment_patch::cli::{map_error, Cli, RunContext};
use deployment_patch::config::{ConfigLoader, Settings};
use deployment_patch::error::PatchError;
use deployment_patch::logging::init_logging;
use std::path::Path;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();
    let color_hint = !cli.no_color && std::env::var_os("NO_COLOR").is_none();

    let settings = match build_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", map_error(&e, color_hint));
            process::exit(e.exit_code());
        }
    };

    // Initialize logging before any file is touched
    if let Err(e) = init_logging(&settings.logging) {
        eprintln!("{}", map_error(&e, settings.color));
        process::exit(e.exit_code());
    }

    info!(file = %settings.file.display(), "update-deployment starting");

    let context = RunContext::new(settings);
    match context.execute(&cli) {
        Ok(output) => {
            info!("Patch completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!(category = ?e.category(), "Patch failed: {}", e);
            eprintln!("{}", map_error(&e, context.settings().color));
            process::exit(e.exit_code());
        }
    }
}

/// Build settings from the settings file and environment, then apply CLI flags.
/// Precedence: CLI flags override environment override settings file override defaults.
fn build_settings(cli: &Cli) -> Result<Settings, PatchError> {
    let mut settings = ConfigLoader::load(Path::new("."))?;

    if let Some(ref file) = cli.file {
        settings.file = file.clone();
    }
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        settings.color = false;
        settings.logging.color = false;
    }
    if cli.verbose {
        settings.logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        settings.logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        settings.logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        settings.logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        settings.logging.file = Some(file.clone());
        if cli.log_output.is_none() {
            settings.logging.output = "file".to_string();
        }
    }

    settings.validate()?;
    Ok(settings)
}
