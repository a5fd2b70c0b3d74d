use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use modelbridge::cli::{Cli, Command};
use modelbridge::config::Settings;
use modelbridge::convert::{self, Converter, TargetCollection};
use modelbridge::output::{self, OutputSink};
use modelbridge::{display, logging};

/// Main entry point for the modelbridge CLI
///
/// Loads settings (defaults, config files, environment, then flags), sets up
/// logging and runs one of two commands:
/// - Convert: converts the registry listing and saves or prints it
/// - List: converts the registry listing and shows it as a table
///
/// # Errors
/// Any fetch, decode or write failure ends the run with a non-zero exit code
/// before anything is written.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load settings first
    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    cli.apply(&mut settings);
    settings.validate().context("Invalid settings")?;

    let _guard = logging::init(&settings.logging).context("Failed to initialize logging")?;
    info!("modelbridge starting up");

    if let Some(path) = cli.ignored_output(&settings) {
        warn!("list prints a table; ignoring output path {}", path.display());
    }

    let collection = load_collection(&cli, &settings)?;

    match cli.command() {
        Command::Convert => {
            let sink = settings.sink();
            output::write(&collection, &sink)
                .with_context(|| format!("Failed to save output to {}", sink))?;

            if let OutputSink::File(path) = &sink {
                eprintln!(
                    "{} {}",
                    "Successfully converted and saved to:".green(),
                    path.display()
                );
            }
        }
        Command::List => display::display_models_table(&collection),
    }

    Ok(())
}

/// Read the listing from `--input` or fetch it from the registry, then convert it
fn load_collection(cli: &Cli, settings: &Settings) -> Result<TargetCollection> {
    if let Some(path) = &cli.input {
        info!("Reading registry listing from {}", path.display());
        let raw = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return convert::convert_bytes(&raw)
            .with_context(|| format!("Failed to convert {}", path.display()));
    }

    let url = &settings.source.url;
    let converter = Converter::new(settings.timeout()).context("Failed to create HTTP client")?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_message(format!("Fetching models from {}", url));

    let result = converter.convert_url(url);
    pb.finish_and_clear();

    let collection = result.with_context(|| format!("Failed to convert models from {}", url))?;
    info!("Converted {} models", collection.len());
    Ok(collection)
}
