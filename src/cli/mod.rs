use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Settings;

/// Convert a model runner's registry listing into the Ollama model list format
#[derive(Parser, Debug)]
#[command(name = "modelbridge")]
#[command(about = "Convert registry model listings to the Ollama /api/tags format")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to config/default.toml and config/local.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Registry URL serving the model list
    #[arg(short = 'd', long = "source", visible_alias = "dmr", global = true)]
    pub source: Option<String>,

    /// Output file for the converted JSON (prints to stdout if not specified)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Read the registry listing from a file instead of fetching it
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Registry request timeout in seconds
    #[arg(short, long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Convert the registry models and save or print the result (default)
    Convert,
    /// Show the converted models as a table
    List,
}

impl Cli {
    /// Command to run; `convert` when none was given
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Convert)
    }

    /// Output path a `list` run would ignore, if one is configured
    pub fn ignored_output<'a>(&self, settings: &'a Settings) -> Option<&'a Path> {
        match self.command() {
            Command::List => settings.output.path.as_deref(),
            Command::Convert => None,
        }
    }

    /// Command-line flags take precedence over every configuration source
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(url) = &self.source {
            settings.source.url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.source.timeout = timeout;
        }
        if let Some(path) = &self.output {
            settings.output.path = Some(path.clone());
        }
    }
}
