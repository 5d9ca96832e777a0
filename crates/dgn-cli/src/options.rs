//! Command-line options and configuration loading

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dgn_core::GenerationConfig;

/// Output format for the generated dungeon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// ASCII map, up at the top
    #[default]
    Ascii,
    /// Pretty-printed JSON
    Json,
}

/// Generate a chain of connected rooms
#[derive(Parser, Debug)]
#[command(name = "dungeon-gen")]
#[command(author, version, about = "Generate a room-chain dungeon layout", long_about = None)]
pub struct Options {
    /// Seed for the layout (random if omitted)
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Number of rooms to aim for
    #[arg(short = 'n', long = "rooms")]
    pub rooms: Option<usize>,

    /// Placement retries per anchor
    #[arg(short = 'r', long = "retries")]
    pub retries: Option<u32>,

    /// JSON file with a generation configuration
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Ascii)]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Options {
    /// Configuration from the file (if any) with flag overrides applied.
    pub fn generation_config(&self) -> Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("could not read config file '{}'", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("invalid config file '{}'", path.display()))?
            }
            None => GenerationConfig::default(),
        };
        if let Some(rooms) = self.rooms {
            config.target_rooms = rooms;
        }
        if let Some(retries) = self.retries {
            config.retry_budget = retries;
        }
        config.validate()?;
        Ok(config)
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "dgn_core=debug,dgn_cli=debug"
        } else {
            "dgn_core=info,dgn_cli=info"
        }
    }
}
