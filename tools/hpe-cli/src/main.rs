//! HPE CLI — Command-line interface for skeleton remapping and event inspection.
//!
//! Usage:
//!   hpe remap <INPUT>     Convert detector skeletons to DHP19 SKLT records
//!   hpe joint <NAME>      Show where a DHP19 joint comes from in each body model
//!   hpe events <FILE>     Summarize a packed event-camera recording

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hpe_common::config::{HpeConfig, LoggingConfig};

mod commands;

#[derive(Parser)]
#[command(
    name = "hpe",
    about = "Event-based human pose estimation utilities",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert detector skeletons (JSON lines) to the DHP19 layout
    Remap {
        /// JSON-lines file of detections
        input: PathBuf,

        /// Source body model: coco18|body25 (defaults to the config file)
        #[arg(short, long)]
        model: Option<String>,

        /// Abort on wrongly sized detections instead of skipping them
        #[arg(long)]
        strict: bool,

        /// Emit JSON records instead of SKLT lines
        #[arg(long)]
        json: bool,
    },

    /// Show the canonical index of a joint and its source indices
    Joint {
        /// Canonical joint name (e.g. shoulderR)
        name: String,
    },

    /// Summarize a file of packed 64-bit event records
    Events {
        /// Path to the raw event file
        path: PathBuf,

        /// Number of leading events to print
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = HpeConfig::load();

    // Initialize logging
    let logging = if cli.verbose {
        LoggingConfig {
            level: "debug".to_string(),
            ..config.logging.clone()
        }
    } else {
        config.logging.clone()
    };
    hpe_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Remap {
            input,
            model,
            strict,
            json,
        } => {
            let model = model.unwrap_or_else(|| config.remap.source_model.clone());
            commands::remap::run(input, &model, strict || config.remap.strict, json)
        }
        Commands::Joint { name } => commands::joint::run(&name),
        Commands::Events { path, limit } => commands::events::run(path, limit),
    }
}
