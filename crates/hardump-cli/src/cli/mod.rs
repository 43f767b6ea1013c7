//! CLI for the hardump HAR recorder.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hardump_core::config;
use std::path::PathBuf;

use commands::{run_config, run_replay};

/// Top-level CLI for the hardump HAR recorder.
#[derive(Debug, Parser)]
#[command(name = "hardump")]
#[command(about = "hardump: record proxied HTTP flows as HAR", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Replay a JSON-lines flow capture through the recorder.
    Replay {
        /// Capture file, one flow per line.
        flows: PathBuf,

        /// Recorder arguments: the output file, or `-` for a console dump.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print the effective configuration and where it lives.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Replay { flows, args } => run_replay(&flows, &args, cfg)?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
