//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use super::commands::config::ConfigArgs;
use super::commands::serve::ServeArgs;

#[derive(Parser, Debug)]
#[command(name = "legacy-bridge")]
#[command(about = "Legacy Bridge - caching, retrying front for a legacy API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Print the effective configuration as YAML
    Config(ConfigArgs),
}
