//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// leadintake - consent-gated lead intake service
#[derive(Parser)]
#[command(name = "leadintake")]
#[command(version)]
#[command(about = "Consent-gated lead intake service", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Inspect stored leads
    Leads {
        #[command(subcommand)]
        action: LeadCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum LeadCommands {
    /// Print the number of stored leads
    Count,

    /// Show the most recent leads
    List {
        /// Maximum number of leads to show
        #[arg(long, default_value_t = 20)]
        limit: u64,
    },

    /// Export all leads to CSV
    Export {
        /// Output file path (default: leads_export_<timestamp>.csv)
        file_path: Option<String>,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
