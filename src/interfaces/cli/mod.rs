//! CLI interface module

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands, LeadCommands};
use crate::storage::StorageFactory;
use commands::{config_generate, count_leads, export_leads, list_leads};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    CommandError(String),
}

impl CliError {
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::LeadError> for CliError {
    fn from(err: crate::errors::LeadError) -> Self {
        CliError::StorageError(err.to_string())
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Serve => Err(CliError::CommandError(
            "`serve` is handled by server mode".to_string(),
        )),
        // 生成配置不需要数据库连接
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force).await,
        Commands::Leads { action } => {
            let storage = StorageFactory::create().await?;
            match action {
                LeadCommands::Count => count_leads(storage).await,
                LeadCommands::List { limit } => list_leads(storage, limit).await,
                LeadCommands::Export { file_path } => export_leads(storage, file_path).await,
            }
        }
    }
}
