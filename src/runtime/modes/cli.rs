//! CLI mode
//!
//! Delegates to the operator command implementations.

use crate::cli::Commands;
use crate::interfaces::cli::CliError;

pub async fn run_cli(command: Commands) -> Result<(), CliError> {
    crate::interfaces::cli::run_cli_command(command).await
}
