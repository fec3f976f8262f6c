//! Mode routing
//!
//! - Server mode (HTTP server, the default)
//! - CLI mode (operator commands)

pub mod cli;
pub mod server;

pub use cli::run_cli;
pub use server::run_server;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Server,
    Cli,
}

/// No subcommand or `serve` runs the server; anything else is a CLI command.
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    match command {
        None | Some(Commands::Serve) => Mode::Server,
        Some(_) => Mode::Cli,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::LeadCommands;

    #[test]
    fn test_detect_mode() {
        assert_eq!(detect_mode(None), Mode::Server);
        assert_eq!(detect_mode(Some(&Commands::Serve)), Mode::Server);
        assert_eq!(
            detect_mode(Some(&Commands::Leads {
                action: LeadCommands::Count
            })),
            Mode::Cli
        );
    }
}
