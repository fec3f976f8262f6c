//! Panic hook
//!
//! Writes a crash report to `crash.log` and prints it to stderr. Server mode
//! prints the full backtrace; CLI mode prints a one-line message.

use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Server,
    Cli,
}

/// Install custom panic hook
pub fn install_panic_hook(mode: RunMode) {
    panic::set_hook(Box::new(move |panic_info| {
        let payload = panic_info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        let backtrace = std::backtrace::Backtrace::force_capture();
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

        tracing::error!(%location, "panic: {}", message);

        if let Err(e) = write_crash_log(&timestamp, &message, &location, &backtrace) {
            eprintln!("Failed to write crash log: {}", e);
        }

        match mode {
            RunMode::Server => display_server_panic(&message, &location, &backtrace),
            RunMode::Cli => {
                eprintln!();
                eprintln!("leadintake panicked: {}", message);
                eprintln!("Details saved to crash.log");
                eprintln!();
            }
        }
    }));
}

fn display_server_panic(message: &str, location: &str, backtrace: &std::backtrace::Backtrace) {
    use colored::Colorize;

    let rule = "═══════════════════════════════════════════════════".red().bold();
    eprintln!();
    eprintln!("{}", rule);
    eprintln!("{}", "PANIC".red().bold());
    eprintln!("{}", rule);
    eprintln!("{} {}", "Reason:".yellow().bold(), message.white());
    eprintln!("{} {}", "Location:".yellow().bold(), location.white());
    eprintln!("{}", "Backtrace:".yellow().bold());
    eprintln!("{}", format!("{:?}", backtrace).dimmed());
    eprintln!("{}", "Details saved to crash.log".cyan());
    eprintln!("{}", rule);
    eprintln!();
}

fn write_crash_log(
    timestamp: &str,
    message: &str,
    location: &str,
    backtrace: &std::backtrace::Backtrace,
) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("crash.log")?;

    writeln!(file, "==========================================")?;
    writeln!(file, "Crash Report - {}", timestamp)?;
    writeln!(file, "Message: {}", message)?;
    writeln!(file, "Location: {}", location)?;
    writeln!(file, "\nBacktrace:\n{:?}", backtrace)?;
    writeln!(file, "==========================================\n")?;

    Ok(())
}
