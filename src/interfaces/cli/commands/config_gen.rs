//! Generate config command

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;

/// Write a sample configuration file built from defaults
pub async fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| "config.example.toml".to_string());

    // 文件已存在且未指定 --force 时交互确认
    if !force && Path::new(&path).exists() && !confirm_overwrite(&path)? {
        println!("{}", "Aborted.".red());
        return Ok(());
    }

    StaticConfig::default().save_to_file(&path).map_err(|e| {
        CliError::CommandError(format!("Unable to write configuration file: {}", e))
    })?;

    println!(
        "{} {}",
        "Configuration file generated:".green(),
        path.blue()
    );
    println!(
        "  {}",
        "Set brand.name / brand.domain and consent.canonical_text before going live.".yellow()
    );
    Ok(())
}

fn confirm_overwrite(path: &str) -> Result<bool, CliError> {
    print!(
        "{} {} {}",
        "File already exists:".yellow(),
        path.blue(),
        "Overwrite? [y/N] ".yellow()
    );
    io::stdout()
        .flush()
        .map_err(|e| CliError::CommandError(e.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| CliError::CommandError(e.to_string()))?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}
