//! Read-only lead commands: count, list, export

use std::fs::File;
use std::io::BufWriter;
use std::sync::Arc;

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::storage::{Lead, LeadStore};
use crate::utils::csv_handler::{generate_export_filename, write_leads_csv};

pub async fn count_leads(storage: Arc<LeadStore>) -> Result<(), CliError> {
    let count = storage.count().await?;
    println!("{} {}", "Stored leads:".bold(), count.to_string().green());
    Ok(())
}

pub async fn list_leads(storage: Arc<LeadStore>, limit: u64) -> Result<(), CliError> {
    let leads = storage.list_recent(limit).await?;

    if leads.is_empty() {
        println!("{} No leads found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Most recent leads:".bold().green());
    println!();
    for lead in &leads {
        println!("  {}", format_lead_line(lead));
    }
    println!();
    println!(
        "{} Showing {} lead(s)",
        "ℹ".bold().blue(),
        leads.len().to_string().green()
    );
    Ok(())
}

fn format_lead_line(lead: &Lead) -> String {
    format!(
        "{} {} {} {} <{}> {} {} {}",
        format!("#{}", lead.id).cyan(),
        lead.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string().dimmed(),
        lead.first_name,
        lead.last_name,
        lead.email.blue(),
        lead.phone,
        lead.zip,
        format!("(ip: {})", lead.ip.as_deref().unwrap_or("-")).dimmed()
    )
}

pub async fn export_leads(
    storage: Arc<LeadStore>,
    file_path: Option<String>,
) -> Result<(), CliError> {
    let leads = storage.load_all().await?;
    if leads.is_empty() {
        println!("{} No leads to export", "ℹ".bold().blue());
        return Ok(());
    }

    let output_path = file_path.unwrap_or_else(generate_export_filename);
    let file = File::create(&output_path).map_err(|e| {
        CliError::CommandError(format!(
            "Failed to create export file '{}': {}",
            output_path, e
        ))
    })?;

    let written = write_leads_csv(BufWriter::new(file), &leads)?;
    println!(
        "{} Exported {} lead(s) to {}",
        "✓".bold().green(),
        written.to_string().green(),
        output_path.blue()
    );
    Ok(())
}
