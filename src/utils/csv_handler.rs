//! CSV export of stored leads

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use crate::errors::Result;
use crate::storage::Lead;

/// One CSV row, column order matches the `leads` table
#[derive(Debug, Serialize)]
pub struct LeadCsvRow<'a> {
    pub id: i32,
    pub created_at: String,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub zip: &'a str,
    pub ip: &'a str,
    pub user_agent: &'a str,
    pub page_url: &'a str,
    pub consent_text: &'a str,
    pub brand: &'a str,
    pub domain: &'a str,
    pub submitted_at: &'a str,
}

impl<'a> From<&'a Lead> for LeadCsvRow<'a> {
    fn from(lead: &'a Lead) -> Self {
        Self {
            id: lead.id,
            created_at: lead.created_at.to_rfc3339(),
            first_name: &lead.first_name,
            last_name: &lead.last_name,
            email: &lead.email,
            phone: &lead.phone,
            zip: &lead.zip,
            ip: lead.ip.as_deref().unwrap_or_default(),
            user_agent: lead.user_agent.as_deref().unwrap_or_default(),
            page_url: lead.page_url.as_deref().unwrap_or_default(),
            consent_text: &lead.consent_text,
            brand: &lead.brand,
            domain: &lead.domain,
            submitted_at: lead.submitted_at.as_deref().unwrap_or_default(),
        }
    }
}

/// Write leads as CSV with a header row. Returns the number of data rows.
pub fn write_leads_csv<W: Write>(writer: W, leads: &[Lead]) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    for lead in leads {
        csv_writer.serialize(LeadCsvRow::from(lead))?;
    }
    csv_writer.flush()?;
    Ok(leads.len())
}

pub fn generate_export_filename() -> String {
    format!("leads_export_{}.csv", Utc::now().format("%Y%m%d_%H%M%S"))
}
