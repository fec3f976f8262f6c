//! CLI command implementations

mod config_gen;
mod leads;

pub use config_gen::config_generate;
pub use leads::{count_leads, export_leads, list_leads};
