use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored lead row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub zip: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub page_url: Option<String>,
    pub consent_text: String,
    pub brand: String,
    pub domain: String,
    pub submitted_at: Option<String>,
}

/// A validated submission ready to be written.
///
/// `id` and `created_at` are assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub zip: String,
    pub ip: String,
    pub user_agent: Option<String>,
    pub page_url: Option<String>,
    pub consent_text: String,
    pub brand: String,
    pub domain: String,
    pub submitted_at: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StorageConfig {
    pub storage_type: String,
    pub schema_ready: bool,
}
