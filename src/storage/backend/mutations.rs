//! Write path: leads are insert-only.

use chrono::Utc;
use sea_orm::ActiveModelTrait;
use tracing::debug;

use super::LeadStore;
use super::converters::{model_to_lead, new_lead_to_active_model};
use crate::errors::{LeadError, Result};
use crate::storage::{Lead, NewLead};

impl LeadStore {
    /// Ensure the schema, then insert one row in a single statement.
    pub async fn insert(&self, lead: NewLead) -> Result<Lead> {
        self.ensure_schema().await?;

        let model = new_lead_to_active_model(&lead, Utc::now())
            .insert(&self.db)
            .await
            .map_err(|e| LeadError::database_operation(e.to_string()))?;

        debug!("Lead row inserted: id={}", model.id);
        Ok(model_to_lead(model))
    }
}
