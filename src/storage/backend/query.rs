//! Read-only operations, used by health checks and the operator CLI.

use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};

use super::LeadStore;
use super::converters::model_to_lead;
use crate::errors::{LeadError, Result};
use crate::storage::Lead;

use migration::entities::lead;

impl LeadStore {
    pub async fn count(&self) -> Result<u64> {
        self.ensure_schema().await?;

        lead::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| LeadError::database_operation(e.to_string()))
    }

    pub async fn get(&self, id: i32) -> Result<Option<Lead>> {
        self.ensure_schema().await?;

        let model = lead::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LeadError::database_operation(e.to_string()))?;
        Ok(model.map(model_to_lead))
    }

    /// Newest first.
    pub async fn list_recent(&self, limit: u64) -> Result<Vec<Lead>> {
        self.ensure_schema().await?;

        let models = lead::Entity::find()
            .order_by_desc(lead::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| LeadError::database_operation(e.to_string()))?;
        Ok(models.into_iter().map(model_to_lead).collect())
    }

    /// Oldest first, in insertion order.
    pub async fn load_all(&self) -> Result<Vec<Lead>> {
        self.ensure_schema().await?;

        let models = lead::Entity::find()
            .order_by_asc(lead::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LeadError::database_operation(e.to_string()))?;
        Ok(models.into_iter().map(model_to_lead).collect())
    }
}
