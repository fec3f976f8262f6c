//! SeaORM storage backend for leads
//!
//! Supports SQLite, MySQL/MariaDB and PostgreSQL. The `leads` table is
//! provisioned lazily: the first write (or read) in a process runs the
//! idempotent migration, later calls skip it.

mod connection;
mod converters;
mod mutations;
mod query;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::errors::{LeadError, Result};
use crate::storage::models::StorageConfig;

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{model_to_lead, new_lead_to_active_model};

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(LeadError::database_config(format!(
            "Cannot infer database type from URL: {}. Supported: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// Lead storage over one process-wide connection pool
#[derive(Clone)]
pub struct LeadStore {
    db: DatabaseConnection,
    backend_name: String,
    /// 每个进程只成功执行一次建表
    schema_ready: Arc<OnceCell<()>>,
}

impl LeadStore {
    pub async fn new(database_url: &str, backend_name: &str) -> Result<Self> {
        if database_url.is_empty() {
            return Err(LeadError::database_config("database_url is empty"));
        }

        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url).await?
        } else {
            connect_generic(database_url, backend_name).await?
        };

        warn!("{} storage connected.", backend_name.to_uppercase());
        Ok(Self::from_connection(db, backend_name))
    }

    /// Wrap an existing connection. The schema is not touched until first use.
    pub fn from_connection(db: DatabaseConnection, backend_name: &str) -> Self {
        Self {
            db,
            backend_name: backend_name.to_string(),
            schema_ready: Arc::new(OnceCell::new()),
        }
    }

    /// Ensure the `leads` table exists.
    ///
    /// Safe to call on every request. A failed attempt is not remembered, so
    /// the next call tries again.
    pub async fn ensure_schema(&self) -> Result<()> {
        self.schema_ready
            .get_or_try_init(|| async {
                debug!("Provisioning leads schema");
                run_migrations(&self.db).await
            })
            .await?;
        Ok(())
    }

    pub fn is_schema_ready(&self) -> bool {
        self.schema_ready.initialized()
    }

    pub fn get_backend_config(&self) -> StorageConfig {
        StorageConfig {
            storage_type: self.backend_name.clone(),
            schema_ready: self.is_schema_ready(),
        }
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    /// Close the pool. Clones of this store become unusable afterwards.
    pub async fn close(&self) -> Result<()> {
        self.db
            .clone()
            .close()
            .await
            .map_err(|e| LeadError::database_connection(e.to_string()))
    }
}
