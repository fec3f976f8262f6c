use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use crate::services::LeadService;
use crate::storage::{LeadStore, StorageFactory};

pub struct StartupContext {
    pub storage: Arc<LeadStore>,
    pub lead_service: Arc<LeadService>,
}

/// 启动时先建表，请求路径上的 ensure_schema 随后直接返回
///
/// 失败只记录日志不退出（例如多个实例同时对空库建表），
/// 下一次写入会重试。
pub async fn provision_schema(storage: &LeadStore) -> bool {
    match storage.ensure_schema().await {
        Ok(()) => true,
        Err(e) => {
            error!(
                "Failed to provision leads schema at startup, will retry on first write: {}",
                e
            );
            false
        }
    }
}

/// 准备服务器启动的上下文：连接存储、建表、构建 LeadService
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create()
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", storage.backend_name());

    provision_schema(&storage).await;

    let lead_service = Arc::new(LeadService::from_config(storage.clone()));

    debug!("Pre-startup completed in {:?}", start_time.elapsed());
    Ok(StartupContext {
        storage,
        lead_service,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_store() -> (LeadStore, tempfile::TempDir) {
        let dir = tempfile::TempDir::new().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("startup.db").display());
        let store = LeadStore::new(&url, "sqlite").await.unwrap();
        (store, dir)
    }

    #[tokio::test]
    async fn test_provision_schema_ok() {
        let (store, _dir) = temp_store().await;
        assert!(provision_schema(&store).await);
        assert!(store.is_schema_ready());
    }

    #[tokio::test]
    async fn test_provision_failure_does_not_abort() {
        let (store, _dir) = temp_store().await;
        store.close().await.unwrap();

        // 建表失败时返回 false，不向上传播错误
        assert!(!provision_schema(&store).await);
        assert!(!store.is_schema_ready());
    }
}
