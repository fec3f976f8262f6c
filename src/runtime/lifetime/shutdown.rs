use std::time::Duration;

use tokio::signal;
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::storage::LeadStore;

/// 关闭数据库连接池的超时时间（秒）
const SHUTDOWN_TIMEOUT_SECS: u64 = 10;

/// Wait for Ctrl+C, then close the connection pool.
pub async fn listen_for_shutdown(storage: &LeadStore) {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, closing storage...");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }

    match timeout(Duration::from_secs(SHUTDOWN_TIMEOUT_SECS), storage.close()).await {
        Ok(Ok(())) => info!("Storage closed"),
        Ok(Err(e)) => error!("Failed to close storage: {}", e),
        Err(_) => error!(
            "Closing storage timed out after {} seconds",
            SHUTDOWN_TIMEOUT_SECS
        ),
    }
}
