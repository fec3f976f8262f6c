use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, trace};

use crate::storage::LeadStore;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStorageCheck {
    pub status: String,
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leads_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u32,
    pub storage: HealthStorageCheck,
    pub response_time_ms: u32,
}

/// Health Service
///
/// 直接查询 storage，不经过 LeadService。
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        storage: web::Data<Arc<LeadStore>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let backend = storage.backend_name().to_string();

        let storage_status =
            match tokio::time::timeout(Duration::from_secs(5), storage.count()).await {
                Ok(Ok(count)) => HealthStorageCheck {
                    status: "healthy".to_string(),
                    backend,
                    leads_count: Some(count),
                    error: None,
                },
                Ok(Err(e)) => {
                    error!("Storage health check failed: {}", e);
                    HealthStorageCheck {
                        status: "unhealthy".to_string(),
                        backend,
                        leads_count: None,
                        error: Some(e.message().to_string()),
                    }
                }
                Err(_) => {
                    error!("Storage health check timeout");
                    HealthStorageCheck {
                        status: "unhealthy".to_string(),
                        backend,
                        leads_count: None,
                        error: Some("timeout".to_string()),
                    }
                }
            };

        let now = chrono::Utc::now();
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u32;
        let is_healthy = storage_status.status == "healthy";

        let health = HealthResponse {
            status: storage_status.status.clone(),
            timestamp: now.to_rfc3339(),
            uptime: uptime_seconds,
            storage: storage_status,
            response_time_ms: start_time.elapsed().as_millis() as u32,
        };

        let status = if is_healthy {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };

        HttpResponse::build(status)
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(health)
    }

    // 就绪检查，只返回 200
    pub async fn readiness_check() -> impl Responder {
        trace!("Received readiness check request");

        HttpResponse::Ok()
            .append_header(("Content-Type", "text/plain"))
            .body("OK")
    }

    // 存活检查
    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}

/// Health 路由配置
pub fn health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/ready", web::get().to(HealthService::readiness_check))
        .route("/ready", web::head().to(HealthService::readiness_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}
