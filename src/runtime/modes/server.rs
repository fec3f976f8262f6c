//! Server mode
//!
//! Builds the actix-web application and runs it until Ctrl+C.

use actix_cors::Cors;
use actix_web::{
    App, HttpServer,
    middleware::{Compress, Condition, DefaultHeaders},
    web,
};
use anyhow::{Context, Result};
use tracing::warn;

use crate::api::middleware::RequestTrace;
use crate::api::services::{AppStartTime, health_routes, lead_routes};
use crate::config::{CorsConfig, get_config};
use crate::runtime::lifetime;

/// Validate CORS configuration at startup (runs once)
fn validate_cors_config(cors_config: &CorsConfig) {
    if cors_config.enabled && cors_config.allowed_origins.is_empty() {
        warn!(
            "CORS enabled but allowed_origins is empty. \
            No cross-origin lead submissions will be accepted. \
            Set allowed_origins explicitly or use '[\"*\"]' for any origin."
        );
    }
}

/// Build CORS middleware for the landing page origin(s)
///
/// Only `POST` with a JSON body is needed by the form.
pub fn build_cors_middleware(cors_config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["POST", "GET", "HEAD"])
        .allowed_header(actix_web::http::header::CONTENT_TYPE)
        .max_age(cors_config.max_age as usize);

    if cors_config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    let startup = lifetime::startup::prepare_server_startup()
        .await
        .inspect_err(|e| tracing::error!("Server startup failed: {:#}", e))?;

    let storage = startup.storage.clone();
    let lead_service = startup.lead_service.clone();
    let storage_for_shutdown = startup.storage.clone();

    let config = get_config();
    let cors_config = config.cors.clone();
    validate_cors_config(&cors_config);

    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} worker threads", cpu_count);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Condition::new(
                cors_config.enabled,
                build_cors_middleware(&cors_config),
            ))
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new().add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .wrap(RequestTrace)
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(lead_service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .service(lead_routes())
            .service(health_routes())
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .client_disconnect_timeout(std::time::Duration::from_millis(1000))
    .workers(cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown(&storage_for_shutdown) => {
            warn!("Graceful shutdown complete");
        }
    }

    Ok(())
}
