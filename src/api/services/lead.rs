//! `POST /api/lead`
//!
//! Response body is always `{ "ok": bool, "error"?: string }`:
//! 200 on insert, 400 on validation failure (including an oversized body),
//! 500 on anything else.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::config::get_config;
use crate::errors::LeadError;
use crate::services::{LeadService, LeadSubmission};
use crate::utils::client_ip;

pub const PAYLOAD_TOO_LARGE: &str = "Request body too large.";

/// 500 响应在关闭错误透传时使用的固定文案
pub const GENERIC_INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LeadResponse {
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(message.into()),
        }
    }
}

pub struct LeadApiService;

impl LeadApiService {
    pub async fn submit_lead(
        req: HttpRequest,
        payload: web::Payload,
        service: web::Data<Arc<LeadService>>,
    ) -> impl Responder {
        let limit = get_config().api.max_payload_bytes;
        let parsed = read_body(payload, limit)
            .await
            .and_then(|body| LeadSubmission::from_json_bytes(&body));
        let result = match parsed {
            Ok(submission) => service.submit(submission, client_ip(&req)).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(_) => json_response(StatusCode::OK, LeadResponse::success()),
            Err(e) => error_response(&e),
        }
    }
}

/// 读取请求体（带大小限制），超限按校验错误返回 400
async fn read_body(mut payload: web::Payload, limit: usize) -> Result<Vec<u8>, LeadError> {
    let mut body = Vec::new();
    while let Some(chunk) = payload.next().await {
        let bytes = chunk.map_err(|e| LeadError::malformed_payload(e.to_string()))?;
        if body.len() + bytes.len() > limit {
            return Err(LeadError::validation(PAYLOAD_TOO_LARGE));
        }
        body.extend_from_slice(&bytes);
    }
    Ok(body)
}

fn json_response(status: StatusCode, body: LeadResponse) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(body)
}

/// 校验错误原样返回；其余错误记录日志，按配置决定是否透传底层信息
fn error_response(err: &LeadError) -> HttpResponse {
    if err.is_validation() {
        return json_response(err.http_status(), LeadResponse::failure(err.message()));
    }

    error!("Lead submission failed: {}", err.format_simple());

    let message = if get_config().api.expose_internal_errors {
        err.message()
    } else {
        GENERIC_INTERNAL_ERROR
    };
    json_response(err.http_status(), LeadResponse::failure(message))
}

/// Lead 路由配置
pub fn lead_routes() -> actix_web::Scope {
    web::scope("/api").route("/lead", web::post().to(LeadApiService::submit_lead))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body_omits_error() {
        let body = serde_json::to_string(&LeadResponse::success()).unwrap();
        assert_eq!(body, r#"{"ok":true}"#);
    }

    #[test]
    fn test_failure_body() {
        let body = serde_json::to_string(&LeadResponse::failure("Missing required fields.")).unwrap();
        assert_eq!(body, r#"{"ok":false,"error":"Missing required fields."}"#);
    }
}
