//! 客户端地址提取
//!
//! 只读取 `X-Forwarded-For`，取第一个逗号分隔的值并去除空白；
//! 头缺失、不是合法文本或首个值为空时返回 `"unknown"`。

use actix_web::HttpRequest;
use actix_web::http::header::HeaderMap;

/// 无法确定客户端地址时写入的占位值
pub const UNKNOWN_IP: &str = "unknown";

/// 取转发头中的第一个地址
pub fn first_forwarded_token(value: &str) -> Option<&str> {
    value
        .split(',')
        .next()
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// 从 HeaderMap 提取客户端地址
pub fn client_ip_from_headers(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(first_forwarded_token)
        .unwrap_or(UNKNOWN_IP)
        .to_string()
}

/// 从 HttpRequest 提取客户端地址
pub fn client_ip(req: &HttpRequest) -> String {
    client_ip_from_headers(req.headers())
}
