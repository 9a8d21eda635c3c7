//! HTTP Middleware
//!
//! HTTP 状态码错误日志中间件

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::Level;

use super::dto::PROCESSING_TIME_HEADER;

/// 错误响应的日志级别
///
/// 带 X-Processing-Time 的响应来自合成流程，失败已在 handler 中记录，只留 debug；
/// 其余（如路由 404、提取器拒绝）按 4xx → WARN、5xx → ERROR 记录。
fn log_level(status: StatusCode, has_processing_time: bool) -> Option<Level> {
    if !status.is_client_error() && !status.is_server_error() {
        return None;
    }
    if has_processing_time {
        return Some(Level::DEBUG);
    }
    if status.is_server_error() {
        Some(Level::ERROR)
    } else {
        Some(Level::WARN)
    }
}

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志，附带处理耗时（如有）
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();
    let processing_time = response
        .headers()
        .get(PROCESSING_TIME_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let status_code = status.as_u16();
    let processing_time_ms = processing_time.as_deref().unwrap_or("-");
    let level = log_level(status, processing_time.is_some());
    if level == Some(Level::ERROR) {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status_code,
            "HTTP server error"
        );
    } else if level == Some(Level::WARN) {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status_code,
            "HTTP client error"
        );
    } else if level.is_some() {
        tracing::debug!(
            method = %method,
            uri = %uri,
            status = %status_code,
            processing_time_ms = %processing_time_ms,
            "HTTP error response"
        );
    }

    response
}
