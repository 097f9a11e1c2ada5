//! HTTP Middleware
//!
//! - 请求 ID 中间件

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// 请求 ID 响应头
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求 ID 中间件
///
/// 沿用客户端传入的 `x-request-id`，否则生成 UUID v4，
/// 并在整个请求处理期间挂到 tracing span 上
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = tracing::info_span!("request", request_id = %request_id);
    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
