//! Home Handlers

use axum::http::Method;

use crate::infrastructure::http::error::ApiError;

/// 服务运行横幅
pub const BANNER: &str = "✅ Sustainable Fashion AI API is running! Use the /predict endpoint.";

/// GET /
pub async fn home() -> &'static str {
    BANNER
}

/// 未匹配路由
pub async fn fallback() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

/// 路由存在但方法不匹配
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(format!("Method {} not allowed", method))
}
