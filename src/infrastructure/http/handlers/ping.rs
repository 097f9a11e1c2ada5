//! Ping Handler
//!
//! 健康检查

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Ping endpoint - 健康检查
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    let status = if state.predictor.health_check().await {
        "ok"
    } else {
        "degraded"
    };

    Json(PingResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
    })
}
