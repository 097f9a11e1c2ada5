//! Data Transfer Objects

use serde::{Deserialize, Serialize};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式（/api 下的接口使用）
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Predict DTOs
// ============================================================================

/// POST /predict 请求体
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub features: Vec<f64>,
}

/// POST /predict 响应体
#[derive(Debug, Serialize)]
pub struct PredictResponseDto {
    pub predicted_value: f64,
}

// ============================================================================
// Model DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct LayerDto {
    pub units: usize,
    pub activation: String,
}

#[derive(Debug, Serialize)]
pub struct ModelInfoDto {
    pub name: String,
    pub input_dim: usize,
    pub output_dim: usize,
    pub layers: Vec<LayerDto>,
    pub parameter_count: usize,
    pub model_checksum: String,
    pub scaler_checksum: String,
    pub loaded_at: String,
}
