//! Predictor Port - 回归推理抽象
//!
//! 定义单样本推理的抽象接口，具体实现在 infrastructure/inference 层

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::FeatureVector;

/// 推理错误
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Model failure: {0}")]
    ModelFailure(String),
}

/// 推理结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub value: f64,
}

/// 单层概要
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSummary {
    pub units: usize,
    pub activation: String,
}

/// 已加载模型的元数据
#[derive(Debug, Clone)]
pub struct ModelMetadata {
    pub name: String,
    pub input_dim: usize,
    pub output_dim: usize,
    pub layers: Vec<LayerSummary>,
    pub parameter_count: usize,
    /// 模型文件 MD5
    pub model_checksum: String,
    /// 缩放器文件 MD5
    pub scaler_checksum: String,
    pub loaded_at: DateTime<Utc>,
}

/// Predictor Port
///
/// 进程启动时加载一次，之后只读共享
#[async_trait]
pub trait PredictorPort: Send + Sync {
    /// 缩放特征并执行推理
    async fn predict(&self, features: FeatureVector) -> Result<Prediction, PredictError>;

    /// 模型元数据
    fn metadata(&self) -> ModelMetadata;

    /// 检查推理器是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
