//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::PredictError;
use crate::domain::FeatureError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 特征维度不匹配
    #[error("Expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// 推理失败
    #[error("Inference error: {0}")]
    InferenceError(String),
}

impl From<FeatureError> for ApplicationError {
    fn from(err: FeatureError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<PredictError> for ApplicationError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::InvalidInput(msg) => Self::ValidationError(msg),
            PredictError::DimensionMismatch { expected, actual } => {
                Self::DimensionMismatch { expected, actual }
            }
            PredictError::ModelFailure(msg) => Self::InferenceError(msg),
        }
    }
}
