//! Preprocessing Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScalerError {
    #[error("特征维度不匹配: 期望 {expected}, 实际 {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("缩放器至少需要一个特征")]
    NoFeatures,

    #[error("data_min 与 data_max 长度不一致: {min_len} != {max_len}")]
    LengthMismatch { min_len: usize, max_len: usize },

    #[error("无效的 feature_range: [{lo}, {hi}]")]
    InvalidRange { lo: f64, hi: f64 },

    #[error("第 {index} 个特征的缩放参数不是有限数值")]
    NonFiniteParameter { index: usize },
}
