//! Regression Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    #[error("模型至少需要一个 Dense 层")]
    NoLayers,

    #[error("输入维度不能为 0")]
    ZeroInputDim,

    #[error("第 {layer} 层形状无效: {reason}")]
    InvalidLayerShape { layer: usize, reason: String },

    #[error("第 {layer} 层输入维度不匹配: 期望 {expected}, 实际 {actual}")]
    LayerMismatch {
        layer: usize,
        expected: usize,
        actual: usize,
    },

    #[error("第 {layer} 层包含非有限参数")]
    NonFiniteParameter { layer: usize },

    #[error("输入维度不匹配: 期望 {expected}, 实际 {actual}")]
    InputMismatch { expected: usize, actual: usize },

    #[error("第 {index} 个输入超出 f32 表示范围")]
    InputOutOfRange { index: usize },

    #[error("模型输出不是有限数值")]
    NonFiniteOutput,
}
