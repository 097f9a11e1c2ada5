//! Regression Context - 回归模型
//!
//! 职责:
//! - 全连接回归网络（Dense 层序列）
//! - 激活函数
//! - 单样本前向推理

mod activation;
mod errors;
mod network;

pub use activation::Activation;
pub use errors::RegressionError;
pub use network::{DenseLayer, DenseNetwork, LayerParams, NetworkParams};
