//! Domain Layer - 领域层
//!
//! 包含三个上下文:
//! - Features Context: 输入特征校验
//! - Preprocessing Context: Min-Max 缩放
//! - Regression Context: 全连接回归网络

pub mod features;
pub mod preprocessing;
pub mod regression;

pub use features::{FeatureError, FeatureVector};
pub use preprocessing::{MinMaxScaler, ScalerError, ScalerParams};
pub use regression::{Activation, DenseLayer, DenseNetwork, RegressionError};
