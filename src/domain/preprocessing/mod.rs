//! Preprocessing Context - 特征预处理
//!
//! 职责:
//! - 已拟合的 min-max 缩放器
//! - 推理前的特征仿射变换

mod errors;
mod scaler;

pub use errors::ScalerError;
pub use scaler::{MinMaxScaler, ScalerParams};
