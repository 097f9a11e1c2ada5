//! Inference - 推理器实现

mod scaled_regressor;

pub use scaled_regressor::ScaledRegressor;
