//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Predictor）
//! - commands: 推理命令及处理器
//! - queries: 模型信息查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{handlers::PredictHandler, PredictCommand, PredictResponse};

pub use error::ApplicationError;

pub use ports::{LayerSummary, ModelMetadata, PredictError, Prediction, PredictorPort};

pub use queries::{
    handlers::{GetModelInfoHandler, ModelInfoResponse},
    GetModelInfo,
};
