//! Verdant - 可持续时尚回归预测服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Features: 输入特征校验
//! - Preprocessing: Min-Max 缩放器
//! - Regression: 全连接回归网络
//!
//! 应用层 (application/):
//! - Ports: PredictorPort
//! - Commands: 预测命令处理器
//! - Queries: 模型信息查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Inference: ScaledRegressor（缩放器 + 回归网络）
//! - Adapters: 模型文件加载、Fake 推理器

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
