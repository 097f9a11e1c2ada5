//! 应用层 - 命令
//!
//! CQRS 命令侧：推理请求

mod predict_commands;

pub mod handlers;

pub use predict_commands::*;
