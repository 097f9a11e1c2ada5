//! Model Queries

/// 获取已加载模型信息
#[derive(Debug, Clone, Default)]
pub struct GetModelInfo;
