//! 应用层 - 查询（只读操作）

mod model_queries;

pub mod handlers;

pub use model_queries::*;
