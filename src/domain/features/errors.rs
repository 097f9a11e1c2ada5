//! Features Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    #[error("特征向量不能为空")]
    Empty,

    #[error("第 {index} 个特征不是有限数值")]
    NonFinite { index: usize },
}
