//! Features Context - 模型输入特征
//!
//! 职责:
//! - 请求特征的校验（非空、有限值）

mod errors;
mod value_objects;

pub use errors::FeatureError;
pub use value_objects::FeatureVector;
