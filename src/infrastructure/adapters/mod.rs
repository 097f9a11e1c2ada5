//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod artifacts;
pub mod predictor;

pub use artifacts::*;
pub use predictor::*;
