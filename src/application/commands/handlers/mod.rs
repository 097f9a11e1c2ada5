//! Command Handlers 实现

mod predict_handlers;

pub use predict_handlers::*;
