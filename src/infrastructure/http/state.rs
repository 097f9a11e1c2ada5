//! Application State
//!
//! 包含推理端口及所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{GetModelInfoHandler, PredictHandler, PredictorPort};

/// 应用状态
///
/// 推理器在启动时加载一次，之后只读共享
pub struct AppState {
    // ========== Ports ==========
    pub predictor: Arc<dyn PredictorPort>,

    // ========== Command Handlers ==========
    pub predict_handler: PredictHandler,

    // ========== Query Handlers ==========
    pub model_info_handler: GetModelInfoHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(predictor: Arc<dyn PredictorPort>) -> Self {
        Self {
            predictor: predictor.clone(),
            predict_handler: PredictHandler::new(predictor.clone()),
            model_info_handler: GetModelInfoHandler::new(predictor),
        }
    }
}
