//! Predict Commands

/// 单样本预测命令
#[derive(Debug, Clone)]
pub struct PredictCommand {
    pub features: Vec<f64>,
}

/// 单样本预测响应
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictResponse {
    pub predicted_value: f64,
}
