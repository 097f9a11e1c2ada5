//! Fake Predictor - 用于测试的推理器
//!
//! 始终返回固定的预测值，不加载任何模型文件

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::{
    LayerSummary, ModelMetadata, PredictError, Prediction, PredictorPort,
};
use crate::domain::FeatureVector;

/// Fake Predictor 配置
#[derive(Debug, Clone)]
pub struct FakePredictorConfig {
    /// 模型名称
    pub name: String,
    /// 期望的特征数
    pub input_dim: usize,
    /// 固定返回的预测值
    pub value: f64,
}

impl Default for FakePredictorConfig {
    fn default() -> Self {
        Self {
            name: "fake".to_string(),
            input_dim: 4,
            value: 0.0,
        }
    }
}

/// Fake Predictor
///
/// 仍然校验特征维度，便于测试错误路径
pub struct FakePredictor {
    config: FakePredictorConfig,
}

impl FakePredictor {
    pub fn new(config: FakePredictorConfig) -> Self {
        tracing::info!(
            name = %config.name,
            input_dim = config.input_dim,
            "FakePredictor initialized"
        );
        Self { config }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(FakePredictorConfig::default())
    }
}

#[async_trait]
impl PredictorPort for FakePredictor {
    async fn predict(&self, features: FeatureVector) -> Result<Prediction, PredictError> {
        if features.len() != self.config.input_dim {
            return Err(PredictError::DimensionMismatch {
                expected: self.config.input_dim,
                actual: features.len(),
            });
        }

        tracing::debug!(
            features = features.len(),
            "FakePredictor: returning fixed value"
        );

        Ok(Prediction {
            value: self.config.value,
        })
    }

    fn metadata(&self) -> ModelMetadata {
        ModelMetadata {
            name: self.config.name.clone(),
            input_dim: self.config.input_dim,
            output_dim: 1,
            layers: vec![LayerSummary {
                units: 1,
                activation: "linear".to_string(),
            }],
            parameter_count: self.config.input_dim + 1,
            model_checksum: String::new(),
            scaler_checksum: String::new(),
            loaded_at: Utc::now(),
        }
    }
}
