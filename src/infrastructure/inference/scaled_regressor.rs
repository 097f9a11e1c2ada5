//! Scaled Regressor
//!
//! 缩放器 + 回归网络的组合推理器:
//! `prediction = network.predict(scaler.transform(features))`

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::application::ports::{
    LayerSummary, ModelMetadata, PredictError, Prediction, PredictorPort,
};
use crate::config::ModelConfig;
use crate::domain::{DenseNetwork, FeatureVector, MinMaxScaler, RegressionError, ScalerError};
use crate::infrastructure::adapters::{ArtifactError, ArtifactLoader, LoadedArtifact};

/// 已加载的缩放回归器
///
/// 加载后只读，可通过 `Arc<dyn PredictorPort>` 在请求间共享
pub struct ScaledRegressor {
    name: String,
    network: DenseNetwork,
    scaler: MinMaxScaler,
    model_checksum: String,
    scaler_checksum: String,
    loaded_at: DateTime<Utc>,
}

impl ScaledRegressor {
    /// 组合模型与缩放器，校验两者特征维度一致
    pub fn new(
        name: impl Into<String>,
        model: LoadedArtifact<DenseNetwork>,
        scaler: LoadedArtifact<MinMaxScaler>,
    ) -> Result<Self, ArtifactError> {
        if model.value.input_dim() != scaler.value.n_features() {
            return Err(ArtifactError::Incompatible(format!(
                "model expects {} features but scaler was fitted on {}",
                model.value.input_dim(),
                scaler.value.n_features()
            )));
        }

        Ok(Self {
            name: name.into(),
            network: model.value,
            scaler: scaler.value,
            model_checksum: model.checksum,
            scaler_checksum: scaler.checksum,
            loaded_at: Utc::now(),
        })
    }

    /// 按配置加载模型与缩放器
    pub fn load(config: &ModelConfig) -> Result<Self, ArtifactError> {
        let loader = ArtifactLoader::new();
        let model = loader.load_model(&config.model_path)?;
        let scaler = loader.load_scaler(&config.scaler_path)?;

        let regressor = Self::new(config.name.clone(), model, scaler)?;
        tracing::info!(
            model = %regressor.name,
            input_dim = regressor.network.input_dim(),
            "Predictor ready"
        );
        Ok(regressor)
    }

    /// 同步推理
    pub fn predict_sync(&self, features: &FeatureVector) -> Result<f64, PredictError> {
        let scaled = self.scaler.transform(features).map_err(|e| match e {
            ScalerError::DimensionMismatch { expected, actual } => {
                PredictError::DimensionMismatch { expected, actual }
            }
            other => PredictError::InvalidInput(other.to_string()),
        })?;

        self.network.predict(&scaled).map_err(|e| match e {
            e @ RegressionError::InputOutOfRange { .. } => PredictError::InvalidInput(e.to_string()),
            other => PredictError::ModelFailure(other.to_string()),
        })
    }
}

#[async_trait]
impl PredictorPort for ScaledRegressor {
    async fn predict(&self, features: FeatureVector) -> Result<Prediction, PredictError> {
        let value = self.predict_sync(&features)?;
        Ok(Prediction { value })
    }

    fn metadata(&self) -> ModelMetadata {
        ModelMetadata {
            name: self.name.clone(),
            input_dim: self.network.input_dim(),
            output_dim: self.network.output_dim(),
            layers: self
                .network
                .layers()
                .iter()
                .map(|l| LayerSummary {
                    units: l.units(),
                    activation: l.activation().to_string(),
                })
                .collect(),
            parameter_count: self.network.parameter_count(),
            model_checksum: self.model_checksum.clone(),
            scaler_checksum: self.scaler_checksum.clone(),
            loaded_at: self.loaded_at,
        }
    }
}
