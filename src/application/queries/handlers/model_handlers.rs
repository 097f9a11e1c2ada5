//! Model Query Handlers

use std::sync::Arc;

use crate::application::ports::{LayerSummary, ModelMetadata, PredictorPort};
use crate::application::queries::GetModelInfo;

// ============================================================================
// Response DTOs
// ============================================================================

/// 模型信息响应
#[derive(Debug, Clone)]
pub struct ModelInfoResponse {
    pub name: String,
    pub input_dim: usize,
    pub output_dim: usize,
    pub layers: Vec<LayerSummary>,
    pub parameter_count: usize,
    pub model_checksum: String,
    pub scaler_checksum: String,
    pub loaded_at: String,
}

impl From<ModelMetadata> for ModelInfoResponse {
    fn from(meta: ModelMetadata) -> Self {
        Self {
            name: meta.name,
            input_dim: meta.input_dim,
            output_dim: meta.output_dim,
            layers: meta.layers,
            parameter_count: meta.parameter_count,
            model_checksum: meta.model_checksum,
            scaler_checksum: meta.scaler_checksum,
            loaded_at: meta.loaded_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetModelInfo Handler
pub struct GetModelInfoHandler {
    predictor: Arc<dyn PredictorPort>,
}

impl GetModelInfoHandler {
    pub fn new(predictor: Arc<dyn PredictorPort>) -> Self {
        Self { predictor }
    }

    pub fn handle(&self, _query: GetModelInfo) -> ModelInfoResponse {
        ModelInfoResponse::from(self.predictor.metadata())
    }
}
