//! Predict Command Handlers

use std::sync::Arc;

use crate::application::commands::{PredictCommand, PredictResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::PredictorPort;
use crate::domain::FeatureVector;

// ============================================================================
// Predict
// ============================================================================

/// Predict Handler
pub struct PredictHandler {
    predictor: Arc<dyn PredictorPort>,
}

impl PredictHandler {
    pub fn new(predictor: Arc<dyn PredictorPort>) -> Self {
        Self { predictor }
    }

    pub async fn handle(&self, command: PredictCommand) -> Result<PredictResponse, ApplicationError> {
        let features = FeatureVector::new(command.features)?;
        let feature_count = features.len();

        let prediction = self.predictor.predict(features).await?;

        tracing::debug!(
            features = feature_count,
            predicted_value = prediction.value,
            "Prediction completed"
        );

        Ok(PredictResponse {
            predicted_value: prediction.value,
        })
    }
}
