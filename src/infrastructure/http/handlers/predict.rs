//! Predict Handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::PredictCommand;
use crate::infrastructure::http::dto::{PredictRequest, PredictResponseDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /predict
///
/// 请求: `{"features": [f64, ...]}`
/// 响应: `{"predicted_value": f64}`
pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponseDto>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let cmd = PredictCommand {
        features: req.features,
    };

    let result = state.predict_handler.handle(cmd).await?;

    Ok(Json(PredictResponseDto {
        predicted_value: result.predicted_value,
    }))
}
