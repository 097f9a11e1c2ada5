//! Model Info Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GetModelInfo;
use crate::infrastructure::http::dto::{ApiResponse, LayerDto, ModelInfoDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// GET /api/model
pub async fn get_model_info(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<ModelInfoDto>>, ApiError> {
    let info = state.model_info_handler.handle(GetModelInfo);

    Ok(Json(ApiResponse::success(ModelInfoDto {
        name: info.name,
        input_dim: info.input_dim,
        output_dim: info.output_dim,
        layers: info
            .layers
            .into_iter()
            .map(|l| LayerDto {
                units: l.units,
                activation: l.activation,
            })
            .collect(),
        parameter_count: info.parameter_count,
        model_checksum: info.model_checksum,
        scaler_checksum: info.scaler_checksum,
        loaded_at: info.loaded_at,
    })))
}
