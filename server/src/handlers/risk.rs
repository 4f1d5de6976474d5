use axum::{extract::State, Json};
use tibasasa_core::{FeatureRecord, RiskAssessment};

use super::ApiError;
use crate::models::ModelStatus;
use crate::state::AppState;

/// GET /risk/status
pub async fn model_status(State(state): State<AppState>) -> Json<ModelStatus> {
    Json(ModelStatus {
        available: state.scorer.is_available(),
        reason: state.scorer.unavailable_reason().map(str::to_string),
    })
}

/// POST /risk/predict
/// Readmission risk for one patient; 503 when the model did not load
pub async fn predict_risk(
    State(state): State<AppState>,
    Json(features): Json<FeatureRecord>,
) -> Result<Json<RiskAssessment>, ApiError> {
    let assessment = state.scorer.assess(&features)?;
    tracing::info!(
        "✓ Readmission risk predicted: {} ({})",
        assessment.display,
        assessment.label
    );
    Ok(Json(assessment))
}
