use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tibasasa_core::{ScheduleError, ScoringError};
use uuid::Uuid;

use crate::models::OperationOutcome;

/// Error response carrying an [`OperationOutcome`] body.
#[derive(Debug, thiserror::Error)]
#[error("{status}: {}", .outcome.diagnostics().unwrap_or("request failed"))]
pub struct ApiError {
    pub status: StatusCode,
    pub outcome: OperationOutcome,
}

impl ApiError {
    /// Create not found error
    pub fn not_found(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            outcome: OperationOutcome::error_with_location("not-found", message, location),
        }
    }

    pub fn unknown_session(id: Uuid) -> Self {
        Self::not_found(format!("Session {} not found", id), format!("Session/{}", id))
    }

    /// Create unavailable error for a disabled feature
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            outcome: OperationOutcome::error("transient", message),
        }
    }
}

impl From<ScheduleError> for ApiError {
    fn from(err: ScheduleError) -> Self {
        let location = match &err {
            ScheduleError::PatientNotFound(id) => format!("Patient/{}", id),
            ScheduleError::DoctorNotFound(id) => format!("Doctor/{}", id),
        };
        Self::not_found(err.to_string(), location)
    }
}

impl From<ScoringError> for ApiError {
    fn from(err: ScoringError) -> Self {
        Self::unavailable(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.outcome)).into_response()
    }
}
