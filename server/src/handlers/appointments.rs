use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tibasasa_core::AppointmentSummary;
use uuid::Uuid;

use super::{in_session, ApiError};
use crate::models::{Listing, ScheduleRequest, ScheduleResponse};
use crate::state::AppState;

/// POST /sessions/:sid/appointments
/// Schedule a follow-up appointment
pub async fn schedule_appointment(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<ScheduleRequest>,
) -> Result<(StatusCode, Json<ScheduleResponse>), ApiError> {
    let time = req.appointment_datetime();
    let (appointment, summary) = in_session(&state, session_id, |s| {
        s.schedule(&req.patient_id, &req.doctor_id, time).map(|appointment| {
            let summary = s.summarize(&appointment);
            (appointment, summary)
        })
    })??;

    let message = summary.confirmation();
    tracing::info!("✓ {}", message);
    Ok((
        StatusCode::CREATED,
        Json(ScheduleResponse {
            appointment,
            summary,
            message,
        }),
    ))
}

/// GET /sessions/:sid/appointments
/// All scheduled appointments, oldest first
pub async fn list_appointments(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Listing<AppointmentSummary>>, ApiError> {
    let rows = in_session(&state, session_id, |s| s.summaries())?;
    if rows.is_empty() {
        tracing::debug!("No appointments scheduled yet in session {}", session_id);
    }
    Ok(Json(rows.into()))
}
