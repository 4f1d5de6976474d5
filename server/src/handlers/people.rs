use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tibasasa_core::{AppointmentSummary, Doctor, Patient};
use uuid::Uuid;

use super::{in_session, ApiError};
use crate::models::{Listing, RegisterDoctor, RegisterPatient};
use crate::state::AppState;

fn registered_status(is_new: bool) -> StatusCode {
    if is_new {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    }
}

/// GET /sessions/:sid/patients
pub async fn list_patients(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Listing<Patient>>, ApiError> {
    let patients = in_session(&state, session_id, |s| {
        s.store.patients().cloned().collect::<Vec<_>>()
    })?;
    tracing::debug!("✓ Listed {} patients", patients.len());
    Ok(Json(patients.into()))
}

/// POST /sessions/:sid/patients
/// Register a patient; an existing id is updated in place
pub async fn register_patient(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<RegisterPatient>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let patient_id = req.patient_id.clone();
    let (is_new, patient) = in_session(&state, session_id, |s| {
        let is_new = s.store.register_patient(req.into());
        (is_new, s.store.patient(&patient_id).cloned())
    })?;
    let patient = patient.ok_or_else(|| {
        ApiError::not_found(
            format!("Patient with ID {} not found", patient_id),
            format!("Patient/{}", patient_id),
        )
    })?;

    tracing::info!("✓ Patient registered: {}", patient_id);
    Ok((registered_status(is_new), Json(patient)))
}

/// GET /sessions/:sid/patients/:id
pub async fn get_patient(
    State(state): State<AppState>,
    Path((session_id, patient_id)): Path<(Uuid, String)>,
) -> Result<Json<Patient>, ApiError> {
    in_session(&state, session_id, |s| s.store.patient(&patient_id).cloned())?
        .map(Json)
        .ok_or_else(|| {
            ApiError::not_found(
                format!("Patient with ID {} not found", patient_id),
                format!("Patient/{}", patient_id),
            )
        })
}

/// GET /sessions/:sid/patients/:id/appointments
pub async fn get_patient_appointments(
    State(state): State<AppState>,
    Path((session_id, patient_id)): Path<(Uuid, String)>,
) -> Result<Json<Listing<AppointmentSummary>>, ApiError> {
    let rows = in_session(&state, session_id, |s| s.patient_schedule(&patient_id))??;
    Ok(Json(rows.into()))
}

/// GET /sessions/:sid/doctors
pub async fn list_doctors(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Listing<Doctor>>, ApiError> {
    let doctors = in_session(&state, session_id, |s| {
        s.store.doctors().cloned().collect::<Vec<_>>()
    })?;
    tracing::debug!("✓ Listed {} doctors", doctors.len());
    Ok(Json(doctors.into()))
}

/// POST /sessions/:sid/doctors
pub async fn register_doctor(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<RegisterDoctor>,
) -> Result<(StatusCode, Json<Doctor>), ApiError> {
    let doctor_id = req.doctor_id.clone();
    let (is_new, doctor) = in_session(&state, session_id, |s| {
        let is_new = s.store.register_doctor(req.into());
        (is_new, s.store.doctor(&doctor_id).cloned())
    })?;
    let doctor = doctor.ok_or_else(|| {
        ApiError::not_found(
            format!("Doctor with ID {} not found", doctor_id),
            format!("Doctor/{}", doctor_id),
        )
    })?;

    tracing::info!("✓ Doctor registered: {}", doctor_id);
    Ok((registered_status(is_new), Json(doctor)))
}

/// GET /sessions/:sid/doctors/:id
pub async fn get_doctor(
    State(state): State<AppState>,
    Path((session_id, doctor_id)): Path<(Uuid, String)>,
) -> Result<Json<Doctor>, ApiError> {
    in_session(&state, session_id, |s| s.store.doctor(&doctor_id).cloned())?
        .map(Json)
        .ok_or_else(|| {
            ApiError::not_found(
                format!("Doctor with ID {} not found", doctor_id),
                format!("Doctor/{}", doctor_id),
            )
        })
}

/// GET /sessions/:sid/doctors/:id/appointments
pub async fn get_doctor_appointments(
    State(state): State<AppState>,
    Path((session_id, doctor_id)): Path<(Uuid, String)>,
) -> Result<Json<Listing<AppointmentSummary>>, ApiError> {
    let rows = in_session(&state, session_id, |s| s.doctor_schedule(&doctor_id))??;
    Ok(Json(rows.into()))
}
