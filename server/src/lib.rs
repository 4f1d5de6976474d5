pub mod config;
pub mod handlers;
pub mod models;
pub mod state;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use state::{AppState, SessionManager};

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Session lifecycle
        .route("/sessions", post(handlers::create_session))
        .route("/sessions/:sid", delete(handlers::close_session))
        // Patients and doctors
        .route(
            "/sessions/:sid/patients",
            get(handlers::list_patients).post(handlers::register_patient),
        )
        .route("/sessions/:sid/patients/:id", get(handlers::get_patient))
        .route(
            "/sessions/:sid/patients/:id/appointments",
            get(handlers::get_patient_appointments),
        )
        .route(
            "/sessions/:sid/doctors",
            get(handlers::list_doctors).post(handlers::register_doctor),
        )
        .route("/sessions/:sid/doctors/:id", get(handlers::get_doctor))
        .route(
            "/sessions/:sid/doctors/:id/appointments",
            get(handlers::get_doctor_appointments),
        )
        // Appointments
        .route(
            "/sessions/:sid/appointments",
            get(handlers::list_appointments).post(handlers::schedule_appointment),
        )
        // Risk prediction
        .route("/risk/status", get(handlers::model_status))
        .route("/risk/predict", post(handlers::predict_risk))
        // Health check
        .route("/health", get(handlers::health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Listing, OperationOutcome, ScheduleResponse, SessionCreated};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tibasasa_core::{AppointmentSummary, LogisticRegression, Patient, RiskAssessment, RiskScorer};
    use tower::ServiceExt;

    fn test_app(scorer: RiskScorer) -> Router {
        app(AppState::new(scorer))
    }

    fn loaded_scorer() -> RiskScorer {
        RiskScorer::new(Arc::new(LogisticRegression::new(
            [0.03, 0.8, 0.6, 0.5, 0.2],
            -4.0,
        )))
    }

    async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    async fn open_session(router: &Router) -> String {
        let (status, body) = send(router, "POST", "/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        let created: SessionCreated = serde_json::from_slice(&body).unwrap();
        created.session_id.to_string()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let router = test_app(loaded_scorer());
        let (status, _) = send(&router, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_schedule_seeded_appointment() {
        let router = test_app(loaded_scorer());
        let sid = open_session(&router).await;

        let (status, body) = send(
            &router,
            "POST",
            &format!("/sessions/{}/appointments", sid),
            Some(json!({
                "patient_id": "PAT001",
                "doctor_id": "DOC501",
                "appointment_date": "2025-06-02",
                "appointment_time": "10:15:00"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let scheduled: ScheduleResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(scheduled.summary.patient, "Asha Wanjiru");
        assert_eq!(scheduled.summary.doctor, "John Omondi");
        assert_eq!(scheduled.summary.time, "2025-06-02 10:15");
        assert_eq!(
            scheduled.message,
            format!(
                "Appointment {} scheduled for Asha Wanjiru with John Omondi on 2025-06-02 10:15",
                scheduled.appointment.appointment_id
            )
        );

        let (status, body) = send(&router, "GET", &format!("/sessions/{}/appointments", sid), None).await;
        assert_eq!(status, StatusCode::OK);
        let listing: Listing<AppointmentSummary> = serde_json::from_slice(&body).unwrap();
        assert_eq!(listing.total, 1);
        assert_eq!(listing.entry[0].appointment_id, scheduled.appointment.appointment_id);
    }

    #[tokio::test]
    async fn test_schedule_unknown_patient_is_not_found() {
        let router = test_app(loaded_scorer());
        let sid = open_session(&router).await;

        let (status, body) = send(
            &router,
            "POST",
            &format!("/sessions/{}/appointments", sid),
            Some(json!({
                "patient_id": "PATXXX",
                "doctor_id": "DOC501",
                "appointment_date": "2025-06-02",
                "appointment_time": "10:15:00"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let outcome: OperationOutcome = serde_json::from_slice(&body).unwrap();
        assert_eq!(outcome.issue[0].code, "not-found");
        assert_eq!(outcome.diagnostics(), Some("Patient with ID PATXXX not found"));

        let (_, body) = send(&router, "GET", &format!("/sessions/{}/appointments", sid), None).await;
        let listing: Listing<AppointmentSummary> = serde_json::from_slice(&body).unwrap();
        assert_eq!(listing.total, 0);
    }

    #[tokio::test]
    async fn test_register_and_fetch_patient() {
        let router = test_app(loaded_scorer());
        let sid = open_session(&router).await;
        let patient = json!({
            "patient_id": "PAT002",
            "name": "Brian Kiptoo",
            "phone_number": "+254700000002",
            "medical_history": "Hypertension"
        });

        let (status, _) = send(&router, "POST", &format!("/sessions/{}/patients", sid), Some(patient.clone())).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = send(&router, "POST", &format!("/sessions/{}/patients", sid), Some(patient)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&router, "GET", &format!("/sessions/{}/patients/PAT002", sid), None).await;
        assert_eq!(status, StatusCode::OK);
        let fetched: Patient = serde_json::from_slice(&body).unwrap();
        assert_eq!(fetched.name, "Brian Kiptoo");

        let (_, body) = send(&router, "GET", &format!("/sessions/{}/patients", sid), None).await;
        let listing: Listing<Patient> = serde_json::from_slice(&body).unwrap();
        assert_eq!(listing.total, 2);
    }

    #[tokio::test]
    async fn test_get_unknown_doctor() {
        let router = test_app(loaded_scorer());
        let sid = open_session(&router).await;

        let (status, body) = send(&router, "GET", &format!("/sessions/{}/doctors/DOC000", sid), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let outcome: OperationOutcome = serde_json::from_slice(&body).unwrap();
        assert_eq!(outcome.issue[0].location.as_ref().unwrap()[0], "Doctor/DOC000");
    }

    #[tokio::test]
    async fn test_closed_session_is_gone() {
        let router = test_app(loaded_scorer());
        let sid = open_session(&router).await;

        let (status, _) = send(&router, "DELETE", &format!("/sessions/{}", sid), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&router, "GET", &format!("/sessions/{}/patients", sid), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&router, "DELETE", &format!("/sessions/{}", sid), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_predict_risk() {
        let router = test_app(loaded_scorer());
        let features = json!({
            "age": 50,
            "has_diabetes": false,
            "has_hypertension": false,
            "previous_admissions": 0,
            "avg_blood_sugar_last_7_days": 5.0
        });

        let (status, first) = send(&router, "POST", "/risk/predict", Some(features.clone())).await;
        assert_eq!(status, StatusCode::OK);
        let (_, second) = send(&router, "POST", "/risk/predict", Some(features)).await;

        let first: RiskAssessment = serde_json::from_slice(&first).unwrap();
        let second: RiskAssessment = serde_json::from_slice(&second).unwrap();
        assert_eq!(first.probability, second.probability);
        assert_eq!(first.message, "This patient has a lower predicted risk of readmission.");
    }

    #[tokio::test]
    async fn test_predict_risk_without_model() {
        let router = test_app(RiskScorer::unavailable("model file missing"));

        let (status, body) = send(&router, "GET", "/risk/status", None).await;
        assert_eq!(status, StatusCode::OK);
        let status_body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(status_body["available"], false);
        assert_eq!(status_body["reason"], "model file missing");

        let (status, body) = send(
            &router,
            "POST",
            "/risk/predict",
            Some(json!({
                "age": 60,
                "has_diabetes": true,
                "has_hypertension": true,
                "previous_admissions": 2,
                "avg_blood_sugar_last_7_days": 9.0
            })),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let outcome: OperationOutcome = serde_json::from_slice(&body).unwrap();
        assert_eq!(outcome.issue[0].code, "transient");

        // Scheduling keeps working without the model.
        let sid = open_session(&router).await;
        let (status, _) = send(&router, "GET", &format!("/sessions/{}/doctors", sid), None).await;
        assert_eq!(status, StatusCode::OK);
    }
}
