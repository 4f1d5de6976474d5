use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tibasasa_core::{Appointment, AppointmentSummary, Doctor, Patient};
use uuid::Uuid;

/// Generic list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing<T> {
    pub total: usize,
    pub entry: Vec<T>,
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(entry: Vec<T>) -> Self {
        Self {
            total: entry.len(),
            entry,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterPatient {
    pub patient_id: String,
    pub name: String,
    pub phone_number: String,
    #[serde(default)]
    pub medical_history: String,
}

impl From<RegisterPatient> for Patient {
    fn from(req: RegisterPatient) -> Self {
        Patient::new(req.patient_id, req.name, req.phone_number, req.medical_history)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterDoctor {
    pub doctor_id: String,
    pub name: String,
    pub specialization: String,
}

impl From<RegisterDoctor> for Doctor {
    fn from(req: RegisterDoctor) -> Self {
        Doctor::new(req.doctor_id, req.name, req.specialization)
    }
}

/// Scheduling form: date and time are picked separately and combined.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleRequest {
    pub patient_id: String,
    pub doctor_id: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
}

impl ScheduleRequest {
    pub fn appointment_datetime(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.appointment_date, self.appointment_time)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub appointment: Appointment,
    pub summary: AppointmentSummary,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStatus {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
