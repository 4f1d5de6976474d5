use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Display format for appointment times.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Lifecycle state of an appointment.
///
/// Only `Scheduled` is ever produced. `Completed` and `Cancelled` are part of
/// the record shape but no operation transitions to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An appointment linking one patient and one doctor at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub appointment_time: NaiveDateTime,
    pub status: AppointmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_call_link: Option<String>,
}

impl Appointment {
    pub(crate) fn scheduled(
        appointment_id: String,
        patient_id: &str,
        doctor_id: &str,
        appointment_time: NaiveDateTime,
    ) -> Self {
        Self {
            appointment_id,
            patient_id: patient_id.to_string(),
            doctor_id: doctor_id.to_string(),
            appointment_time,
            status: AppointmentStatus::Scheduled,
            video_call_link: None,
        }
    }
}

/// Row of the appointment listing, with names resolved through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentSummary {
    pub appointment_id: String,
    pub patient: String,
    pub doctor: String,
    pub time: String,
    pub status: AppointmentStatus,
}

impl AppointmentSummary {
    /// Confirmation line shown after scheduling.
    pub fn confirmation(&self) -> String {
        format!(
            "Appointment {} scheduled for {} with {} on {}",
            self.appointment_id, self.patient, self.doctor, self.time
        )
    }
}
