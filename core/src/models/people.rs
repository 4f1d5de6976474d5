use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A registered patient.
///
/// `appointments` holds appointment identifiers only. The records themselves
/// live in the [`AppointmentRegistry`](crate::AppointmentRegistry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: String,
    pub name: String,
    /// Phone number, used for reminders.
    pub phone_number: String,
    pub medical_history: String,
    #[serde(default)]
    pub vitals: Vec<VitalsEntry>,
    #[serde(default)]
    pub(crate) appointments: Vec<String>,
}

impl Patient {
    pub fn new(
        patient_id: impl Into<String>,
        name: impl Into<String>,
        phone_number: impl Into<String>,
        medical_history: impl Into<String>,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            name: name.into(),
            phone_number: phone_number.into(),
            medical_history: medical_history.into(),
            vitals: Vec::new(),
            appointments: Vec::new(),
        }
    }

    /// Identifiers of this patient's appointments, in scheduling order.
    pub fn appointments(&self) -> &[String] {
        &self.appointments
    }
}

/// A registered doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub doctor_id: String,
    pub name: String,
    pub specialization: String,
    #[serde(default)]
    pub(crate) appointments: Vec<String>,
}

impl Doctor {
    pub fn new(
        doctor_id: impl Into<String>,
        name: impl Into<String>,
        specialization: impl Into<String>,
    ) -> Self {
        Self {
            doctor_id: doctor_id.into(),
            name: name.into(),
            specialization: specialization.into(),
            appointments: Vec::new(),
        }
    }

    pub fn appointments(&self) -> &[String] {
        &self.appointments
    }
}

/// One vitals reading, e.g. `{"blood_pressure": "120/80", "blood_sugar": "5.5mmol/L"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsEntry {
    pub log_time: NaiveDateTime,
    pub data: BTreeMap<String, String>,
}
