use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::error::ScheduleError;
use crate::models::{Appointment, AppointmentSummary, TIME_FORMAT};
use crate::store::EntityStore;

/// Prefix of every generated appointment identifier.
pub const APPOINTMENT_ID_TAG: &str = "APP";

/// Appointment records plus identifier allocation.
///
/// Identifiers are `APP` followed by a monotonic sequence number padded to
/// four digits. The sequence skips anything already present, so an
/// identifier is never handed out twice.
#[derive(Debug, Clone, Default)]
pub struct AppointmentRegistry {
    appointments: HashMap<String, Appointment>,
    order: Vec<String>,
    next_seq: u64,
}

impl AppointmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> String {
        loop {
            self.next_seq += 1;
            let id = format!("{}{:04}", APPOINTMENT_ID_TAG, self.next_seq);
            if !self.appointments.contains_key(&id) {
                return id;
            }
        }
    }

    /// Schedule an appointment between an existing patient and doctor.
    ///
    /// Both identifiers are resolved before anything is written. On success
    /// the appointment is in the registry and its identifier has been
    /// appended to the patient's and the doctor's lists.
    pub fn schedule(
        &mut self,
        store: &mut EntityStore,
        patient_id: &str,
        doctor_id: &str,
        appointment_time: NaiveDateTime,
    ) -> Result<Appointment, ScheduleError> {
        if !store.contains_patient(patient_id) {
            tracing::warn!("Scheduling rejected: unknown patient {}", patient_id);
            return Err(ScheduleError::PatientNotFound(patient_id.to_string()));
        }
        if !store.contains_doctor(doctor_id) {
            tracing::warn!("Scheduling rejected: unknown doctor {}", doctor_id);
            return Err(ScheduleError::DoctorNotFound(doctor_id.to_string()));
        }

        let id = self.allocate_id();
        let appointment = Appointment::scheduled(id.clone(), patient_id, doctor_id, appointment_time);

        // Presence was checked above and nothing can remove a record in between.
        if let Some(patient) = store.patient_mut(patient_id) {
            patient.appointments.push(id.clone());
        }
        if let Some(doctor) = store.doctor_mut(doctor_id) {
            doctor.appointments.push(id.clone());
        }
        self.order.push(id.clone());
        self.appointments.insert(id.clone(), appointment.clone());

        tracing::info!(
            "✓ Appointment scheduled: {} ({} with {} at {})",
            id,
            patient_id,
            doctor_id,
            appointment_time.format(TIME_FORMAT)
        );
        Ok(appointment)
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.get(id)
    }

    /// Appointments in the order they were scheduled.
    pub fn list(&self) -> impl Iterator<Item = &Appointment> {
        self.order.iter().filter_map(|id| self.appointments.get(id))
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Listing row for one appointment. Names fall back to the raw
    /// identifier if the record is somehow missing from the store.
    pub fn summarize(&self, store: &EntityStore, appointment: &Appointment) -> AppointmentSummary {
        let patient = store
            .patient(&appointment.patient_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| appointment.patient_id.clone());
        let doctor = store
            .doctor(&appointment.doctor_id)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| appointment.doctor_id.clone());

        AppointmentSummary {
            appointment_id: appointment.appointment_id.clone(),
            patient,
            doctor,
            time: appointment.appointment_time.format(TIME_FORMAT).to_string(),
            status: appointment.status,
        }
    }

    /// The full schedule as listing rows, in scheduling order.
    pub fn summaries(&self, store: &EntityStore) -> Vec<AppointmentSummary> {
        self.list().map(|a| self.summarize(store, a)).collect()
    }

    /// Resolve a patient's back-references through the registry.
    pub fn appointments_for_patient(
        &self,
        store: &EntityStore,
        patient_id: &str,
    ) -> Result<Vec<&Appointment>, ScheduleError> {
        let patient = store
            .patient(patient_id)
            .ok_or_else(|| ScheduleError::PatientNotFound(patient_id.to_string()))?;
        Ok(self.resolve(patient.appointments()))
    }

    /// Resolve a doctor's back-references through the registry.
    pub fn appointments_for_doctor(
        &self,
        store: &EntityStore,
        doctor_id: &str,
    ) -> Result<Vec<&Appointment>, ScheduleError> {
        let doctor = store
            .doctor(doctor_id)
            .ok_or_else(|| ScheduleError::DoctorNotFound(doctor_id.to_string()))?;
        Ok(self.resolve(doctor.appointments()))
    }

    fn resolve(&self, ids: &[String]) -> Vec<&Appointment> {
        ids.iter().filter_map(|id| self.appointments.get(id)).collect()
    }
}
