use chrono::{DateTime, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::error::ScheduleError;
use crate::models::{Appointment, AppointmentSummary};
use crate::registry::AppointmentRegistry;
use crate::store::EntityStore;

/// One user's working state: the entity store and the appointment registry.
///
/// Sessions share nothing with each other. Dropping a session discards its
/// records.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub store: EntityStore,
    pub registry: AppointmentRegistry,
}

impl Session {
    pub fn new() -> Self {
        Self::with_store(EntityStore::new())
    }

    /// A session preloaded with the sample patient and doctor.
    pub fn seeded() -> Self {
        Self::with_store(EntityStore::seeded())
    }

    pub fn with_store(store: EntityStore) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            store,
            registry: AppointmentRegistry::new(),
        }
    }

    pub fn schedule(
        &mut self,
        patient_id: &str,
        doctor_id: &str,
        appointment_time: NaiveDateTime,
    ) -> Result<Appointment, ScheduleError> {
        self.registry
            .schedule(&mut self.store, patient_id, doctor_id, appointment_time)
    }

    pub fn summarize(&self, appointment: &Appointment) -> AppointmentSummary {
        self.registry.summarize(&self.store, appointment)
    }

    pub fn summaries(&self) -> Vec<AppointmentSummary> {
        self.registry.summaries(&self.store)
    }

    pub fn patient_schedule(&self, patient_id: &str) -> Result<Vec<AppointmentSummary>, ScheduleError> {
        let appointments = self.registry.appointments_for_patient(&self.store, patient_id)?;
        Ok(appointments.into_iter().map(|a| self.summarize(a)).collect())
    }

    pub fn doctor_schedule(&self, doctor_id: &str) -> Result<Vec<AppointmentSummary>, ScheduleError> {
        let appointments = self.registry.appointments_for_doctor(&self.store, doctor_id)?;
        Ok(appointments.into_iter().map(|a| self.summarize(a)).collect())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
