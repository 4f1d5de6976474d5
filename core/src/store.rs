use std::collections::BTreeMap;

use crate::models::{Doctor, Patient};

/// In-memory patient and doctor records, keyed by their identifiers.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    patients: BTreeMap<String, Patient>,
    doctors: BTreeMap<String, Doctor>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the sample patient `PAT001` and doctor `DOC501`.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.register_patient(Patient::new(
            "PAT001",
            "Asha Wanjiru",
            "+254712345678",
            "Type 2 Diabetes",
        ));
        store.register_doctor(Doctor::new("DOC501", "John Omondi", "Endocrinology"));
        store
    }

    /// Register a patient. Returns `true` if the identifier was new.
    ///
    /// Appointment links are owned by the store: a new record starts with
    /// none, and re-registering replaces the demographic fields but keeps
    /// the existing links.
    pub fn register_patient(&mut self, mut patient: Patient) -> bool {
        match self.patients.get_mut(&patient.patient_id) {
            Some(existing) => {
                patient.appointments = std::mem::take(&mut existing.appointments);
                *existing = patient;
                false
            }
            None => {
                patient.appointments.clear();
                self.patients.insert(patient.patient_id.clone(), patient);
                true
            }
        }
    }

    /// Register a doctor. Same replacement rules as [`register_patient`](Self::register_patient).
    pub fn register_doctor(&mut self, mut doctor: Doctor) -> bool {
        match self.doctors.get_mut(&doctor.doctor_id) {
            Some(existing) => {
                doctor.appointments = std::mem::take(&mut existing.appointments);
                *existing = doctor;
                false
            }
            None => {
                doctor.appointments.clear();
                self.doctors.insert(doctor.doctor_id.clone(), doctor);
                true
            }
        }
    }

    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.get(id)
    }

    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.get(id)
    }

    pub(crate) fn patient_mut(&mut self, id: &str) -> Option<&mut Patient> {
        self.patients.get_mut(id)
    }

    pub(crate) fn doctor_mut(&mut self, id: &str) -> Option<&mut Doctor> {
        self.doctors.get_mut(id)
    }

    pub fn contains_patient(&self, id: &str) -> bool {
        self.patients.contains_key(id)
    }

    pub fn contains_doctor(&self, id: &str) -> bool {
        self.doctors.contains_key(id)
    }

    /// Patients ordered by identifier.
    pub fn patients(&self) -> impl Iterator<Item = &Patient> {
        self.patients.values()
    }

    /// Doctors ordered by identifier.
    pub fn doctors(&self) -> impl Iterator<Item = &Doctor> {
        self.doctors.values()
    }
}
