//! Scheduling and readmission-risk core for the TibaSasa clinic service.
//!
//! The crate is synchronous and lock-free. A [`Session`] owns one
//! [`EntityStore`] and one [`AppointmentRegistry`]; the [`RiskScorer`] is
//! loaded once and can be shared read-only.

pub mod error;
pub mod models;
pub mod registry;
pub mod risk;
pub mod session;
pub mod store;

pub use error::{ModelLoadError, ScheduleError, ScoringError};
pub use models::*;
pub use registry::AppointmentRegistry;
pub use risk::{
    Classifier, FeatureRecord, LogisticRegression, RiskAssessment, RiskLabel, RiskScorer,
    FEATURE_COLUMNS, RISK_THRESHOLD,
};
pub use session::Session;
pub use store::EntityStore;
