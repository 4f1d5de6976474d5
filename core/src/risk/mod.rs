//! Readmission risk scoring.
//!
//! The classifier is an external artifact loaded once at startup. When it
//! fails to load, the [`RiskScorer`] stays in an unavailable state instead
//! of failing the process.

pub mod classifier;
pub mod features;
pub mod scorer;

pub use classifier::{Classifier, LogisticRegression, ModelArtifact};
pub use features::{FeatureRecord, FEATURE_COLUMNS};
pub use scorer::{RiskAssessment, RiskLabel, RiskScorer, RISK_THRESHOLD};
