use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::classifier::{Classifier, LogisticRegression};
use super::features::FeatureRecord;
use crate::error::ScoringError;

/// Probabilities strictly above this are labelled higher risk.
pub const RISK_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLabel {
    Higher,
    Lower,
}

impl RiskLabel {
    pub fn from_probability(probability: f64) -> Self {
        if probability > RISK_THRESHOLD {
            Self::Higher
        } else {
            Self::Lower
        }
    }

    /// Sentence shown under the prediction result.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Higher => "This patient has a higher predicted risk of readmission.",
            Self::Lower => "This patient has a lower predicted risk of readmission.",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Higher => f.write_str("higher risk"),
            Self::Lower => f.write_str("lower risk"),
        }
    }
}

/// Result of scoring one feature record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub probability: f64,
    /// Probability rounded for display, e.g. `"0.27"`.
    pub display: String,
    pub label: RiskLabel,
    pub message: String,
}

impl RiskAssessment {
    pub fn from_probability(probability: f64) -> Self {
        let label = RiskLabel::from_probability(probability);
        Self {
            probability,
            display: format!("{:.2}", probability),
            label,
            message: label.message().to_string(),
        }
    }
}

enum ModelState {
    Loaded(Arc<dyn Classifier>),
    Unavailable(String),
}

/// Adapter between feature records and the loaded classifier.
pub struct RiskScorer {
    state: ModelState,
}

impl RiskScorer {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            state: ModelState::Loaded(classifier),
        }
    }

    /// A scorer whose every call reports the model as unavailable.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            state: ModelState::Unavailable(reason.into()),
        }
    }

    /// Load the artifact at `path`. A load failure is logged and yields an
    /// unavailable scorer rather than an error.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match LogisticRegression::load(path) {
            Ok(model) => {
                tracing::info!("✓ Readmission risk model loaded from {}", path.display());
                Self::new(Arc::new(model))
            }
            Err(e) => {
                tracing::error!("✗ Readmission risk model not loaded: {}", e);
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.state, ModelState::Loaded(_))
    }

    /// Why scoring is disabled, if it is.
    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.state {
            ModelState::Loaded(_) => None,
            ModelState::Unavailable(reason) => Some(reason.as_str()),
        }
    }

    /// Positive-class probability for `features`.
    pub fn score(&self, features: &FeatureRecord) -> Result<f64, ScoringError> {
        match &self.state {
            ModelState::Loaded(model) => {
                let [_, p1] = model.predict_proba(&features.to_vector());
                Ok(p1)
            }
            ModelState::Unavailable(reason) => Err(ScoringError::ModelUnavailable(reason.clone())),
        }
    }

    /// Score and attach the display label.
    pub fn assess(&self, features: &FeatureRecord) -> Result<RiskAssessment, ScoringError> {
        let probability = self.score(features)?;
        tracing::debug!("Risk scored: {:.4} for {:?}", probability, features);
        Ok(RiskAssessment::from_probability(probability))
    }
}

impl fmt::Debug for RiskScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            ModelState::Loaded(model) => f
                .debug_struct("RiskScorer")
                .field("backend", &model.backend_type())
                .finish(),
            ModelState::Unavailable(reason) => f
                .debug_struct("RiskScorer")
                .field("unavailable", reason)
                .finish(),
        }
    }
}
