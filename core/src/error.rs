use thiserror::Error;

/// Failure to link a patient and doctor into an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Patient with ID {0} not found")]
    PatientNotFound(String),
    #[error("Doctor with ID {0} not found")]
    DoctorNotFound(String),
}

impl ScheduleError {
    /// Identifier that failed to resolve.
    pub fn missing_id(&self) -> &str {
        match self {
            Self::PatientNotFound(id) | Self::DoctorNotFound(id) => id,
        }
    }
}

/// Scoring is disabled because the model artifact did not load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Readmission risk prediction is unavailable: {0}")]
    ModelUnavailable(String),
}

/// Reasons a model artifact is rejected at load time.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("failed to read model file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse model file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported model type '{0}'")]
    UnsupportedModel(String),
    #[error("feature columns {found:?} do not match expected order {expected:?}")]
    FeatureOrder {
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("expected {expected} coefficients, got {found}")]
    CoefficientCount { expected: usize, found: usize },
}
