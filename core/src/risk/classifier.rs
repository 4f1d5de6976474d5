use std::path::Path;

use serde::{Deserialize, Serialize};

use super::features::FEATURE_COLUMNS;
use crate::error::ModelLoadError;

/// A binary classifier over the fixed feature columns.
pub trait Classifier: Send + Sync {
    /// `[P(class 0), P(class 1)]` for one row in [`FEATURE_COLUMNS`] order.
    fn predict_proba(&self, features: &[f64; 5]) -> [f64; 2];

    fn backend_type(&self) -> &str;
}

/// Serialized form of a fitted classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub model_type: String,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Logistic regression exported from the training pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    coefficients: [f64; 5],
    intercept: f64,
}

impl LogisticRegression {
    pub const MODEL_TYPE: &'static str = "logistic_regression";

    pub fn new(coefficients: [f64; 5], intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Read and validate an artifact file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)?;
        Self::from_artifact(artifact)
    }

    /// Reject artifacts whose columns are not exactly [`FEATURE_COLUMNS`].
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelLoadError> {
        if artifact.model_type != Self::MODEL_TYPE {
            return Err(ModelLoadError::UnsupportedModel(artifact.model_type));
        }
        if artifact.feature_names.iter().map(String::as_str).ne(FEATURE_COLUMNS) {
            return Err(ModelLoadError::FeatureOrder {
                expected: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
                found: artifact.feature_names,
            });
        }
        let coefficients: [f64; 5] = artifact.coefficients.as_slice().try_into().map_err(|_| {
            ModelLoadError::CoefficientCount {
                expected: FEATURE_COLUMNS.len(),
                found: artifact.coefficients.len(),
            }
        })?;

        Ok(Self::new(coefficients, artifact.intercept))
    }

    pub fn to_artifact(&self) -> ModelArtifact {
        ModelArtifact {
            model_type: Self::MODEL_TYPE.to_string(),
            feature_names: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            coefficients: self.coefficients.to_vec(),
            intercept: self.intercept,
        }
    }
}

impl Classifier for LogisticRegression {
    fn predict_proba(&self, features: &[f64; 5]) -> [f64; 2] {
        let z: f64 = self
            .coefficients
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        let p1 = 1.0 / (1.0 + (-z).exp());
        [1.0 - p1, p1]
    }

    fn backend_type(&self) -> &str {
        Self::MODEL_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn artifact() -> ModelArtifact {
        LogisticRegression::new([0.03, 0.8, 0.6, 0.5, 0.2], -4.0).to_artifact()
    }

    #[test]
    fn test_zero_logit_is_even_odds() {
        let model = LogisticRegression::new([0.0; 5], 0.0);
        let [p0, p1] = model.predict_proba(&[50.0, 1.0, 0.0, 2.0, 7.0]);
        assert!((p0 - 0.5).abs() < 1e-12);
        assert!((p1 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let model = LogisticRegression::new([0.03, 0.8, 0.6, 0.5, 0.2], -4.0);
        let [p0, p1] = model.predict_proba(&[80.0, 1.0, 1.0, 4.0, 11.0]);
        assert!((p0 + p1 - 1.0).abs() < 1e-12);
        assert!(p1 > 0.5);
    }

    #[test]
    fn test_weights_are_positional() {
        // Only the blood sugar column carries weight.
        let model = LogisticRegression::new([0.0, 0.0, 0.0, 0.0, 1.0], -5.0);
        let [_, low] = model.predict_proba(&[100.0, 1.0, 1.0, 9.0, 0.0]);
        let [_, even] = model.predict_proba(&[0.0, 0.0, 0.0, 0.0, 5.0]);
        assert!(low < 0.01);
        assert!((even - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_from_artifact_roundtrip() {
        let model = LogisticRegression::from_artifact(artifact()).unwrap();
        assert_eq!(model, LogisticRegression::new([0.03, 0.8, 0.6, 0.5, 0.2], -4.0));
        assert_eq!(model.backend_type(), "logistic_regression");
    }

    #[test]
    fn test_reordered_columns_rejected() {
        let mut artifact = artifact();
        artifact.feature_names.swap(1, 2);

        let err = LogisticRegression::from_artifact(artifact).unwrap_err();
        assert!(matches!(err, ModelLoadError::FeatureOrder { .. }));
    }

    #[test]
    fn test_unknown_model_type_rejected() {
        let mut artifact = artifact();
        artifact.model_type = "random_forest".into();

        let err = LogisticRegression::from_artifact(artifact).unwrap_err();
        assert!(matches!(err, ModelLoadError::UnsupportedModel(t) if t == "random_forest"));
    }

    #[test]
    fn test_coefficient_count_checked() {
        let mut artifact = artifact();
        artifact.coefficients.pop();

        let err = LogisticRegression::from_artifact(artifact).unwrap_err();
        assert!(matches!(
            err,
            ModelLoadError::CoefficientCount { expected: 5, found: 4 }
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&artifact()).unwrap()).unwrap();

        let model = LogisticRegression::load(file.path()).unwrap();
        assert_eq!(model.to_artifact().intercept, -4.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LogisticRegression::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ModelLoadError::Io { .. }));
    }

    #[test]
    fn test_load_garbage_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = LogisticRegression::load(file.path()).unwrap_err();
        assert!(matches!(err, ModelLoadError::Parse(_)));
    }
}
