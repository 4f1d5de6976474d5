use serde::{Deserialize, Serialize};

/// Column order the classifier was trained on. The model is positional, so
/// [`FeatureRecord::to_vector`] must follow this exactly.
pub const FEATURE_COLUMNS: [&str; 5] = [
    "age",
    "has_diabetes",
    "has_hypertension",
    "previous_admissions",
    "avg_blood_sugar_last_7_days",
];

/// Patient attributes submitted for a readmission risk prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub age: u32,
    pub has_diabetes: bool,
    pub has_hypertension: bool,
    pub previous_admissions: u32,
    /// Average blood sugar over the last 7 days, mmol/L.
    pub avg_blood_sugar_last_7_days: f64,
}

impl FeatureRecord {
    /// Model input in [`FEATURE_COLUMNS`] order, booleans as 1/0.
    pub fn to_vector(&self) -> [f64; 5] {
        [
            f64::from(self.age),
            if self.has_diabetes { 1.0 } else { 0.0 },
            if self.has_hypertension { 1.0 } else { 0.0 },
            f64::from(self.previous_admissions),
            self.avg_blood_sugar_last_7_days,
        ]
    }
}

impl Default for FeatureRecord {
    /// Initial values of the prediction form.
    fn default() -> Self {
        Self {
            age: 50,
            has_diabetes: false,
            has_hypertension: false,
            previous_admissions: 0,
            avg_blood_sugar_last_7_days: 5.0,
        }
    }
}
