//! Classifier seam
//!
//! The trained model is opaque to the rest of the pipeline: scoring only
//! ever sees the `Classifier` trait, so tests substitute a stub and the
//! production artifact can be swapped without touching the scorer.

mod logistic;

pub use logistic::{LogisticModel, ModelArtifact, ModelError};

use crate::models::{FeatureVector, Prediction};

/// Black-box binary classifier over the fixed five-feature layout.
///
/// `Send + Sync` so one loaded artifact can be shared read-only across
/// request-handling tasks.
pub trait Classifier: Send + Sync {
    /// Predicted label: 1 = dropout, 0 = safe
    fn predict(&self, features: &FeatureVector) -> u8;

    /// Probability distribution over {safe, dropout}
    fn predict_proba(&self, features: &FeatureVector) -> [f64; 2];

    /// Label and dropout probability for one row
    fn score(&self, features: &FeatureVector) -> Prediction {
        Prediction {
            label: self.predict(features),
            probability: self.predict_proba(features)[1],
        }
    }
}
