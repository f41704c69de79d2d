//! Logistic regression loaded from a JSON parameter artifact
//!
//! The artifact is produced offline by the training script; this module
//! only deserializes the fitted parameters and evaluates the model.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Classifier;
use crate::models::{FeatureVector, FEATURE_COLUMNS, FEATURE_COUNT};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("could not read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("model artifact is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),

    #[error("model feature layout mismatch: artifact trained on [{artifact}], server expects [{expected}]")]
    LayoutMismatch { artifact: String, expected: String },

    #[error("model artifact has {got} coefficients, expected {expected}")]
    CoefficientCount { got: usize, expected: usize },

    #[error("model artifact classes must be [0, 1], got {0:?}")]
    Classes([u8; 2]),
}

/// On-disk parameter format, written by the training script
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub model_type: String,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub classes: [u8; 2],
    pub trained_at: String,
}

/// Fitted binary logistic regression over the five-feature layout
#[derive(Debug, Clone)]
pub struct LogisticModel {
    weights: [f64; FEATURE_COUNT],
    intercept: f64,
}

impl LogisticModel {
    /// Load the artifact from disk. Called once at startup; never reloaded.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)?;

        tracing::info!(
            "classifier loaded: {} ({} features, trained {})",
            artifact.model_type,
            artifact.feature_names.len(),
            artifact.trained_at
        );

        Self::from_artifact(&artifact)
    }

    /// Build the model from deserialized parameters, validating that the
    /// artifact was trained on exactly the feature layout this server
    /// extracts, in the same order.
    pub fn from_artifact(artifact: &ModelArtifact) -> Result<Self, ModelError> {
        if artifact.feature_names != FEATURE_COLUMNS {
            return Err(ModelError::LayoutMismatch {
                artifact: artifact.feature_names.join(", "),
                expected: FEATURE_COLUMNS.join(", "),
            });
        }

        if artifact.classes != [0, 1] {
            return Err(ModelError::Classes(artifact.classes));
        }

        let weights: [f64; FEATURE_COUNT] = artifact
            .coefficients
            .as_slice()
            .try_into()
            .map_err(|_| ModelError::CoefficientCount {
                got: artifact.coefficients.len(),
                expected: FEATURE_COUNT,
            })?;

        Ok(Self {
            weights,
            intercept: artifact.intercept,
        })
    }

    fn decision(&self, features: &FeatureVector) -> f64 {
        self.weights
            .iter()
            .zip(features.as_slice())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, features: &FeatureVector) -> u8 {
        (self.predict_proba(features)[1] >= 0.5) as u8
    }

    fn predict_proba(&self, features: &FeatureVector) -> [f64; 2] {
        let p = sigmoid(self.decision(features));
        [1.0 - p, p]
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
