//! Prediction models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single label/confidence pair returned by the classification service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Class label (e.g. "plastic", "cardboard")
    pub label: String,

    /// Confidence in [0, 1]
    pub confidence: f64,
}

impl Prediction {
    /// Create a new prediction.
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

impl fmt::Display for Prediction {
    /// Renders as `label: NN.NN%`, the form shown on the screen.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}%", self.label, self.confidence * 100.0)
    }
}

/// Response body of `POST /classify`.
///
/// The service sorts `predictions` by confidence descending; this is its
/// contract and is not re-verified locally. The list may be empty, and the
/// field itself may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// Ranked predictions, best first
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

impl ClassifyResponse {
    /// The top-confidence prediction, if any.
    pub fn top(&self) -> Option<&Prediction> {
        self.predictions.first()
    }
}
