//! Classifier trait and common types

use sentibatch_core::{Result, SentimentClass};

/// Trait for all classifiers
pub trait Classifier: Send + Sync {
    /// Classify the given text
    fn classify(&self, text: &str) -> Result<Classification>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Result of classifying a single text
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Predicted class after threshold mapping
    pub class: SentimentClass,

    /// Raw polarity score in [-1.0, 1.0]
    pub score: f64,
}

impl Classification {
    /// Create a new classification
    pub fn new(class: SentimentClass, score: f64) -> Self {
        Self { class, score }
    }
}
