//! SentiBatch Core
//!
//! Core types and error handling shared across SentiBatch components.
//!
//! This crate provides:
//! - The fixed 3-class sentiment taxonomy
//! - Input records, predictions, and evaluation metrics
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ConfusionMatrix, Metrics, Prediction, Record, SentimentClass};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{ConfusionMatrix, Metrics, Prediction, Record, SentimentClass};
}
