//! SentiBatch Eval
//!
//! Batch evaluation over classified records: eligibility policies,
//! macro-averaged metrics with a 3x3 confusion matrix, and the JSON
//! result envelopes written to stdout.
//!
//! The two historical input modes (CSV file, JSON stream) are presets
//! of one evaluator configured by [`EvalConfig`].

pub mod config;
pub mod envelope;
pub mod evaluator;
pub mod metrics;

pub use config::{EligibilityMode, EvalConfig};
pub use envelope::{ErrorEnvelope, ResultEnvelope};
pub use evaluator::{BatchEvaluator, EvaluationOutput, MetricsOutcome};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{EligibilityMode, EvalConfig};
    pub use crate::envelope::{ErrorEnvelope, ResultEnvelope};
    pub use crate::evaluator::{BatchEvaluator, EvaluationOutput, MetricsOutcome};
}
