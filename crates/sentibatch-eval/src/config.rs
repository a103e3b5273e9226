//! Evaluation run configuration

use sentibatch_classifiers::ThresholdPolicy;
use serde::{Deserialize, Serialize};

/// Policy governing which records participate in metric computation
/// when labels are partially available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityMode {
    /// Evaluate over every record with a mappable label, even when
    /// other records lack one
    #[default]
    Partial,

    /// Compute metrics only when every record's label maps; otherwise
    /// the metrics block is omitted entirely
    AllOrNothing,
}

/// Configuration for one batch evaluation run.
///
/// The two input modes historically diverged on thresholds, rounding,
/// and eligibility; both live here as presets of a single evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Score-to-class mapping for the polarity classifier
    pub thresholds: ThresholdPolicy,

    /// Which records count toward metrics
    pub eligibility: EligibilityMode,

    /// Decimal places for reported metric values; `None` keeps full
    /// precision
    pub round_digits: Option<u32>,

    /// On metrics-computation failure, embed `{"error": ..}` as the
    /// metrics block instead of omitting it
    pub embed_metrics_error: bool,
}

impl EvalConfig {
    /// CSV-file preset: zero thresholds, partial eligibility, full
    /// precision, metrics omitted on failure
    pub fn csv_defaults() -> Self {
        Self {
            thresholds: ThresholdPolicy::ZERO,
            eligibility: EligibilityMode::Partial,
            round_digits: None,
            embed_metrics_error: false,
        }
    }

    /// JSON-stream preset: banded thresholds, all-or-nothing
    /// eligibility, 2-digit rounding, error embedded on failure
    pub fn stream_defaults() -> Self {
        Self {
            thresholds: ThresholdPolicy::BANDED,
            eligibility: EligibilityMode::AllOrNothing,
            round_digits: Some(2),
            embed_metrics_error: true,
        }
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self::csv_defaults()
    }
}
