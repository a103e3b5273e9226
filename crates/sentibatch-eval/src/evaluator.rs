//! Batch evaluation
//!
//! Classifies every record, normalizes available ground-truth labels,
//! and computes metrics over the eligible subset per the configured
//! eligibility mode. A single bad record never aborts the batch.

use crate::config::{EligibilityMode, EvalConfig};
use crate::metrics;
use sentibatch_classifiers::{Classifier, LabelNormalizer, PolarityClassifier};
use sentibatch_core::{Metrics, Prediction, Record, SentimentClass};
use serde::Serialize;
use tracing::{debug, warn};

/// The metrics block of a run: computed, or the recovered failure
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MetricsOutcome {
    Computed(Metrics),
    Failed { error: String },
}

impl MetricsOutcome {
    /// The computed metrics, if computation succeeded
    pub fn as_computed(&self) -> Option<&Metrics> {
        match self {
            MetricsOutcome::Computed(metrics) => Some(metrics),
            MetricsOutcome::Failed { .. } => None,
        }
    }
}

/// Everything one batch run produces
#[derive(Debug)]
pub struct EvaluationOutput {
    /// One prediction per input record, in input order
    pub predictions: Vec<Prediction>,

    /// Normalized ground-truth class per record, parallel to
    /// `predictions`; `None` for absent or unmappable labels
    pub mapped_labels: Vec<Option<SentimentClass>>,

    /// Raw labels that failed to map, deduplicated in first-seen order
    pub unmapped_labels: Vec<String>,

    /// Metrics over the eligible subset; absent when the configured
    /// eligibility mode yields no subset
    pub metrics: Option<MetricsOutcome>,
}

/// Batch classifier and evaluator, parameterized by the classifier seam
pub struct BatchEvaluator<C: Classifier = PolarityClassifier> {
    classifier: C,
    normalizer: LabelNormalizer,
    config: EvalConfig,
}

impl BatchEvaluator<PolarityClassifier> {
    /// Evaluator backed by the default polarity classifier, using the
    /// configured threshold policy
    pub fn new(config: EvalConfig) -> Self {
        let classifier = PolarityClassifier::new(config.thresholds);
        Self::with_classifier(classifier, config)
    }
}

impl<C: Classifier> BatchEvaluator<C> {
    /// Evaluator backed by a caller-supplied classifier
    pub fn with_classifier(classifier: C, config: EvalConfig) -> Self {
        Self {
            classifier,
            normalizer: LabelNormalizer::new(),
            config,
        }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Run the full batch: classify, normalize, evaluate.
    ///
    /// Per-record classification failures are recovered to neutral;
    /// metric computation failures are recovered by omitting the block
    /// or embedding the error, per configuration.
    pub fn evaluate(&self, records: &[Record]) -> EvaluationOutput {
        debug!(records = records.len(), "starting batch evaluation");

        let mut predictions = Vec::with_capacity(records.len());
        for record in records {
            let predicted = match self.classifier.classify(&record.text) {
                Ok(classification) => classification.class,
                Err(err) => {
                    warn!(%err, "record classification failed, reporting neutral");
                    SentimentClass::Neutral
                }
            };
            predictions.push(Prediction {
                text: record.text.clone(),
                predicted,
            });
        }

        let mut mapped_labels = Vec::with_capacity(records.len());
        let mut unmapped_labels: Vec<String> = Vec::new();
        for record in records {
            let mapped = record.label.as_deref().and_then(|raw| {
                let class = self.normalizer.normalize(raw);
                if class.is_none() {
                    let key = raw.trim().to_lowercase();
                    if !unmapped_labels.contains(&key) {
                        unmapped_labels.push(key);
                    }
                }
                class
            });
            mapped_labels.push(mapped);
        }
        if !unmapped_labels.is_empty() {
            warn!(labels = ?unmapped_labels, "unmapped labels skipped");
        }

        let eligible: Vec<(SentimentClass, SentimentClass)> = mapped_labels
            .iter()
            .zip(&predictions)
            .filter_map(|(mapped, prediction)| mapped.map(|actual| (actual, prediction.predicted)))
            .collect();

        let want_metrics = match self.config.eligibility {
            EligibilityMode::Partial => !eligible.is_empty(),
            // All-or-nothing requires every record to carry a mappable
            // label; any gap suppresses the whole block.
            EligibilityMode::AllOrNothing => {
                !records.is_empty() && eligible.len() == records.len()
            }
        };

        let metrics = if want_metrics {
            match metrics::compute(&eligible) {
                Ok(mut computed) => {
                    if let Some(digits) = self.config.round_digits {
                        metrics::round_metrics(&mut computed, digits);
                    }
                    Some(MetricsOutcome::Computed(computed))
                }
                Err(err) => {
                    warn!(%err, "metrics computation failed");
                    if self.config.embed_metrics_error {
                        Some(MetricsOutcome::Failed {
                            error: err.to_string(),
                        })
                    } else {
                        None
                    }
                }
            }
        } else {
            debug!(
                eligible = eligible.len(),
                total = records.len(),
                "no eligible subset, metrics omitted"
            );
            None
        };

        EvaluationOutput {
            predictions,
            mapped_labels,
            unmapped_labels,
            metrics,
        }
    }
}
