//! Result envelope assembly
//!
//! The single JSON object written to stdout. A run produces either a
//! success envelope or an error envelope, never both; the error
//! envelope pairs with a non-zero exit status.

use crate::evaluator::{EvaluationOutput, MetricsOutcome};
use sentibatch_core::{Result, SentimentClass};
use serde::Serialize;

/// Success payload
#[derive(Debug, Serialize)]
pub struct ResultEnvelope {
    /// Predicted class per record, in input order
    pub sentiments: Vec<SentimentClass>,

    /// Input texts (stream mode key)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texts: Option<Vec<String>>,

    /// Input texts (CSV mode key)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned_texts: Option<Vec<String>>,

    /// Relative path of the augmented CSV side-file, when one was written
    pub output_csv: Option<String>,

    /// Metrics over the eligible subset, absent when none exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsOutcome>,
}

impl ResultEnvelope {
    /// Stream-mode envelope: `texts` key, no side-file
    pub fn stream(output: EvaluationOutput) -> Self {
        let (sentiments, texts) = split_predictions(output.predictions);
        Self {
            sentiments,
            texts: Some(texts),
            cleaned_texts: None,
            output_csv: None,
            metrics: output.metrics,
        }
    }

    /// CSV-mode envelope: `cleaned_texts` key plus the side-file path
    pub fn csv(output: EvaluationOutput, output_csv: impl Into<String>) -> Self {
        let (sentiments, texts) = split_predictions(output.predictions);
        Self {
            sentiments,
            texts: None,
            cleaned_texts: Some(texts),
            output_csv: Some(output_csv.into()),
            metrics: output.metrics,
        }
    }

    /// Serialize to the stdout payload
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Failure payload, always paired with exit status 1
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub sentiments: Vec<SentimentClass>,
    pub texts: Vec<String>,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            sentiments: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Serialize to the stdout payload; falls back to a hand-built
    /// object so the failure path itself cannot fail
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                "{{\"error\":{:?},\"sentiments\":[],\"texts\":[]}}",
                self.error
            )
        })
    }
}

fn split_predictions(
    predictions: Vec<sentibatch_core::Prediction>,
) -> (Vec<SentimentClass>, Vec<String>) {
    let mut sentiments = Vec::with_capacity(predictions.len());
    let mut texts = Vec::with_capacity(predictions.len());
    for prediction in predictions {
        sentiments.push(prediction.predicted);
        texts.push(prediction.text);
    }
    (sentiments, texts)
}
