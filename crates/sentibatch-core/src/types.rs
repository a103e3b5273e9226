//! Shared types for batch sentiment runs

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// The fixed 3-class sentiment taxonomy.
///
/// The set is closed: every prediction and every mapped ground-truth
/// label lands in exactly one of these classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentClass {
    Positive,
    Neutral,
    Negative,
}

impl SentimentClass {
    /// The taxonomy in canonical reporting order.
    pub const ALL: [SentimentClass; 3] = [
        SentimentClass::Positive,
        SentimentClass::Neutral,
        SentimentClass::Negative,
    ];

    /// Lowercase wire name of the class
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentClass::Positive => "positive",
            SentimentClass::Neutral => "neutral",
            SentimentClass::Negative => "negative",
        }
    }

    /// Position of this class in [`SentimentClass::ALL`]
    pub fn index(&self) -> usize {
        match self {
            SentimentClass::Positive => 0,
            SentimentClass::Neutral => 1,
            SentimentClass::Negative => 2,
        }
    }
}

impl std::fmt::Display for SentimentClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One input record: free-form text plus an optional raw ground-truth label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Text to classify. Missing fields in JSON input default to empty.
    #[serde(default)]
    pub text: String,

    /// Raw ground-truth tag, e.g. "joy" or "bitter". May be an emotion
    /// word or an already-normalized class name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Record {
    /// Create an unlabeled record
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: None,
        }
    }

    /// Create a labeled record
    pub fn with_label(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: Some(label.into()),
        }
    }
}

/// One prediction, paired 1:1 and in order with the input records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub text: String,
    pub predicted: SentimentClass,
}

/// 3x3 confusion matrix keyed by (actual, predicted) class.
///
/// Cells with no observations stay at zero. Serializes as a nested map
/// `{actual: {predicted: count}}` in canonical class order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfusionMatrix {
    counts: [[u64; 3]; 3],
}

impl ConfusionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one (actual, predicted) observation
    pub fn record(&mut self, actual: SentimentClass, predicted: SentimentClass) {
        self.counts[actual.index()][predicted.index()] += 1;
    }

    /// Cell value for (actual, predicted)
    pub fn get(&self, actual: SentimentClass, predicted: SentimentClass) -> u64 {
        self.counts[actual.index()][predicted.index()]
    }

    /// Diagonal cell: records of `class` predicted as `class`
    pub fn true_positives(&self, class: SentimentClass) -> u64 {
        self.counts[class.index()][class.index()]
    }

    /// Column sum: how many records were predicted as `class`
    pub fn predicted_total(&self, class: SentimentClass) -> u64 {
        SentimentClass::ALL
            .iter()
            .map(|actual| self.counts[actual.index()][class.index()])
            .sum()
    }

    /// Row sum: how many records actually carry `class`
    pub fn actual_total(&self, class: SentimentClass) -> u64 {
        self.counts[class.index()].iter().sum()
    }

    /// Total observations
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Sum of the diagonal (correct predictions)
    pub fn correct(&self) -> u64 {
        SentimentClass::ALL
            .iter()
            .map(|class| self.true_positives(*class))
            .sum()
    }
}

impl Serialize for ConfusionMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut outer = serializer.serialize_map(Some(3))?;
        for actual in SentimentClass::ALL {
            let mut inner = std::collections::BTreeMap::new();
            for predicted in SentimentClass::ALL {
                inner.insert(predicted.as_str(), self.get(actual, predicted));
            }
            outer.serialize_entry(actual.as_str(), &inner)?;
        }
        outer.end()
    }
}

/// Aggregate evaluation metrics over the labeled subset of a batch.
///
/// Precision, recall, and F1 are macro-averaged across the fixed
/// taxonomy; classes with no true or predicted instances contribute 0.
#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub confusion_matrix: ConfusionMatrix,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_class_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentClass::Positive).unwrap();
        assert_eq!(json, "\"positive\"");

        let class: SentimentClass = serde_json::from_str("\"negative\"").unwrap();
        assert_eq!(class, SentimentClass::Negative);
    }

    #[test]
    fn record_accepts_missing_fields() {
        let record: Record = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(record.text, "hello");
        assert!(record.label.is_none());

        // Missing text defaults to empty, matching lenient stream input.
        let record: Record = serde_json::from_str(r#"{"label": "joy"}"#).unwrap();
        assert_eq!(record.text, "");
        assert_eq!(record.label.as_deref(), Some("joy"));
    }

    #[test]
    fn confusion_matrix_counts_and_sums() {
        let mut cm = ConfusionMatrix::new();
        cm.record(SentimentClass::Positive, SentimentClass::Positive);
        cm.record(SentimentClass::Positive, SentimentClass::Negative);
        cm.record(SentimentClass::Negative, SentimentClass::Negative);

        assert_eq!(cm.get(SentimentClass::Positive, SentimentClass::Positive), 1);
        assert_eq!(cm.get(SentimentClass::Positive, SentimentClass::Negative), 1);
        assert_eq!(cm.true_positives(SentimentClass::Negative), 1);
        assert_eq!(cm.predicted_total(SentimentClass::Negative), 2);
        assert_eq!(cm.actual_total(SentimentClass::Positive), 2);
        assert_eq!(cm.total(), 3);
        assert_eq!(cm.correct(), 2);
        // Untouched cells stay zero.
        assert_eq!(cm.get(SentimentClass::Neutral, SentimentClass::Neutral), 0);
    }

    #[test]
    fn confusion_matrix_serializes_as_nested_map() {
        let mut cm = ConfusionMatrix::new();
        cm.record(SentimentClass::Neutral, SentimentClass::Neutral);

        let value = serde_json::to_value(&cm).unwrap();
        assert_eq!(value["neutral"]["neutral"], 1);
        assert_eq!(value["positive"]["negative"], 0);
        assert_eq!(value.as_object().unwrap().len(), 3);
    }
}
