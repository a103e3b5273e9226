//! Aggregate metric computation
//!
//! Accuracy plus macro-averaged precision/recall/F1 over the fixed
//! 3-class taxonomy, with a zero-division policy of 0 (a class with no
//! true or predicted instances contributes 0, never an error).

use sentibatch_core::{ConfusionMatrix, Error, Metrics, Result, SentimentClass};

/// Compute metrics over (actual, predicted) pairs.
///
/// Errors only when the pair list is empty; callers are expected to
/// check eligibility first.
pub fn compute(pairs: &[(SentimentClass, SentimentClass)]) -> Result<Metrics> {
    if pairs.is_empty() {
        return Err(Error::metrics("no eligible records to evaluate"));
    }

    let mut confusion_matrix = ConfusionMatrix::new();
    for (actual, predicted) in pairs {
        confusion_matrix.record(*actual, *predicted);
    }

    let accuracy = ratio(confusion_matrix.correct(), confusion_matrix.total());

    let mut precision_sum = 0.0;
    let mut recall_sum = 0.0;
    let mut f1_sum = 0.0;
    for class in SentimentClass::ALL {
        let tp = confusion_matrix.true_positives(class);
        let precision = ratio(tp, confusion_matrix.predicted_total(class));
        let recall = ratio(tp, confusion_matrix.actual_total(class));
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        precision_sum += precision;
        recall_sum += recall;
        f1_sum += f1;
    }

    let classes = SentimentClass::ALL.len() as f64;
    Ok(Metrics {
        accuracy,
        precision: precision_sum / classes,
        recall: recall_sum / classes,
        f1: f1_sum / classes,
        confusion_matrix,
    })
}

/// Round a value to `digits` decimal places
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Round every scalar metric in place; the confusion matrix is
/// integer-valued and untouched
pub fn round_metrics(metrics: &mut Metrics, digits: u32) {
    metrics.accuracy = round_to(metrics.accuracy, digits);
    metrics.precision = round_to(metrics.precision, digits);
    metrics.recall = round_to(metrics.recall, digits);
    metrics.f1 = round_to(metrics.f1, digits);
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentibatch_core::SentimentClass::{Negative, Neutral, Positive};

    #[test]
    fn perfect_predictions_score_one() {
        let pairs = vec![
            (Positive, Positive),
            (Neutral, Neutral),
            (Negative, Negative),
            (Positive, Positive),
        ];
        let metrics = compute(&pairs).unwrap();
        assert_eq!(metrics.accuracy, 1.0);
        assert_eq!(metrics.precision, 1.0);
        assert_eq!(metrics.recall, 1.0);
        assert_eq!(metrics.f1, 1.0);
        assert_eq!(metrics.confusion_matrix.get(Positive, Positive), 2);
        assert_eq!(metrics.confusion_matrix.get(Positive, Negative), 0);
    }

    #[test]
    fn absent_classes_contribute_zero_not_errors() {
        // Only positive appears; neutral and negative have zero true
        // and predicted instances.
        let pairs = vec![(Positive, Positive), (Positive, Positive)];
        let metrics = compute(&pairs).unwrap();
        assert_eq!(metrics.accuracy, 1.0);
        // Macro average over 3 classes, two of which contribute 0.
        assert!((metrics.precision - 1.0 / 3.0).abs() < 1e-9);
        assert!((metrics.recall - 1.0 / 3.0).abs() < 1e-9);
        assert!((metrics.f1 - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn all_wrong_predictions_score_zero() {
        let pairs = vec![(Positive, Negative), (Negative, Positive)];
        let metrics = compute(&pairs).unwrap();
        assert_eq!(metrics.accuracy, 0.0);
        assert_eq!(metrics.precision, 0.0);
        assert_eq!(metrics.recall, 0.0);
        assert_eq!(metrics.f1, 0.0);
    }

    #[test]
    fn mixed_batch_matches_hand_computation() {
        // positive: tp=1, predicted=1, actual=2 -> p=1.0, r=0.5
        // neutral:  tp=1, predicted=2, actual=1 -> p=0.5, r=1.0
        // negative: tp=0, predicted=0, actual=0 -> 0, 0
        let pairs = vec![
            (Positive, Positive),
            (Positive, Neutral),
            (Neutral, Neutral),
        ];
        let metrics = compute(&pairs).unwrap();
        assert!((metrics.accuracy - 2.0 / 3.0).abs() < 1e-9);
        assert!((metrics.precision - 0.5).abs() < 1e-9);
        assert!((metrics.recall - 0.5).abs() < 1e-9);
        // f1 per class: 2/3, 2/3, 0 -> macro 4/9
        assert!((metrics.f1 - 4.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn empty_pairs_are_a_metrics_error() {
        let err = compute(&[]).unwrap_err();
        assert!(matches!(err, Error::Metrics(_)));
        assert!(!err.is_batch_fatal());
    }

    #[test]
    fn rounding_truncates_to_digits() {
        assert_eq!(round_to(1.0 / 3.0, 2), 0.33);
        assert_eq!(round_to(2.0 / 3.0, 2), 0.67);
        assert_eq!(round_to(0.5, 2), 0.5);

        let mut metrics = compute(&[
            (Positive, Positive),
            (Positive, Neutral),
            (Positive, Negative),
        ])
        .unwrap();
        round_metrics(&mut metrics, 2);
        assert_eq!(metrics.accuracy, 0.33);
    }
}
