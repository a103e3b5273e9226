//! Lexicon-based polarity classifier
//!
//! Scores text on a [-1.0, 1.0] polarity scale by averaging weighted
//! lexicon hits, with a short negation window, then maps the score to a
//! class through a configurable [`ThresholdPolicy`].

use crate::classifier::{Classification, Classifier};
use crate::lexicon::PolarityLexicon;
use sentibatch_core::{Result, SentimentClass};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Maps a polarity score in [-1.0, 1.0] to a sentiment class.
///
/// A score strictly above `positive` is positive, strictly below
/// `negative` is negative, anything in between (inclusive) is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    pub positive: f64,
    pub negative: f64,
}

impl ThresholdPolicy {
    /// Zero policy: any nonzero score decides, exactly 0.0 is neutral
    pub const ZERO: Self = Self {
        positive: 0.0,
        negative: 0.0,
    };

    /// Banded policy: scores within [-0.1, 0.1] stay neutral
    pub const BANDED: Self = Self {
        positive: 0.1,
        negative: -0.1,
    };

    /// Map a score to its class under this policy
    pub fn apply(&self, score: f64) -> SentimentClass {
        if score > self.positive {
            SentimentClass::Positive
        } else if score < self.negative {
            SentimentClass::Negative
        } else {
            SentimentClass::Neutral
        }
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Lexicon-based sentiment polarity classifier
pub struct PolarityClassifier {
    name: String,
    lexicon: PolarityLexicon,
    thresholds: ThresholdPolicy,
    /// Tokens after a negation word that still get flipped
    negation_window: usize,
}

impl PolarityClassifier {
    /// Create a classifier with the default lexicon and the given policy
    pub fn new(thresholds: ThresholdPolicy) -> Self {
        Self {
            name: "polarity".to_string(),
            lexicon: PolarityLexicon::new(),
            thresholds,
            negation_window: 3,
        }
    }

    /// Override the classifier name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Swap in a custom lexicon
    pub fn with_lexicon(mut self, lexicon: PolarityLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Override the negation window
    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    /// The active threshold policy
    pub fn thresholds(&self) -> ThresholdPolicy {
        self.thresholds
    }

    /// Compute the polarity score for a text, in [-1.0, 1.0].
    ///
    /// Texts with no lexicon hits score exactly 0.0.
    pub fn score(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut hits = 0usize;
        let mut modifier = 1.0;
        let mut negated = false;
        let mut since_negation = 0usize;

        for token in tokenize(text) {
            if self.lexicon.is_negation(&token) {
                negated = true;
                since_negation = 0;
                continue;
            }

            if let Some(m) = self.lexicon.modifier(&token) {
                modifier = m;
                continue;
            }

            if let Some(base) = self.lexicon.score(&token) {
                let mut value = base * modifier;
                if negated && since_negation < self.negation_window {
                    // Flip with damping: "not good" is negative but
                    // weaker than "bad".
                    value = -value * 0.8;
                }
                total += value;
                hits += 1;
                modifier = 1.0;
            }

            if negated {
                since_negation += 1;
                if since_negation >= self.negation_window {
                    negated = false;
                }
            }
        }

        if hits == 0 {
            0.0
        } else {
            (total / hits as f64).clamp(-1.0, 1.0)
        }
    }
}

impl Classifier for PolarityClassifier {
    fn classify(&self, text: &str) -> Result<Classification> {
        let score = self.score(text);
        let class = self.thresholds.apply(score);
        trace!(score, class = %class, "scored text");
        Ok(Classification::new(class, score))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Lower-cased alphanumeric tokens, apostrophes kept inside words
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|t| !t.is_empty())
        .map(|t| t.trim_matches('\'').to_lowercase())
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_text_is_positive_under_both_policies() {
        for policy in [ThresholdPolicy::ZERO, ThresholdPolicy::BANDED] {
            let classifier = PolarityClassifier::new(policy);
            let result = classifier
                .classify("I love this, it is absolutely fantastic")
                .unwrap();
            assert_eq!(result.class, SentimentClass::Positive);
            assert!(result.score > 0.1);
        }
    }

    #[test]
    fn negative_text_is_negative_under_both_policies() {
        for policy in [ThresholdPolicy::ZERO, ThresholdPolicy::BANDED] {
            let classifier = PolarityClassifier::new(policy);
            let result = classifier
                .classify("This was terrible and I hate it")
                .unwrap();
            assert_eq!(result.class, SentimentClass::Negative);
            assert!(result.score < -0.1);
        }
    }

    #[test]
    fn text_without_lexicon_hits_scores_zero() {
        let classifier = PolarityClassifier::new(ThresholdPolicy::ZERO);
        let result = classifier
            .classify("The report was submitted on Tuesday")
            .unwrap();
        assert_eq!(result.score, 0.0);
        assert_eq!(result.class, SentimentClass::Neutral);
    }

    #[test]
    fn weak_signal_splits_the_two_policies() {
        // "ok" scores exactly 0.1: above zero but not above the band.
        let zero = PolarityClassifier::new(ThresholdPolicy::ZERO);
        let banded = PolarityClassifier::new(ThresholdPolicy::BANDED);

        let text = "The food was ok";
        assert_eq!(
            zero.classify(text).unwrap().class,
            SentimentClass::Positive
        );
        assert_eq!(
            banded.classify(text).unwrap().class,
            SentimentClass::Neutral
        );
    }

    #[test]
    fn negation_flips_polarity() {
        let classifier = PolarityClassifier::new(ThresholdPolicy::ZERO);

        let plain = classifier.classify("The service was good").unwrap();
        assert_eq!(plain.class, SentimentClass::Positive);

        let negated = classifier.classify("The service was not good").unwrap();
        assert_eq!(negated.class, SentimentClass::Negative);
        assert!(negated.score < 0.0);
    }

    #[test]
    fn negation_window_expires() {
        let classifier = PolarityClassifier::new(ThresholdPolicy::ZERO);

        // Four tokens between "not" and "good" put the hit outside the
        // default window of three.
        let result = classifier
            .classify("It is not what we expected here but good")
            .unwrap();
        assert_eq!(result.class, SentimentClass::Positive);
    }

    #[test]
    fn modifier_scales_the_next_hit() {
        let classifier = PolarityClassifier::new(ThresholdPolicy::ZERO);

        let plain = classifier.score("good");
        let boosted = classifier.score("very good");
        assert!(boosted > plain);

        let damped = classifier.score("slightly good");
        assert!(damped < plain);
    }

    #[test]
    fn empty_and_non_word_input_is_neutral() {
        let classifier = PolarityClassifier::new(ThresholdPolicy::BANDED);
        for text in ["", "   ", "!!! ... ???", "12345"] {
            let result = classifier.classify(text).unwrap();
            assert_eq!(result.class, SentimentClass::Neutral);
            assert_eq!(result.score, 0.0);
        }
    }

    #[test]
    fn score_is_always_in_unit_interval() {
        let classifier = PolarityClassifier::new(ThresholdPolicy::ZERO);
        let score = classifier.score("absolutely incredible amazing perfect outstanding");
        assert!((-1.0..=1.0).contains(&score));
        assert!(score > 0.9);
    }
}
