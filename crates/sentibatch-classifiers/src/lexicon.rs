//! Weighted sentiment lexicon
//!
//! Word-level polarity weights in [-1.0, 1.0], plus negation words and
//! intensity modifiers. The lexicon is the scoring source for
//! [`crate::polarity::PolarityClassifier`].

use std::collections::HashMap;

/// Strongly positive words (0.7 - 0.9)
const STRONG_POSITIVE: &[(&str, f64)] = &[
    ("excellent", 0.8),
    ("amazing", 0.8),
    ("wonderful", 0.8),
    ("fantastic", 0.8),
    ("awesome", 0.75),
    ("incredible", 0.85),
    ("outstanding", 0.85),
    ("brilliant", 0.8),
    ("perfect", 0.85),
    ("superb", 0.8),
    ("magnificent", 0.85),
    ("delightful", 0.75),
    ("love", 0.7),
    ("loved", 0.7),
    ("adore", 0.75),
    ("best", 0.8),
    ("beautiful", 0.7),
    ("great", 0.7),
    ("happy", 0.7),
    ("joy", 0.7),
    ("joyful", 0.75),
    ("thrilled", 0.8),
    ("excited", 0.7),
    ("exceptional", 0.85),
    ("flawless", 0.85),
];

/// Moderately positive words (0.3 - 0.6)
const MODERATE_POSITIVE: &[(&str, f64)] = &[
    ("good", 0.5),
    ("nice", 0.45),
    ("enjoy", 0.5),
    ("enjoyed", 0.5),
    ("enjoyable", 0.55),
    ("like", 0.35),
    ("liked", 0.35),
    ("pleasant", 0.5),
    ("pleased", 0.55),
    ("glad", 0.5),
    ("fun", 0.5),
    ("helpful", 0.45),
    ("impressive", 0.6),
    ("satisfying", 0.55),
    ("satisfied", 0.55),
    ("recommend", 0.5),
    ("recommended", 0.5),
    ("solid", 0.4),
    ("smooth", 0.4),
    ("comfortable", 0.4),
    ("fresh", 0.35),
    ("useful", 0.45),
    ("reliable", 0.5),
    ("friendly", 0.5),
    ("charming", 0.55),
    ("success", 0.5),
    ("successful", 0.55),
    ("win", 0.5),
    ("improved", 0.45),
    ("improvement", 0.4),
];

/// Weakly positive words (around the banded neutral edge)
const WEAK_POSITIVE: &[(&str, f64)] = &[
    ("ok", 0.1),
    ("okay", 0.1),
    ("fine", 0.2),
    ("decent", 0.2),
    ("adequate", 0.15),
    ("acceptable", 0.15),
];

/// Strongly negative words (-0.7 - -0.9)
const STRONG_NEGATIVE: &[(&str, f64)] = &[
    ("terrible", -0.8),
    ("awful", -0.8),
    ("horrible", -0.85),
    ("hate", -0.7),
    ("hated", -0.7),
    ("worst", -0.85),
    ("disgusting", -0.85),
    ("dreadful", -0.8),
    ("atrocious", -0.85),
    ("appalling", -0.85),
    ("abysmal", -0.85),
    ("disaster", -0.8),
    ("disastrous", -0.85),
    ("garbage", -0.75),
    ("pathetic", -0.75),
    ("useless", -0.7),
    ("unbearable", -0.8),
    ("miserable", -0.75),
    ("furious", -0.75),
];

/// Moderately negative words (-0.3 - -0.6)
const MODERATE_NEGATIVE: &[(&str, f64)] = &[
    ("bad", -0.5),
    ("poor", -0.5),
    ("sad", -0.5),
    ("angry", -0.55),
    ("disappointed", -0.55),
    ("disappointing", -0.55),
    ("annoying", -0.5),
    ("annoyed", -0.5),
    ("boring", -0.45),
    ("ugly", -0.5),
    ("wrong", -0.35),
    ("problem", -0.3),
    ("problems", -0.3),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.55),
    ("broken", -0.5),
    ("mediocre", -0.4),
    ("frustrating", -0.55),
    ("frustrated", -0.55),
    ("unhappy", -0.55),
    ("waste", -0.5),
    ("wasted", -0.5),
    ("slow", -0.3),
    ("unreliable", -0.5),
    ("confusing", -0.4),
    ("uncomfortable", -0.45),
    ("overpriced", -0.5),
    ("lose", -0.4),
    ("lost", -0.4),
];

/// Weakly negative words
const WEAK_NEGATIVE: &[(&str, f64)] = &[
    ("meh", -0.1),
    ("dull", -0.25),
    ("lacking", -0.2),
    ("bland", -0.2),
];

/// Negation words that flip a following sentiment hit
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "cannot", "can't", "don't", "doesn't", "didn't",
    "isn't", "wasn't", "aren't", "weren't", "won't", "wouldn't", "couldn't", "shouldn't",
];

/// Intensity modifiers applied to the next sentiment hit
const MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("absolutely", 1.5),
    ("incredibly", 1.5),
    ("totally", 1.3),
    ("quite", 1.1),
    ("so", 1.2),
    ("somewhat", 0.7),
    ("slightly", 0.5),
    ("barely", 0.4),
    ("hardly", 0.4),
];

/// Weighted word-polarity lexicon
#[derive(Debug, Clone)]
pub struct PolarityLexicon {
    scores: HashMap<&'static str, f64>,
    modifiers: HashMap<&'static str, f64>,
    negations: Vec<&'static str>,
}

impl PolarityLexicon {
    /// Build the default general-purpose English lexicon
    pub fn new() -> Self {
        let mut scores = HashMap::new();
        for table in [
            STRONG_POSITIVE,
            MODERATE_POSITIVE,
            WEAK_POSITIVE,
            STRONG_NEGATIVE,
            MODERATE_NEGATIVE,
            WEAK_NEGATIVE,
        ] {
            for (word, weight) in table {
                scores.insert(*word, *weight);
            }
        }

        Self {
            scores,
            modifiers: MODIFIERS.iter().copied().collect(),
            negations: NEGATIONS.to_vec(),
        }
    }

    /// Polarity weight for a lower-cased token, if known
    pub fn score(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    /// Intensity multiplier for a lower-cased token, if it is a modifier
    pub fn modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(word).copied()
    }

    /// True if the token negates a following sentiment word
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.iter().any(|n| *n == word)
    }

    /// Number of scored words in the lexicon
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl Default for PolarityLexicon {
    fn default() -> Self {
        Self::new()
    }
}
