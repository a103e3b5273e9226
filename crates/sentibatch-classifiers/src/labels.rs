//! Static ground-truth label map and normalizer
//!
//! The raw emotion-word partition is a fixed dataset contract shared
//! with the upstream scraping pipeline. Reproduce it as data; do not
//! re-derive classes from the polarity lexicon.

use sentibatch_core::SentimentClass;
use std::collections::HashMap;

/// Raw label -> class partition. Many-to-one, keys lower-cased.
pub const LABEL_MAP: &[(&str, SentimentClass)] = &[
    ("joy", SentimentClass::Positive),
    ("enjoyment", SentimentClass::Positive),
    ("adoration", SentimentClass::Positive),
    ("euphoria", SentimentClass::Positive),
    ("empowerment", SentimentClass::Positive),
    ("compassion", SentimentClass::Positive),
    ("tenderness", SentimentClass::Positive),
    ("arousal", SentimentClass::Positive),
    ("fulfillment", SentimentClass::Positive),
    ("reverence", SentimentClass::Positive),
    ("hopeful", SentimentClass::Positive),
    ("proud", SentimentClass::Positive),
    ("grateful", SentimentClass::Positive),
    ("empathetic", SentimentClass::Positive),
    ("compassionate", SentimentClass::Positive),
    ("free-spirited", SentimentClass::Positive),
    ("inspired", SentimentClass::Positive),
    ("confident", SentimentClass::Positive),
    ("overjoyed", SentimentClass::Positive),
    ("motivation", SentimentClass::Positive),
    ("joyfulreunion", SentimentClass::Positive),
    ("satisfaction", SentimentClass::Positive),
    ("appreciation", SentimentClass::Positive),
    ("wonderment", SentimentClass::Positive),
    ("optimism", SentimentClass::Positive),
    ("enchantment", SentimentClass::Positive),
    ("intrigue", SentimentClass::Positive),
    ("playfuljoy", SentimentClass::Positive),
    ("mindfulness", SentimentClass::Positive),
    ("dreamchaser", SentimentClass::Positive),
    ("elegance", SentimentClass::Positive),
    ("whimsy", SentimentClass::Positive),
    ("pensive", SentimentClass::Positive),
    ("harmony", SentimentClass::Positive),
    ("creativity", SentimentClass::Positive),
    ("radiance", SentimentClass::Positive),
    ("rejuvenation", SentimentClass::Positive),
    ("coziness", SentimentClass::Positive),
    ("adventure", SentimentClass::Positive),
    ("melodic", SentimentClass::Positive),
    ("festivejoy", SentimentClass::Positive),
    ("innerjourney", SentimentClass::Positive),
    ("dazzle", SentimentClass::Positive),
    ("adrenaline", SentimentClass::Positive),
    ("artisticburst", SentimentClass::Positive),
    ("culinaryodyssey", SentimentClass::Positive),
    ("resilience", SentimentClass::Positive),
    ("immersion", SentimentClass::Positive),
    ("spark", SentimentClass::Positive),
    ("marvel", SentimentClass::Positive),
    ("amazement", SentimentClass::Positive),
    ("captivation", SentimentClass::Positive),
    ("tranquility", SentimentClass::Positive),
    ("grandeur", SentimentClass::Positive),
    ("emotion", SentimentClass::Positive),
    ("energy", SentimentClass::Positive),
    ("charm", SentimentClass::Positive),
    ("colorful", SentimentClass::Positive),
    ("hypnotic", SentimentClass::Positive),
    ("connection", SentimentClass::Positive),
    ("iconic", SentimentClass::Positive),
    ("journey", SentimentClass::Positive),
    ("engagement", SentimentClass::Positive),
    ("touched", SentimentClass::Positive),
    ("triumph", SentimentClass::Positive),
    ("heartwarming", SentimentClass::Positive),
    ("solace", SentimentClass::Positive),
    ("breakthrough", SentimentClass::Positive),
    ("joy in baking", SentimentClass::Positive),
    ("envisioning history", SentimentClass::Positive),
    ("imagination", SentimentClass::Positive),
    ("vibrancy", SentimentClass::Positive),
    ("mesmerizing", SentimentClass::Positive),
    ("culinary adventure", SentimentClass::Positive),
    ("winter magic", SentimentClass::Positive),
    ("thrilling journey", SentimentClass::Positive),
    ("nature's beauty", SentimentClass::Positive),
    ("celestial wonder", SentimentClass::Positive),
    ("creative inspiration", SentimentClass::Positive),
    ("runway creativity", SentimentClass::Positive),
    ("ocean's freedom", SentimentClass::Positive),
    ("whispers of the past", SentimentClass::Positive),
    ("relief", SentimentClass::Positive),
    ("happy", SentimentClass::Positive),
    ("excitement", SentimentClass::Positive),
    ("positive", SentimentClass::Positive),
    ("happiness", SentimentClass::Positive),
    ("love", SentimentClass::Positive),
    ("amusement", SentimentClass::Positive),
    ("admiration", SentimentClass::Positive),
    ("affection", SentimentClass::Positive),
    ("awe", SentimentClass::Positive),
    ("acceptance", SentimentClass::Positive),
    ("elation", SentimentClass::Positive),
    ("contentment", SentimentClass::Positive),
    ("serenity", SentimentClass::Positive),
    ("gratitude", SentimentClass::Positive),
    ("hope", SentimentClass::Positive),
    ("enthusiasm", SentimentClass::Positive),
    ("curiosity", SentimentClass::Positive),
    ("zest", SentimentClass::Positive),
    ("playful", SentimentClass::Positive),
    ("inspiration", SentimentClass::Positive),
    ("contemplation", SentimentClass::Positive),
    ("blessed", SentimentClass::Positive),
    ("reflection", SentimentClass::Positive),
    ("confidence", SentimentClass::Positive),
    ("accomplishment", SentimentClass::Positive),
    ("wonder", SentimentClass::Positive),
    ("freedom", SentimentClass::Positive),
    ("positivity", SentimentClass::Positive),
    ("kindness", SentimentClass::Positive),
    ("friendship", SentimentClass::Positive),
    ("success", SentimentClass::Positive),
    ("exploration", SentimentClass::Positive),
    ("romance", SentimentClass::Positive),
    ("celebration", SentimentClass::Positive),
    ("ecstasy", SentimentClass::Positive),
    ("pride", SentimentClass::Positive),
    ("thrill", SentimentClass::Positive),
    ("sadness", SentimentClass::Negative),
    ("disgust", SentimentClass::Negative),
    ("disappointed", SentimentClass::Negative),
    ("bitter", SentimentClass::Negative),
    ("helplessness", SentimentClass::Negative),
    ("yearning", SentimentClass::Negative),
    ("fearful", SentimentClass::Negative),
    ("jealous", SentimentClass::Negative),
    ("frustrated", SentimentClass::Negative),
    ("envious", SentimentClass::Negative),
    ("bittersweet", SentimentClass::Negative),
    ("suffering", SentimentClass::Negative),
    ("emotionalstorm", SentimentClass::Negative),
    ("lostlove", SentimentClass::Negative),
    ("darkness", SentimentClass::Negative),
    ("desperation", SentimentClass::Negative),
    ("ruins", SentimentClass::Negative),
    ("heartache", SentimentClass::Negative),
    ("solitude", SentimentClass::Negative),
    ("obstacle", SentimentClass::Negative),
    ("sympathy", SentimentClass::Negative),
    ("pressure", SentimentClass::Negative),
    ("renewed effort", SentimentClass::Negative),
    ("miscalculation", SentimentClass::Negative),
    ("challenge", SentimentClass::Negative),
    ("negative", SentimentClass::Negative),
    ("anger", SentimentClass::Negative),
    ("fear", SentimentClass::Negative),
    ("shame", SentimentClass::Negative),
    ("despair", SentimentClass::Negative),
    ("grief", SentimentClass::Negative),
    ("loneliness", SentimentClass::Negative),
    ("jealousy", SentimentClass::Negative),
    ("resentment", SentimentClass::Negative),
    ("frustration", SentimentClass::Negative),
    ("boredom", SentimentClass::Negative),
    ("anxiety", SentimentClass::Negative),
    ("intimidation", SentimentClass::Negative),
    ("envy", SentimentClass::Negative),
    ("regret", SentimentClass::Negative),
    ("bitterness", SentimentClass::Negative),
    ("apprehensive", SentimentClass::Negative),
    ("overwhelmed", SentimentClass::Negative),
    ("devastated", SentimentClass::Negative),
    ("dismissive", SentimentClass::Negative),
    ("heartbreak", SentimentClass::Negative),
    ("betrayal", SentimentClass::Negative),
    ("isolation", SentimentClass::Negative),
    ("disappointment", SentimentClass::Negative),
    ("exhaustion", SentimentClass::Negative),
    ("sorrow", SentimentClass::Negative),
    ("desolation", SentimentClass::Negative),
    ("loss", SentimentClass::Negative),
    ("sad", SentimentClass::Negative),
    ("hate", SentimentClass::Negative),
    ("bad", SentimentClass::Negative),
    ("embarrassed", SentimentClass::Negative),
    ("mischievous", SentimentClass::Negative),
    ("surprise", SentimentClass::Neutral),
    ("anticipation", SentimentClass::Neutral),
    ("kind", SentimentClass::Neutral),
    ("nostalgia", SentimentClass::Neutral),
    ("suspense", SentimentClass::Neutral),
    ("determination", SentimentClass::Neutral),
    ("calmness", SentimentClass::Neutral),
    ("neutral", SentimentClass::Neutral),
    ("confusion", SentimentClass::Neutral),
    ("indifference", SentimentClass::Neutral),
    ("numbness", SentimentClass::Neutral),
    ("melancholy", SentimentClass::Neutral),
    ("ambivalence", SentimentClass::Neutral),
];

/// Normalizes raw ground-truth labels against [`LABEL_MAP`].
///
/// Lookup is case- and surrounding-whitespace-insensitive. Unknown
/// labels map to `None` and are excluded from evaluation.
#[derive(Debug, Clone)]
pub struct LabelNormalizer {
    map: HashMap<&'static str, SentimentClass>,
}

impl LabelNormalizer {
    pub fn new() -> Self {
        Self {
            map: LABEL_MAP.iter().copied().collect(),
        }
    }

    /// Map a raw label to its class, or `None` if unknown
    pub fn normalize(&self, raw: &str) -> Option<SentimentClass> {
        let key = raw.trim().to_lowercase();
        self.map.get(key.as_str()).copied()
    }

    /// Number of known raw labels
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for LabelNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_has_no_duplicate_keys() {
        let normalizer = LabelNormalizer::new();
        assert_eq!(normalizer.len(), LABEL_MAP.len());
    }

    #[test]
    fn normalize_is_case_and_whitespace_insensitive() {
        let normalizer = LabelNormalizer::new();
        assert_eq!(
            normalizer.normalize("  Joy "),
            normalizer.normalize("joy")
        );
        assert_eq!(normalizer.normalize("JOY"), Some(SentimentClass::Positive));
        assert_eq!(
            normalizer.normalize("\tBitter\n"),
            Some(SentimentClass::Negative)
        );
    }

    #[test]
    fn normalize_is_idempotent_through_class_names() {
        // Already-normalized class names map to themselves.
        let normalizer = LabelNormalizer::new();
        for class in SentimentClass::ALL {
            assert_eq!(normalizer.normalize(class.as_str()), Some(class));
        }
    }

    #[test]
    fn unknown_labels_map_to_none() {
        let normalizer = LabelNormalizer::new();
        assert_eq!(normalizer.normalize("quixotic"), None);
        assert_eq!(normalizer.normalize(""), None);
    }

    #[test]
    fn partition_spot_checks() {
        // A few entries the partition assigns against intuition; they
        // must stay exactly as the dataset defines them.
        let normalizer = LabelNormalizer::new();
        assert_eq!(
            normalizer.normalize("sympathy"),
            Some(SentimentClass::Negative)
        );
        assert_eq!(
            normalizer.normalize("challenge"),
            Some(SentimentClass::Negative)
        );
        assert_eq!(
            normalizer.normalize("melancholy"),
            Some(SentimentClass::Neutral)
        );
        assert_eq!(
            normalizer.normalize("pensive"),
            Some(SentimentClass::Positive)
        );
        assert_eq!(
            normalizer.normalize("joy in baking"),
            Some(SentimentClass::Positive)
        );
        assert_eq!(
            normalizer.normalize("nature's beauty"),
            Some(SentimentClass::Positive)
        );
    }
}
