//! SentiBatch Classifiers
//!
//! Lexicon-based sentiment classification and ground-truth label
//! normalization for batch runs.
//!
//! The polarity classifier scores text on a [-1.0, 1.0] scale and maps
//! the score to the fixed 3-class taxonomy through a configurable
//! threshold policy. The label normalizer resolves raw emotion words
//! against a static partition shared with the upstream pipeline.

pub mod classifier;
pub mod labels;
pub mod lexicon;
pub mod polarity;

pub use classifier::{Classification, Classifier};
pub use labels::{LabelNormalizer, LABEL_MAP};
pub use lexicon::PolarityLexicon;
pub use polarity::{PolarityClassifier, ThresholdPolicy};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{Classification, Classifier};
    pub use crate::labels::LabelNormalizer;
    pub use crate::lexicon::PolarityLexicon;
    pub use crate::polarity::{PolarityClassifier, ThresholdPolicy};
}
