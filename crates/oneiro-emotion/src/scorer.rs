//! Classifier adapter: truncation, normalization, sentinel conversion.

use tracing::warn;

use oneiro_core::{truncate_narrative, EmotionLabel, EmotionScore};

use crate::error::ClassifyError;

/// Text-classification capability.
///
/// Returns model-ranked `(label, score)` pairs over a fixed closed label
/// set. Scores are assumed to sum to at most 1 per call; the classifier
/// is not required to be exhaustive over the label set.
pub trait TextClassifier {
    fn classify(&self, text: &str) -> Result<Vec<(String, f32)>, ClassifyError>;
}

impl<C: TextClassifier + ?Sized> TextClassifier for &C {
    fn classify(&self, text: &str) -> Result<Vec<(String, f32)>, ClassifyError> {
        (**self).classify(text)
    }
}

/// Scores narrative text, never propagating classifier failure.
pub struct EmotionScorer<C> {
    classifier: C,
}

impl<C: TextClassifier> EmotionScorer<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// Classify `text` into an ordered sequence of emotion scores.
    ///
    /// Blank text short-circuits to the sentinel without invoking the
    /// classifier. Any backend failure — error return, non-finite score,
    /// empty output — also yields the single sentinel entry.
    pub fn score(&self, text: &str) -> Vec<EmotionScore> {
        if text.trim().is_empty() {
            return vec![EmotionScore::sentinel()];
        }

        let bounded = truncate_narrative(text);
        match self.classifier.classify(bounded) {
            Ok(ranked) if !ranked.is_empty() => {
                if ranked.iter().any(|(_, score)| !score.is_finite()) {
                    warn!("classifier returned non-finite score, using sentinel");
                    return vec![EmotionScore::sentinel()];
                }
                ranked
                    .into_iter()
                    .map(|(label, score)| {
                        EmotionScore::new(EmotionLabel::from_label(&label), score)
                    })
                    .collect()
            }
            Ok(_) => {
                warn!("classifier returned no labels, using sentinel");
                vec![EmotionScore::sentinel()]
            }
            Err(e) => {
                warn!(error = %e, "emotion classification failed, using sentinel");
                vec![EmotionScore::sentinel()]
            }
        }
    }
}
