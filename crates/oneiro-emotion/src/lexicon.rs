//! Deterministic word-count classifier.
//!
//! A tiny lexicon of emotional words; each hit counts toward its label
//! and counts are normalized by the maximum, so the strongest label
//! always scores 1.0. Useful as a test double and as an offline
//! fallback when no model backend is wired in.

use crate::error::ClassifyError;
use crate::scorer::TextClassifier;

/// Emotional word → label.
static EMOTIONAL_WORDS: &[(&str, &str)] = &[
    ("happy", "joy"),
    ("joyful", "joy"),
    ("scared", "fear"),
    ("afraid", "fear"),
    ("terrified", "fear"),
    ("angry", "anger"),
    ("furious", "anger"),
    ("sad", "sadness"),
    ("crying", "sadness"),
    ("surprised", "surprise"),
    ("disgusted", "disgust"),
];

/// Lexicon-backed [`TextClassifier`]. Stateless and fully deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        LexiconClassifier
    }
}

impl TextClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> Result<Vec<(String, f32)>, ClassifyError> {
        let lowered = text.to_lowercase();
        let mut counts: Vec<(&str, u32)> = Vec::new();
        for token in lowered.split(|c: char| !c.is_alphanumeric()) {
            if let Some((_, label)) = EMOTIONAL_WORDS.iter().find(|(word, _)| *word == token) {
                match counts.iter_mut().find(|(l, _)| l == label) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((label, 1)),
                }
            }
        }

        let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(1);
        let mut ranked: Vec<(String, f32)> = counts
            .into_iter()
            .map(|(label, n)| (label.to_owned(), n as f32 / max as f32))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        Ok(ranked)
    }
}
