//! # oneiro-emotion
//!
//! **Emotion Scorer** — thin adapter around a text-classification
//! capability. The scorer truncates input, normalizes labels, clamps and
//! rounds confidences, attaches the fixed color mapping, and converts
//! every classifier failure into the unknown-label sentinel so no fault
//! escapes the per-call boundary.
//!
//! The classifier itself is an external collaborator behind the
//! [`TextClassifier`] trait. [`LexiconClassifier`] is a deterministic
//! built-in implementation for tests and offline use.

pub mod error;
pub mod lexicon;
pub mod scorer;

pub use error::ClassifyError;
pub use lexicon::LexiconClassifier;
pub use scorer::{EmotionScorer, TextClassifier};
