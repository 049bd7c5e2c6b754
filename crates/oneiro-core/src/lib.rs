//! # oneiro-core
//!
//! Shared data model for the Oneiro dream-analysis engines: archetype and
//! emotion vocabularies, biometric samples, annotated dream entries, and
//! the lemmatization seam used by the archetype matcher.
//!
//! Every engine crate (`oneiro-archetype`, `oneiro-emotion`,
//! `oneiro-correlate`, `oneiro-soundscape`, `oneiro-tips`,
//! `oneiro-report`) depends on this crate and nothing else in the
//! workspace, so the model types can flow between engines without glue.

pub mod lemma;
pub mod model;

pub use lemma::{Lemmatizer, RuleLemmatizer};
pub use model::{
    truncate_narrative, Archetype, BiometricSample, Chronotype, DreamEntry, EmotionLabel,
    EmotionScore, MAX_NARRATIVE_CHARS,
};
