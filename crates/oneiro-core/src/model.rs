//! Core value types shared by every Oneiro engine.
//!
//! All types here are plain serde-derived values: no I/O handles, no
//! persisted identifiers beyond the entry's own UUID. Narratives and
//! biometric samples are assumed to be already in memory — fetching them
//! from storage or a wire protocol belongs to the surrounding layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─────────────────────────────────────────────
// Narrative text bounds
// ─────────────────────────────────────────────

/// Maximum narrative length, in characters, accepted by the analysis
/// pipeline. Matches the emotion classifier's input window, so a single
/// truncation bounds every downstream engine's work.
pub const MAX_NARRATIVE_CHARS: usize = 512;

/// Truncate a narrative to [`MAX_NARRATIVE_CHARS`], respecting char
/// boundaries. Returns the original slice when it already fits.
pub fn truncate_narrative(text: &str) -> &str {
    match text.char_indices().nth(MAX_NARRATIVE_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// ─────────────────────────────────────────────
// Archetype
// ─────────────────────────────────────────────

/// A discrete symbolic theme detected in dream text.
///
/// Variants are declared in lexicographic order so the derived `Ord`
/// gives the deterministic sort order the matcher promises.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Chased,
    Death,
    Falling,
    Flying,
    Naked,
    Teeth,
    Test,
    Vehicle,
    Water,
}

impl Archetype {
    /// Every archetype, in sort order.
    pub const ALL: [Archetype; 9] = [
        Archetype::Chased,
        Archetype::Death,
        Archetype::Falling,
        Archetype::Flying,
        Archetype::Naked,
        Archetype::Teeth,
        Archetype::Test,
        Archetype::Vehicle,
        Archetype::Water,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Chased => "chased",
            Archetype::Death => "death",
            Archetype::Falling => "falling",
            Archetype::Flying => "flying",
            Archetype::Naked => "naked",
            Archetype::Teeth => "teeth",
            Archetype::Test => "test",
            Archetype::Vehicle => "vehicle",
            Archetype::Water => "water",
        }
    }

    /// Parse a lowercase archetype name. Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Archetype::ALL.iter().copied().find(|a| a.as_str() == s)
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────
// Emotion
// ─────────────────────────────────────────────

/// Fallback color for labels with no entry in the color table.
pub const FALLBACK_COLOR: &str = "#000000";

/// Closed label set of the emotion classifier, plus the `Unknown`
/// sentinel used for blank input and classifier failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Anger,
    Disgust,
    Fear,
    Joy,
    Love,
    Neutral,
    Sadness,
    Surprise,
    Unknown,
}

impl EmotionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Anger => "anger",
            EmotionLabel::Disgust => "disgust",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Joy => "joy",
            EmotionLabel::Love => "love",
            EmotionLabel::Neutral => "neutral",
            EmotionLabel::Sadness => "sadness",
            EmotionLabel::Surprise => "surprise",
            EmotionLabel::Unknown => "unknown",
        }
    }

    /// Normalize an arbitrary classifier label. Casing is ignored;
    /// anything outside the closed set maps to `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "anger" => EmotionLabel::Anger,
            "disgust" => EmotionLabel::Disgust,
            "fear" => EmotionLabel::Fear,
            "joy" => EmotionLabel::Joy,
            "love" => EmotionLabel::Love,
            "neutral" => EmotionLabel::Neutral,
            "sadness" => EmotionLabel::Sadness,
            "surprise" => EmotionLabel::Surprise,
            _ => EmotionLabel::Unknown,
        }
    }

    /// Fixed RGB-hex color for the label. Labels absent from the table
    /// (currently `love`) fall back to [`FALLBACK_COLOR`].
    pub fn color(&self) -> &'static str {
        match self {
            EmotionLabel::Joy => "#FFD700",
            EmotionLabel::Fear => "#800080",
            EmotionLabel::Anger => "#FF0000",
            EmotionLabel::Sadness => "#1E90FF",
            EmotionLabel::Neutral => "#808080",
            EmotionLabel::Surprise => "#FFA500",
            EmotionLabel::Disgust => "#008000",
            EmotionLabel::Love | EmotionLabel::Unknown => FALLBACK_COLOR,
        }
    }

    /// Labels that trigger the negative-emotion tip set.
    pub fn is_negative(&self) -> bool {
        matches!(
            self,
            EmotionLabel::Fear | EmotionLabel::Anger | EmotionLabel::Sadness
        )
    }
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One model-ranked emotion detected in a narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub label: EmotionLabel,
    /// Confidence in [0, 1], rounded to two decimals at construction.
    pub confidence: f32,
    /// RGB-hex color keyed by label.
    pub color: String,
}

impl EmotionScore {
    /// Build a score from a raw classifier confidence: clamps to [0, 1],
    /// rounds to two decimals, attaches the label's color.
    pub fn new(label: EmotionLabel, raw_confidence: f32) -> Self {
        let clamped = if raw_confidence.is_finite() {
            raw_confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            label,
            confidence: (clamped * 100.0).round() / 100.0,
            color: label.color().to_string(),
        }
    }

    /// The sentinel returned for blank input or classifier failure.
    pub fn sentinel() -> Self {
        EmotionScore::new(EmotionLabel::Unknown, 0.0)
    }
}

// ─────────────────────────────────────────────
// Biometrics
// ─────────────────────────────────────────────

/// One sample from a named biometric series (heart rate, HRV, ...).
///
/// Timestamps are unix seconds. Series arrive possibly unsorted; the
/// correlation engine tolerates any order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricSample {
    pub timestamp: i64,
    pub value: f64,
}

impl BiometricSample {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

// ─────────────────────────────────────────────
// Chronotype
// ─────────────────────────────────────────────

/// The four sleep-personality categories used to personalize tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chronotype {
    Lion,
    Bear,
    Wolf,
    Dolphin,
}

impl Chronotype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Chronotype::Lion => "lion",
            Chronotype::Bear => "bear",
            Chronotype::Wolf => "wolf",
            Chronotype::Dolphin => "dolphin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "lion" => Some(Chronotype::Lion),
            "bear" => Some(Chronotype::Bear),
            "wolf" => Some(Chronotype::Wolf),
            "dolphin" => Some(Chronotype::Dolphin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Chronotype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────
// DreamEntry
// ─────────────────────────────────────────────

/// An annotated dream record, the unit consumed by the weekly
/// aggregator. Carries the per-item pipeline's output, not raw text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DreamEntry {
    pub id: Uuid,
    /// When the dream was logged (unix seconds).
    pub timestamp: i64,
    /// Model-ranked emotions detected in the narrative.
    pub emotions: Vec<EmotionScore>,
    /// Sorted, deduplicated archetype set.
    pub archetypes: Vec<Archetype>,
    /// Self-reported sleep quality on a 1-5 scale, if reported.
    pub sleep_quality: Option<u8>,
}

impl DreamEntry {
    pub fn new(timestamp: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            emotions: Vec::new(),
            archetypes: Vec::new(),
            sleep_quality: None,
        }
    }
}
