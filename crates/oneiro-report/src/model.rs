use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use oneiro_core::{Archetype, EmotionLabel};

/// Aggregate report over one analysis window.
///
/// Recomputed fully on each request; nothing here is persisted by the
/// core. Distribution maps iterate in key order so serialized reports
/// are stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// Window start (unix seconds, inclusive).
    pub period_start: i64,
    /// Window end — the "now" the report was keyed to.
    pub period_end: i64,
    /// Number of dreams logged inside the window.
    pub dream_count: usize,
    /// Highest-frequency emotion, `None` for an empty window.
    pub dominant_emotion: Option<EmotionLabel>,
    /// Highest-frequency archetype, `None` for an empty window.
    pub dominant_archetype: Option<Archetype>,
    /// Mean self-reported sleep quality, one decimal; `None` when no
    /// entry in the window reports it.
    pub avg_sleep_quality: Option<f64>,
    /// Emotion label → occurrence count across the window.
    pub emotion_distribution: BTreeMap<String, usize>,
    /// Archetype → occurrence count across the window.
    pub archetype_distribution: BTreeMap<String, usize>,
    /// Pattern-triggered journal prompts; never empty for a non-empty
    /// window.
    pub journal_prompts: Vec<String>,
    /// Human-readable digest of the window.
    pub summary: String,
}
