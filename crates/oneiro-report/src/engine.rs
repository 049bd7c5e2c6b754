//! Window filtering, frequency tallies, and prompt rules.

use tracing::debug;

use oneiro_core::{Archetype, DreamEntry, EmotionLabel};

use crate::model::WeeklyReport;

const SECONDS_PER_DAY: i64 = 86_400;

const PROMPT_FALLING: &str =
    "Falling dreams often relate to control. What aspects of your life feel unstable?";
const PROMPT_CHASED: &str =
    "Being chased may represent avoidance. What are you running from in waking life?";
const PROMPT_SADNESS: &str =
    "Your dreams showed sadness. What recent events might be affecting your mood?";
const PROMPT_GENERIC: &str =
    "Reflect on any recurring symbols or themes in your dreams this week.";

/// Configuration for report generation.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Window length in days.
    pub window_days: u64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self { window_days: 7 }
    }
}

impl AggregatorConfig {
    pub fn from_env() -> Self {
        Self {
            window_days: std::env::var("ONEIRO_REPORT_WINDOW_DAYS")
                .ok().and_then(|s| s.parse().ok()).unwrap_or(7),
        }
    }
}

/// Insertion-ordered frequency tally, so the dominant-key tie-break is
/// "first encountered in input order" — deterministic for a given
/// window.
struct Tally<K: Copy + PartialEq> {
    counts: Vec<(K, usize)>,
}

impl<K: Copy + PartialEq> Tally<K> {
    fn new() -> Self {
        Self { counts: Vec::new() }
    }

    fn bump(&mut self, key: K) {
        match self.counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => self.counts.push((key, 1)),
        }
    }

    /// Highest-count key; ties keep the earlier-encountered key.
    fn dominant(&self) -> Option<K> {
        let mut best: Option<(K, usize)> = None;
        for &(key, count) in &self.counts {
            if best.map_or(true, |(_, n)| count > n) {
                best = Some((key, count));
            }
        }
        best.map(|(key, _)| key)
    }

    fn contains(&self, key: K) -> bool {
        self.counts.iter().any(|(k, _)| *k == key)
    }
}

/// The Weekly Aggregator.
pub struct WeeklyAggregator {
    pub config: AggregatorConfig,
}

impl WeeklyAggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    /// Aggregate the entries falling inside `[now - window, now]`.
    ///
    /// Pure: the same entries and the same `now` always produce the
    /// same report. An empty window yields an explicit no-data report.
    pub fn aggregate(&self, entries: &[DreamEntry], now: i64) -> WeeklyReport {
        let window_start = now - self.config.window_days as i64 * SECONDS_PER_DAY;
        let window: Vec<&DreamEntry> = entries
            .iter()
            .filter(|e| e.timestamp >= window_start)
            .collect();

        debug!(
            total = entries.len(),
            in_window = window.len(),
            "aggregating dream window"
        );

        if window.is_empty() {
            return WeeklyReport {
                period_start: window_start,
                period_end: now,
                dream_count: 0,
                dominant_emotion: None,
                dominant_archetype: None,
                avg_sleep_quality: None,
                emotion_distribution: Default::default(),
                archetype_distribution: Default::default(),
                journal_prompts: Vec::new(),
                summary: "No dreams logged in the analysis window.".to_string(),
            };
        }

        let mut emotions: Tally<EmotionLabel> = Tally::new();
        let mut archetypes: Tally<Archetype> = Tally::new();
        let mut sleep_qualities: Vec<f64> = Vec::new();

        for entry in &window {
            for score in &entry.emotions {
                emotions.bump(score.label);
            }
            for archetype in &entry.archetypes {
                archetypes.bump(*archetype);
            }
            if let Some(quality) = entry.sleep_quality {
                sleep_qualities.push(quality as f64);
            }
        }

        let avg_sleep_quality = if sleep_qualities.is_empty() {
            None
        } else {
            let mean = sleep_qualities.iter().sum::<f64>() / sleep_qualities.len() as f64;
            Some((mean * 10.0).round() / 10.0)
        };

        let dominant_emotion = emotions.dominant();
        let dominant_archetype = archetypes.dominant();
        let journal_prompts = journal_prompts(&emotions, &archetypes);
        let summary = summary(
            window.len(),
            dominant_emotion,
            dominant_archetype,
            avg_sleep_quality,
        );

        WeeklyReport {
            period_start: window_start,
            period_end: now,
            dream_count: window.len(),
            dominant_emotion,
            dominant_archetype,
            avg_sleep_quality,
            emotion_distribution: emotions
                .counts
                .iter()
                .map(|(label, n)| (label.as_str().to_string(), *n))
                .collect(),
            archetype_distribution: archetypes
                .counts
                .iter()
                .map(|(archetype, n)| (archetype.as_str().to_string(), *n))
                .collect(),
            journal_prompts,
            summary,
        }
    }
}

/// Fixed pattern rules; one generic prompt when none fires.
fn journal_prompts(emotions: &Tally<EmotionLabel>, archetypes: &Tally<Archetype>) -> Vec<String> {
    let mut prompts = Vec::new();
    if archetypes.contains(Archetype::Falling) {
        prompts.push(PROMPT_FALLING.to_string());
    }
    if archetypes.contains(Archetype::Chased) {
        prompts.push(PROMPT_CHASED.to_string());
    }
    if emotions.contains(EmotionLabel::Sadness) {
        prompts.push(PROMPT_SADNESS.to_string());
    }
    if prompts.is_empty() {
        prompts.push(PROMPT_GENERIC.to_string());
    }
    prompts
}

fn summary(
    count: usize,
    dominant_emotion: Option<EmotionLabel>,
    dominant_archetype: Option<Archetype>,
    avg_sleep_quality: Option<f64>,
) -> String {
    let mut parts = vec![format!("{count} dream(s) logged this period.")];
    if let Some(emotion) = dominant_emotion {
        parts.push(format!("Dominant emotion: {emotion}."));
    }
    if let Some(archetype) = dominant_archetype {
        parts.push(format!("Most common archetype: {archetype}."));
    }
    if let Some(avg) = avg_sleep_quality {
        parts.push(format!("Average sleep quality: {avg:.1}/5."));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use oneiro_core::EmotionScore;

    const NOW: i64 = 1_700_000_000;

    fn entry(age_days: i64, emotions: &[EmotionLabel], archetypes: &[Archetype]) -> DreamEntry {
        let mut e = DreamEntry::new(NOW - age_days * SECONDS_PER_DAY);
        e.emotions = emotions.iter().map(|&l| EmotionScore::new(l, 0.8)).collect();
        e.archetypes = archetypes.to_vec();
        e
    }

    fn aggregator() -> WeeklyAggregator {
        WeeklyAggregator::new(AggregatorConfig::default())
    }

    #[test]
    fn empty_window_is_explicit_no_data() {
        let report = aggregator().aggregate(&[], NOW);
        assert_eq!(report.dream_count, 0);
        assert_eq!(report.dominant_emotion, None);
        assert_eq!(report.dominant_archetype, None);
        assert_eq!(report.avg_sleep_quality, None);
        assert!(report.emotion_distribution.is_empty());
        assert!(report.archetype_distribution.is_empty());
        assert!(report.journal_prompts.is_empty());
        assert!(report.summary.contains("No dreams"));
    }

    #[test]
    fn entries_outside_window_are_ignored() {
        let entries = vec![
            entry(1, &[EmotionLabel::Joy], &[]),
            entry(10, &[EmotionLabel::Fear], &[Archetype::Chased]),
        ];
        let report = aggregator().aggregate(&entries, NOW);
        assert_eq!(report.dream_count, 1);
        assert_eq!(report.dominant_emotion, Some(EmotionLabel::Joy));
        assert!(report.archetype_distribution.is_empty());
    }

    #[test]
    fn distributions_count_multiple_contributions_per_entry() {
        let entries = vec![
            entry(1, &[EmotionLabel::Fear, EmotionLabel::Sadness], &[Archetype::Water]),
            entry(2, &[EmotionLabel::Fear], &[Archetype::Water, Archetype::Falling]),
        ];
        let report = aggregator().aggregate(&entries, NOW);
        assert_eq!(report.emotion_distribution["fear"], 2);
        assert_eq!(report.emotion_distribution["sadness"], 1);
        assert_eq!(report.archetype_distribution["water"], 2);
        assert_eq!(report.archetype_distribution["falling"], 1);
        assert_eq!(report.dominant_emotion, Some(EmotionLabel::Fear));
        assert_eq!(report.dominant_archetype, Some(Archetype::Water));
    }

    #[test]
    fn dominant_tie_breaks_to_first_encountered() {
        let entries = vec![
            entry(1, &[EmotionLabel::Surprise], &[Archetype::Teeth]),
            entry(2, &[EmotionLabel::Joy], &[Archetype::Naked]),
        ];
        let report = aggregator().aggregate(&entries, NOW);
        assert_eq!(report.dominant_emotion, Some(EmotionLabel::Surprise));
        assert_eq!(report.dominant_archetype, Some(Archetype::Teeth));
    }

    #[test]
    fn sleep_quality_averages_over_reporting_entries_only() {
        let mut a = entry(1, &[], &[]);
        a.sleep_quality = Some(4);
        let mut b = entry(2, &[], &[]);
        b.sleep_quality = Some(3);
        let c = entry(3, &[], &[]);

        let report = aggregator().aggregate(&[a, b, c], NOW);
        assert_eq!(report.avg_sleep_quality, Some(3.5));

        let no_quality = aggregator().aggregate(&[entry(1, &[], &[])], NOW);
        assert_eq!(no_quality.avg_sleep_quality, None);
    }

    #[test]
    fn sleep_quality_rounds_to_one_decimal() {
        let mut a = entry(1, &[], &[]);
        a.sleep_quality = Some(2);
        let mut b = entry(2, &[], &[]);
        b.sleep_quality = Some(3);
        let mut c = entry(3, &[], &[]);
        c.sleep_quality = Some(3);

        // mean = 8/3 = 2.666... → 2.7
        let report = aggregator().aggregate(&[a, b, c], NOW);
        assert_eq!(report.avg_sleep_quality, Some(2.7));
    }

    #[test]
    fn prompt_rules_fire_per_pattern() {
        let entries = vec![entry(
            1,
            &[EmotionLabel::Sadness],
            &[Archetype::Falling, Archetype::Chased],
        )];
        let report = aggregator().aggregate(&entries, NOW);
        assert_eq!(
            report.journal_prompts,
            vec![
                PROMPT_FALLING.to_string(),
                PROMPT_CHASED.to_string(),
                PROMPT_SADNESS.to_string(),
            ]
        );
    }

    #[test]
    fn generic_prompt_when_no_rule_fires() {
        let entries = vec![entry(1, &[EmotionLabel::Joy], &[Archetype::Flying])];
        let report = aggregator().aggregate(&entries, NOW);
        assert_eq!(report.journal_prompts, vec![PROMPT_GENERIC.to_string()]);
    }

    #[test]
    fn aggregation_is_pure() {
        let entries = vec![
            entry(1, &[EmotionLabel::Fear], &[Archetype::Water]),
            entry(3, &[EmotionLabel::Joy], &[Archetype::Flying]),
        ];
        let first = aggregator().aggregate(&entries, NOW);
        let second = aggregator().aggregate(&entries, NOW);
        assert_eq!(first, second);
    }

    #[test]
    fn window_length_is_configurable() {
        let entries = vec![entry(10, &[EmotionLabel::Joy], &[])];
        let week = aggregator().aggregate(&entries, NOW);
        assert_eq!(week.dream_count, 0);

        let month = WeeklyAggregator::new(AggregatorConfig { window_days: 30 });
        assert_eq!(month.aggregate(&entries, NOW).dream_count, 1);
    }

    #[test]
    fn report_serde_roundtrip() {
        let entries = vec![entry(1, &[EmotionLabel::Fear], &[Archetype::Falling])];
        let report = aggregator().aggregate(&entries, NOW);
        let json = serde_json::to_string(&report).unwrap();
        let back: WeeklyReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
