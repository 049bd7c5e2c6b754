//! Nearest-timestamp lookup over sorted series copies.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use oneiro_core::BiometricSample;

/// Nearest biometric samples for one narrative timestamp.
///
/// `None` marks a series that had no data — a valid outcome, not an
/// error. Keys iterate in name order so output is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// The narrative timestamp the lookup was keyed to (unix seconds).
    pub timestamp: i64,
    /// Series name → nearest sample, or `None` for an empty series.
    pub matches: BTreeMap<String, Option<BiometricSample>>,
}

/// Sorted-once index over named biometric series.
///
/// Building the index copies and stably sorts each series by timestamp;
/// the caller's data is never mutated. Each query is then O(log n) per
/// series — this is the only performance-sensitive path in the core, so
/// the binary-search form is not optional.
pub struct SeriesIndex {
    series: BTreeMap<String, Vec<BiometricSample>>,
}

impl SeriesIndex {
    /// Build an index from possibly-unsorted series.
    pub fn build(series: &HashMap<String, Vec<BiometricSample>>) -> Self {
        let series = series
            .iter()
            .map(|(name, samples)| {
                let mut sorted = samples.clone();
                // Stable, so samples sharing a timestamp keep input
                // order and "earliest" stays well defined.
                sorted.sort_by_key(|s| s.timestamp);
                (name.clone(), sorted)
            })
            .collect();
        Self { series }
    }

    /// Nearest sample to `timestamp` in the named series, or `None` if
    /// the series is absent or empty. Equal distance selects the
    /// earlier sample.
    pub fn nearest(&self, name: &str, timestamp: i64) -> Option<BiometricSample> {
        let sorted = self.series.get(name)?;
        if sorted.is_empty() {
            return None;
        }

        let i = sorted.partition_point(|s| s.timestamp < timestamp);
        let left = i.checked_sub(1).map(|j| sorted[j]);
        let right = sorted.get(i).copied();

        match (left, right) {
            (Some(l), Some(r)) => {
                let dl = timestamp - l.timestamp;
                let dr = r.timestamp - timestamp;
                // Tie breaks toward the earlier sample.
                if dl <= dr {
                    Some(l)
                } else {
                    Some(r)
                }
            }
            (Some(l), None) => Some(l),
            (None, r) => r,
        }
    }

    /// Nearest sample per indexed series for one narrative timestamp.
    pub fn correlate(&self, timestamp: i64) -> CorrelationResult {
        let matches = self
            .series
            .keys()
            .map(|name| (name.clone(), self.nearest(name, timestamp)))
            .collect();
        CorrelationResult { timestamp, matches }
    }
}

/// Correlate one narrative timestamp against named biometric series.
pub fn correlate(
    timestamp: i64,
    series: &HashMap<String, Vec<BiometricSample>>,
) -> CorrelationResult {
    SeriesIndex::build(series).correlate(timestamp)
}

/// Correlate a batch of narrative timestamps, sorting each series only
/// once. Results are in input order.
pub fn correlate_batch(
    timestamps: &[i64],
    series: &HashMap<String, Vec<BiometricSample>>,
) -> Vec<CorrelationResult> {
    let index = SeriesIndex::build(series);
    timestamps.iter().map(|&ts| index.correlate(ts)).collect()
}
