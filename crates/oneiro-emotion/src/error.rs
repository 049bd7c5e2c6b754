use thiserror::Error;

/// Failures an external classifier backend may report.
///
/// These never cross the scorer boundary: [`crate::EmotionScorer`]
/// converts every variant into the unknown-label sentinel.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("classifier backend error: {0}")]
    Backend(String),

    #[error("classifier timed out after {0} ms")]
    Timeout(u64),

    #[error("malformed classifier output: {0}")]
    Malformed(String),
}
