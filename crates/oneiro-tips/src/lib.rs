//! # oneiro-tips
//!
//! **Tip Recommender** — rule-based selection over fixed tip tables.
//! All rules are additive; the result is deduplicated and capped at
//! five entries.
//!
//! Selection order is deliberately fixed as stable insertion order
//! (general → negative-emotion → archetypes → chronotype → stress →
//! sleep), so the five-entry cap is a testable boundary rather than a
//! guaranteed ranking.

pub mod recommend;

pub use recommend::{recommend, TipContext, MAX_TIPS};
