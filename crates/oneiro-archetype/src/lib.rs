//! # oneiro-archetype
//!
//! **Archetype Matcher** — maps dream text to a sorted set of symbolic
//! themes via keyword/lemma pattern matching.
//!
//! ```
//! use oneiro_archetype::ArchetypeMatcher;
//! use oneiro_core::Archetype;
//!
//! let matcher = ArchetypeMatcher::new();
//! let tags = matcher.detect("I was falling into dark water");
//! assert_eq!(tags, vec![Archetype::Falling, Archetype::Water]);
//! ```

pub mod matcher;

pub use matcher::ArchetypeMatcher;
