//! Keyword/lemma pattern matching over a fixed archetype table.
//!
//! The table is pure data — a static mapping, no dispatch. A tag is
//! included when any of its keywords matches any candidate lemma of any
//! token in the text. Blank text yields the empty set. Output is always
//! sorted and deduplicated.

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;

use oneiro_core::{Archetype, Lemmatizer, RuleLemmatizer};

/// Keyword lists per archetype. Keywords are lemma forms.
static PATTERNS: &[(Archetype, &[&str])] = &[
    (Archetype::Falling, &["fall", "slip", "trip", "plummet"]),
    (Archetype::Chased, &["chase", "pursue", "flee", "escape"]),
    (Archetype::Teeth, &["tooth", "teeth", "dentist"]),
    (Archetype::Flying, &["fly", "float", "soar", "airborne"]),
    (Archetype::Naked, &["naked", "nude", "exposed", "undressed"]),
    (Archetype::Test, &["exam", "test", "fail", "study"]),
    (Archetype::Vehicle, &["car", "drive", "plane", "vehicle"]),
    (Archetype::Death, &["die", "death", "dead", "kill"]),
    (Archetype::Water, &["water", "ocean", "swim", "drown"]),
];

/// Inverted keyword → archetype index, built once.
static KEYWORD_INDEX: Lazy<HashMap<&'static str, Archetype>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (archetype, keywords) in PATTERNS {
        for kw in *keywords {
            index.insert(*kw, *archetype);
        }
    }
    index
});

/// Detects dream archetypes in narrative text.
///
/// Generic over the lemmatization capability so a model-backed
/// lemmatizer can replace the built-in rule stemmer.
pub struct ArchetypeMatcher<L = RuleLemmatizer> {
    lemmatizer: L,
}

impl ArchetypeMatcher<RuleLemmatizer> {
    /// Matcher backed by the built-in rule stemmer.
    pub fn new() -> Self {
        Self { lemmatizer: RuleLemmatizer::new() }
    }
}

impl Default for ArchetypeMatcher<RuleLemmatizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Lemmatizer> ArchetypeMatcher<L> {
    /// Matcher backed by a caller-supplied lemmatizer.
    pub fn with_lemmatizer(lemmatizer: L) -> Self {
        Self { lemmatizer }
    }

    /// Detect the archetype set for `text`.
    ///
    /// Returns a sorted, duplicate-free list; blank or whitespace-only
    /// text yields the empty list. Never fails — unsupported input
    /// degrades to best-effort matching.
    pub fn detect(&self, text: &str) -> Vec<Archetype> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut found = BTreeSet::new();
        for token in self.lemmatizer.tokenize(text) {
            for lemma in self.lemmatizer.lemmas(&token) {
                if let Some(archetype) = KEYWORD_INDEX.get(lemma.as_str()) {
                    found.insert(*archetype);
                }
            }
        }
        found.into_iter().collect()
    }
}
