//! Lemmatization seam for keyword matching.
//!
//! The archetype matcher needs lemma equivalence ("falling" must match
//! the keyword "fall"), but a full morphological model is an external
//! collaborator. [`Lemmatizer`] is the capability seam; the built-in
//! [`RuleLemmatizer`] is a dictionary-free stemmer that emits *candidate*
//! lemmas rather than a single pick — without a lexicon there is no one
//! rule that maps both "chased" → "chase" and "drowned" → "drown", so a
//! match against any candidate counts.

/// Tokenization + lemmatization capability.
///
/// Implementations backed by a real morphological model typically return
/// one lemma per token; the built-in rule stemmer returns every
/// plausible stem. The candidate list always contains the surface form.
pub trait Lemmatizer {
    /// Candidate lemma forms for one lowercase token, surface form
    /// included.
    fn lemmas(&self, token: &str) -> Vec<String>;

    /// Split text into lowercase word tokens. The default splits on
    /// anything non-alphanumeric, which is sufficient for keyword
    /// matching; override for language-aware tokenization.
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// Irregular forms the suffix rules cannot reach.
const IRREGULAR: &[(&str, &str)] = &[
    ("fell", "fall"),
    ("fallen", "fall"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("swam", "swim"),
    ("swum", "swim"),
    ("ran", "run"),
    ("died", "die"),
    ("dying", "die"),
    ("drove", "drive"),
    ("driven", "drive"),
];

/// Rule-based stemmer: irregular table lookup plus suffix stripping with
/// e-restoration and consonant undoubling.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleLemmatizer;

impl RuleLemmatizer {
    pub fn new() -> Self {
        RuleLemmatizer
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmas(&self, token: &str) -> Vec<String> {
        let mut out = vec![token.to_owned()];
        let mut push = |s: String| {
            if s.len() >= 2 && !out.contains(&s) {
                out.push(s);
            }
        };

        if let Some((_, lemma)) = IRREGULAR.iter().find(|(form, _)| *form == token) {
            push((*lemma).to_owned());
        }

        // Plurals: "waves" → "wave", "flies" → "fly", "chases" → "chase"
        if let Some(stem) = token.strip_suffix("ies") {
            push(format!("{stem}y"));
        }
        if let Some(stem) = token.strip_suffix("es") {
            push(stem.to_owned());
        }
        if let Some(stem) = token.strip_suffix('s') {
            if !token.ends_with("ss") {
                push(stem.to_owned());
            }
        }

        // Progressive: "falling" → "fall", "chasing" → "chase",
        // "swimming" → "swim"
        if let Some(stem) = token.strip_suffix("ing") {
            push(stem.to_owned());
            push(format!("{stem}e"));
            if let Some(undoubled) = strip_doubled(stem) {
                push(undoubled);
            }
        }

        // Past tense: "drowned" → "drown", "chased" → "chase",
        // "slipped" → "slip"
        if let Some(stem) = token.strip_suffix("ed") {
            push(stem.to_owned());
            push(format!("{stem}e"));
            if let Some(undoubled) = strip_doubled(stem) {
                push(undoubled);
            }
        }

        out
    }
}

/// "swimm" → "swim"; `None` when the stem does not end in a doubled
/// consonant.
fn strip_doubled(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let prev = chars.next()?;
    if last == prev && !"aeiou".contains(last) {
        Some(stem[..stem.len() - last.len_utf8()].to_owned())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(token: &str, lemma: &str) -> bool {
        RuleLemmatizer.lemmas(token).iter().any(|l| l == lemma)
    }

    #[test]
    fn surface_form_always_present() {
        assert!(has("water", "water"));
        assert!(has("teeth", "teeth"));
    }

    #[test]
    fn progressive_forms() {
        assert!(has("falling", "fall"));
        assert!(has("chasing", "chase"));
        assert!(has("swimming", "swim"));
        assert!(has("flying", "fly"));
        assert!(has("drowning", "drown"));
    }

    #[test]
    fn past_forms() {
        assert!(has("chased", "chase"));
        assert!(has("drowned", "drown"));
        assert!(has("slipped", "slip"));
        assert!(has("exposed", "expose"));
    }

    #[test]
    fn plural_forms() {
        assert!(has("waves", "wave"));
        assert!(has("cars", "car"));
        assert!(has("oceans", "ocean"));
    }

    #[test]
    fn irregular_forms() {
        assert!(has("fell", "fall"));
        assert!(has("flew", "fly"));
        assert!(has("swam", "swim"));
        assert!(has("died", "die"));
    }

    #[test]
    fn tokenize_splits_and_lowercases() {
        let toks = RuleLemmatizer.tokenize("I was FALLING, endlessly!");
        assert_eq!(toks, vec!["i", "was", "falling", "endlessly"]);
    }

    #[test]
    fn tokenize_blank_is_empty() {
        assert!(RuleLemmatizer.tokenize("   \t\n ").is_empty());
        assert!(RuleLemmatizer.tokenize("").is_empty());
    }
}
