//! Static tip tables and the additive selection rules.

use oneiro_core::{Archetype, Chronotype, EmotionScore};

/// Maximum number of tips returned per call.
pub const MAX_TIPS: usize = 5;

static GENERAL_TIPS: &[&str] = &[
    "Maintain a consistent sleep schedule, even on weekends.",
    "Keep your bedroom cool, dark, and quiet for better sleep.",
];

static NEGATIVE_EMOTION_TIPS: &[&str] = &[
    "Try journaling about your day before bed to process emotions.",
    "A warm bath before sleep may help ease negative thoughts.",
];

static FALLING_TIPS: &[&str] = &[
    "Falling dreams may indicate anxiety - try progressive muscle relaxation.",
    "Establish a consistent bedtime routine to regain sense of control.",
];

static CHASED_TIPS: &[&str] = &[
    "Being chased in dreams often relates to avoidance. Consider facing small challenges daily.",
    "Try visualization techniques where you confront what's chasing you.",
];

static LION_TIPS: &[&str] = &[
    "As a lion chronotype, you naturally wake early. Try to wind down by 9PM.",
    "Morning sunlight exposure will help regulate your natural rhythm.",
];

static BEAR_TIPS: &[&str] = &[
    "Your energy follows the sun. Aim for 7-8 hours of sleep during night hours.",
    "Schedule important tasks between 10AM-2PM when you're most productive.",
];

static WOLF_TIPS: &[&str] = &[
    "Night owl tendencies mean you should protect your morning sleep.",
    "Consider blackout curtains to help you sleep later in the morning.",
];

static DOLPHIN_TIPS: &[&str] = &[
    "Light sleepers benefit from white noise machines or earplugs.",
    "Try magnesium supplements before bed to improve sleep quality.",
];

const STRESS_TIP: &str = "High stress detected: Try 4-7-8 breathing technique before bed.";
const SLEEP_QUALITY_TIP: &str =
    "Poor sleep quality: Consider reducing caffeine intake after 2PM.";

/// Tips dedicated to a single archetype, if any. Most archetypes have
/// no dedicated set.
fn archetype_tips(archetype: Archetype) -> Option<&'static [&'static str]> {
    match archetype {
        Archetype::Falling => Some(FALLING_TIPS),
        Archetype::Chased => Some(CHASED_TIPS),
        _ => None,
    }
}

fn chronotype_tips(chronotype: Chronotype) -> &'static [&'static str] {
    match chronotype {
        Chronotype::Lion => LION_TIPS,
        Chronotype::Bear => BEAR_TIPS,
        Chronotype::Wolf => WOLF_TIPS,
        Chronotype::Dolphin => DOLPHIN_TIPS,
    }
}

/// Optional context that widens the rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TipContext {
    /// Self-reported stress on a 1-10 scale.
    pub stress_level: Option<u8>,
    /// Self-reported sleep quality on a 1-5 scale.
    pub sleep_quality: Option<u8>,
    pub chronotype: Option<Chronotype>,
}

/// Select up to [`MAX_TIPS`] personalized tips.
///
/// Rules are additive: general tips always apply; negative emotions,
/// archetypes with a dedicated set, the chronotype, high stress (> 7)
/// and poor sleep quality (< 3) each add their tips. Deduplication uses
/// stable insertion order and truncation happens last.
pub fn recommend(
    emotions: &[EmotionScore],
    archetypes: &[Archetype],
    context: &TipContext,
) -> Vec<String> {
    let mut tips: Vec<&str> = Vec::new();
    let mut add = |tip: &'static str| {
        if !tips.contains(&tip) {
            tips.push(tip);
        }
    };

    for tip in GENERAL_TIPS {
        add(tip);
    }

    if emotions.iter().any(|e| e.label.is_negative()) {
        for tip in NEGATIVE_EMOTION_TIPS {
            add(tip);
        }
    }

    for archetype in archetypes {
        if let Some(set) = archetype_tips(*archetype) {
            for tip in set {
                add(tip);
            }
        }
    }

    if let Some(chronotype) = context.chronotype {
        for tip in chronotype_tips(chronotype) {
            add(tip);
        }
    }

    if context.stress_level.is_some_and(|level| level > 7) {
        add(STRESS_TIP);
    }
    if context.sleep_quality.is_some_and(|quality| quality < 3) {
        add(SLEEP_QUALITY_TIP);
    }

    tips.truncate(MAX_TIPS);
    tips.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oneiro_core::EmotionLabel;

    fn emotion(label: EmotionLabel) -> EmotionScore {
        EmotionScore::new(label, 0.9)
    }

    #[test]
    fn general_tips_always_present() {
        let tips = recommend(&[], &[], &TipContext::default());
        assert_eq!(tips.len(), 2);
        for tip in GENERAL_TIPS {
            assert!(tips.iter().any(|t| t == tip));
        }
    }

    #[test]
    fn never_more_than_five() {
        let context = TipContext {
            stress_level: Some(10),
            sleep_quality: Some(1),
            chronotype: Some(Chronotype::Wolf),
        };
        let tips = recommend(
            &[emotion(EmotionLabel::Fear)],
            &[Archetype::Falling, Archetype::Chased],
            &context,
        );
        assert_eq!(tips.len(), MAX_TIPS);
    }

    #[test]
    fn negative_emotions_add_their_set() {
        for label in [EmotionLabel::Fear, EmotionLabel::Anger, EmotionLabel::Sadness] {
            let tips = recommend(&[emotion(label)], &[], &TipContext::default());
            assert!(tips.iter().any(|t| t == NEGATIVE_EMOTION_TIPS[0]));
        }

        let tips = recommend(&[emotion(EmotionLabel::Joy)], &[], &TipContext::default());
        assert!(!tips.iter().any(|t| t == NEGATIVE_EMOTION_TIPS[0]));
    }

    #[test]
    fn stress_and_sleep_rules_fire_together() {
        let context = TipContext {
            stress_level: Some(9),
            sleep_quality: Some(2),
            ..TipContext::default()
        };
        let tips = recommend(&[], &[], &context);
        assert!(tips.iter().any(|t| t == STRESS_TIP));
        assert!(tips.iter().any(|t| t == SLEEP_QUALITY_TIP));
    }

    #[test]
    fn thresholds_are_strict() {
        let at_boundary = TipContext {
            stress_level: Some(7),
            sleep_quality: Some(3),
            ..TipContext::default()
        };
        let tips = recommend(&[], &[], &at_boundary);
        assert!(!tips.iter().any(|t| t == STRESS_TIP));
        assert!(!tips.iter().any(|t| t == SLEEP_QUALITY_TIP));
    }

    #[test]
    fn chronotype_tips_selected_per_type() {
        for (chronotype, expected) in [
            (Chronotype::Lion, LION_TIPS),
            (Chronotype::Bear, BEAR_TIPS),
            (Chronotype::Wolf, WOLF_TIPS),
            (Chronotype::Dolphin, DOLPHIN_TIPS),
        ] {
            let context = TipContext { chronotype: Some(chronotype), ..TipContext::default() };
            let tips = recommend(&[], &[], &context);
            assert!(tips.iter().any(|t| t == expected[0]));
        }
    }

    #[test]
    fn archetypes_without_dedicated_tips_add_nothing() {
        let with = recommend(&[], &[Archetype::Teeth, Archetype::Water], &TipContext::default());
        let without = recommend(&[], &[], &TipContext::default());
        assert_eq!(with, without);
    }

    #[test]
    fn output_is_deduplicated() {
        let tips = recommend(
            &[],
            &[Archetype::Falling, Archetype::Falling],
            &TipContext::default(),
        );
        let mut seen = tips.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), tips.len());
    }

    #[test]
    fn insertion_order_is_stable() {
        let context = TipContext { stress_level: Some(9), ..TipContext::default() };
        let tips = recommend(&[emotion(EmotionLabel::Sadness)], &[], &context);
        assert_eq!(tips[0], GENERAL_TIPS[0]);
        assert_eq!(tips[1], GENERAL_TIPS[1]);
        assert_eq!(tips[2], NEGATIVE_EMOTION_TIPS[0]);
        assert_eq!(tips[3], NEGATIVE_EMOTION_TIPS[1]);
        assert_eq!(tips[4], STRESS_TIP);
    }
}
