// SPDX-License-Identifier: PMPL-1.0-or-later

//! Minimum-distance classification against stored language profiles

use crate::distance::out_of_place_distance;
use crate::profile::{build_profile, LanguageProfileSet, RankedProfile};
use crate::types::Language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageScore {
    pub language: Language,
    pub distance: i64,
}

/// Outcome of classifying one text sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub language: Language,
    pub distance: i64,
    /// Distance to every stored profile, in profile-set order
    pub scores: Vec<LanguageScore>,
}

/// Classifies raw text. Returns `None` only when `profiles` is empty.
pub fn classify(text: &str, profiles: &LanguageProfileSet) -> Option<Classification> {
    let sample = build_profile(text);
    classify_profile(&sample, profiles)
}

/// Scores an already-ranked sample profile against every stored profile.
///
/// The first language with the lowest distance wins; a later language only
/// replaces it on a strictly smaller distance.
pub fn classify_profile(
    sample: &RankedProfile,
    profiles: &LanguageProfileSet,
) -> Option<Classification> {
    let sample_keys = sample.keys();
    let mut scores = Vec::with_capacity(profiles.len());
    let mut best: Option<LanguageScore> = None;

    for (language, reference) in profiles.iter() {
        let distance = out_of_place_distance(&reference.keys(), &sample_keys);
        tracing::debug!(language = language.label(), distance, "scored profile");

        let score = LanguageScore { language, distance };
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(score);
        }
        scores.push(score);
    }

    best.map(|b| Classification {
        language: b.language,
        distance: b.distance,
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(corpora: &[(Language, &str)]) -> LanguageProfileSet {
        corpora
            .iter()
            .map(|(lang, text)| (*lang, build_profile(text)))
            .collect()
    }

    #[test]
    fn repeated_letter_corpora_separate() {
        let profiles = set(&[
            (Language::English, "a".repeat(200).as_str()),
            (Language::German, "b".repeat(200).as_str()),
        ]);
        let result = classify("aaa", &profiles).unwrap();
        assert_eq!(result.language, Language::English);
        assert_eq!(result.scores.len(), 2);
        let a = result.scores[0].distance;
        let b = result.scores[1].distance;
        assert!(a < b, "expected {a} < {b}");
        assert_eq!(result.distance, a);
    }

    #[test]
    fn ties_keep_the_earliest_language() {
        let profiles = set(&[
            (Language::Slovene, "xyz"),
            (Language::Croatian, "xyz"),
        ]);
        let result = classify("xyz", &profiles).unwrap();
        assert_eq!(result.language, Language::Slovene);
        assert_eq!(result.scores[0].distance, result.scores[1].distance);
    }

    #[test]
    fn scores_follow_profile_set_order() {
        let profiles = set(&[
            (Language::Spanish, "hola que tal"),
            (Language::English, "hello there"),
            (Language::German, "guten tag"),
        ]);
        let result = classify("hello", &profiles).unwrap();
        let order: Vec<Language> = result.scores.iter().map(|s| s.language).collect();
        assert_eq!(
            order,
            vec![Language::Spanish, Language::English, Language::German]
        );
        assert_eq!(result.language, Language::English);
    }

    #[test]
    fn empty_profile_set_has_no_label() {
        assert!(classify("anything", &LanguageProfileSet::default()).is_none());
    }

    #[test]
    fn empty_sample_still_picks_a_language() {
        let profiles = set(&[(Language::English, "abc"), (Language::German, "def")]);
        let result = classify("", &profiles).unwrap();
        assert_eq!(result.distance, 0);
        assert_eq!(result.language, Language::English);
    }
}
