// SPDX-License-Identifier: PMPL-1.0-or-later

//! Ranked n-gram profiles
//!
//! A profile is the top [`PROFILE_SIZE`] n-grams of a text, orders 1..=5
//! mixed, by descending count. Equal counts stay in the order the merge
//! step first saw them.

use crate::lexeme::extract_lexemes;
use crate::ngram::{merge_orders, FrequencyTable, ORDERS};
use crate::types::{Language, NGram};
use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in a ranked profile.
pub const PROFILE_SIZE: usize = 300;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedProfile {
    entries: Vec<(NGram, u64)>,
}

impl RankedProfile {
    /// Wraps entries that are already in rank order, e.g. from storage.
    /// Anything beyond [`PROFILE_SIZE`] is dropped.
    pub fn from_ranked(mut entries: Vec<(NGram, u64)>) -> Self {
        entries.truncate(PROFILE_SIZE);
        Self { entries }
    }

    pub fn entries(&self) -> &[(NGram, u64)] {
        &self.entries
    }

    /// N-gram keys in rank order.
    pub fn keys(&self) -> Vec<&NGram> {
        self.entries.iter().map(|(ngram, _)| ngram).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sorts by count descending and keeps the first [`PROFILE_SIZE`] entries.
pub fn rank(table: FrequencyTable) -> RankedProfile {
    let mut entries = table.into_entries();
    // sort_by is stable: ties keep insertion order
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    RankedProfile::from_ranked(entries)
}

/// Lexemes, n-grams of every order, ranking.
pub fn build_profile(text: &str) -> RankedProfile {
    let tokens = extract_lexemes(text);
    rank(merge_orders(&tokens, ORDERS))
}

/// Immutable language → profile mapping, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct LanguageProfileSet {
    profiles: Vec<(Language, RankedProfile)>,
}

impl LanguageProfileSet {
    pub fn get(&self, language: Language) -> Option<&RankedProfile> {
        self.profiles
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, profile)| profile)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &RankedProfile)> {
        self.profiles.iter().map(|(lang, profile)| (*lang, profile))
    }

    pub fn languages(&self) -> Vec<Language> {
        self.profiles.iter().map(|(lang, _)| *lang).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl FromIterator<(Language, RankedProfile)> for LanguageProfileSet {
    /// A language given twice keeps its first position and its last profile.
    fn from_iter<I: IntoIterator<Item = (Language, RankedProfile)>>(iter: I) -> Self {
        let mut profiles: Vec<(Language, RankedProfile)> = Vec::new();
        for (lang, profile) in iter {
            match profiles.iter_mut().find(|(existing, _)| *existing == lang) {
                Some(slot) => slot.1 = profile,
                None => profiles.push((lang, profile)),
            }
        }
        Self { profiles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ngram(tokens: &[&str]) -> NGram {
        tokens.iter().copied().collect()
    }

    #[test]
    fn profile_is_sorted_and_bounded() {
        let text = "The quick brown fox jumps over the lazy dog. \
                    Der schnelle braune Fuchs springt über den faulen Hund. \
                    El veloz zorro marrón salta sobre el perro perezoso.";
        let profile = build_profile(text);
        assert!(profile.len() <= PROFILE_SIZE);
        assert_eq!(profile.len(), PROFILE_SIZE);
        for pair in profile.entries().windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn small_text_keeps_every_ngram() {
        let profile = build_profile("ab");
        // 2 unigrams + 1 bigram
        assert_eq!(profile.len(), 3);
    }

    #[test]
    fn ties_keep_merge_order() {
        let mut table = FrequencyTable::new();
        table.increment(ngram(&[" x "]));
        table.increment(ngram(&[" y "]));
        table.increment(ngram(&[" y "]));
        table.increment(ngram(&[" z "]));
        let profile = rank(table);
        let keys: Vec<NGram> = profile.keys().into_iter().cloned().collect();
        assert_eq!(
            keys,
            vec![ngram(&[" y "]), ngram(&[" x "]), ngram(&[" z "])]
        );
    }

    #[test]
    fn from_ranked_truncates() {
        let entries = (0..400)
            .map(|i| (ngram(&[format!(" {i} ").as_str()]), 1))
            .collect();
        assert_eq!(RankedProfile::from_ranked(entries).len(), PROFILE_SIZE);
    }

    #[test]
    fn empty_text_yields_empty_profile() {
        assert!(build_profile("").is_empty());
        assert_eq!(build_profile("123 ...").len(), 1);
    }

    #[test]
    fn profile_set_keeps_insertion_order() {
        let set: LanguageProfileSet = [
            (Language::Spanish, build_profile("hola")),
            (Language::English, build_profile("hello")),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.languages(), vec![Language::Spanish, Language::English]);
        assert!(set.get(Language::German).is_none());
        assert_eq!(set.get(Language::English), Some(&build_profile("hello")));
    }
}
