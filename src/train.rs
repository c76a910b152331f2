// SPDX-License-Identifier: PMPL-1.0-or-later

//! Profile training from per-language corpora

use crate::error::Result;
use crate::profile::{build_profile, LanguageProfileSet, RankedProfile};
use crate::storage::read_corpus;
use crate::types::Language;
use std::path::{Path, PathBuf};

pub fn corpus_path(train_dir: &Path, language: Language) -> PathBuf {
    train_dir.join(language.descriptor().corpus_file)
}

/// Reads the language's corpus from `train_dir` and ranks it.
pub fn train_language(train_dir: &Path, language: Language) -> Result<RankedProfile> {
    tracing::info!("training model on {} corpus...", language.name());
    let corpus = read_corpus(&corpus_path(train_dir, language))?;
    let profile = build_profile(&corpus);
    tracing::debug!(
        language = language.label(),
        corpus_chars = corpus.chars().count(),
        entries = profile.len(),
        "profile built"
    );
    Ok(profile)
}

/// Trains every language in `languages`, stopping at the first missing corpus.
pub fn train_all(train_dir: &Path, languages: &[Language]) -> Result<LanguageProfileSet> {
    languages
        .iter()
        .map(|&language| train_language(train_dir, language).map(|p| (language, p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LangIdError;

    #[test]
    fn corpus_paths_use_descriptor_file_names() {
        assert_eq!(
            corpus_path(Path::new("train_data"), Language::German),
            PathBuf::from("train_data/de_corpus.txt")
        );
    }

    #[test]
    fn missing_corpus_is_fatal() {
        let err = train_language(Path::new("/no/such/train_dir"), Language::English).unwrap_err();
        assert!(matches!(err, LangIdError::MissingFile { .. }));
    }
}
