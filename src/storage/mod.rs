// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persistent storage for corpora and language profiles

pub mod format;

use crate::error::{LangIdError, Result};
use crate::profile::{LanguageProfileSet, RankedProfile};
use crate::types::Language;
use std::fs;
use std::path::{Path, PathBuf};

pub use format::{format_profile, parse_record};

/// Reads a whole UTF-8 corpus or test file.
pub fn read_corpus(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| LangIdError::from_io(path, e))
}

pub fn profile_path(profile_dir: &Path, language: Language) -> PathBuf {
    profile_dir.join(language.descriptor().profile_file)
}

pub fn save_profile(profile: &RankedProfile, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| LangIdError::from_io(parent, e))?;
    }
    fs::write(path, format_profile(profile)).map_err(|e| LangIdError::from_io(path, e))
}

pub fn load_profile(path: &Path) -> Result<RankedProfile> {
    let content = read_corpus(path)?;
    parse_profile(path, &content)
}

/// Parses profile text; `source` only labels errors. Blank lines are skipped.
pub fn parse_profile(source: &Path, content: &str) -> Result<RankedProfile> {
    let mut entries = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry = parse_record(line).map_err(|reason| LangIdError::MalformedProfileRecord {
            path: source.to_path_buf(),
            line: idx + 1,
            reason,
        })?;
        entries.push(entry);
    }
    Ok(RankedProfile::from_ranked(entries))
}

/// Writes every profile of the set into `profile_dir`.
pub fn save_profile_set(set: &LanguageProfileSet, profile_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut stored = Vec::new();
    for (language, profile) in set.iter() {
        tracing::info!("saving {} language profile...", language.name());
        let path = profile_path(profile_dir, language);
        save_profile(profile, &path)?;
        stored.push(path);
    }
    Ok(stored)
}

/// Loads the profiles of `languages` from `profile_dir`, in that order.
pub fn load_profile_set(profile_dir: &Path, languages: &[Language]) -> Result<LanguageProfileSet> {
    languages
        .iter()
        .map(|&language| {
            tracing::info!("loading {} language profile...", language.name());
            load_profile(&profile_path(profile_dir, language)).map(|profile| (language, profile))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_paths_use_descriptor_file_names() {
        let path = profile_path(Path::new("language_profiles"), Language::Slovene);
        assert_eq!(path, PathBuf::from("language_profiles/si_profile.txt"));
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let content = "(' a ',): 3\n\n(' b ',) 2\n";
        let err = parse_profile(Path::new("x.txt"), content).unwrap_err();
        match err {
            LangIdError::MalformedProfileRecord { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn trailing_newline_is_tolerated() {
        let profile = parse_profile(Path::new("x.txt"), "(' a ',): 3\n").unwrap();
        assert_eq!(profile.len(), 1);
    }

    #[test]
    fn missing_corpus_is_reported() {
        let err = read_corpus(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, LangIdError::MissingFile { .. }));
    }
}
