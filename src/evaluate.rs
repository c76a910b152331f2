// SPDX-License-Identifier: PMPL-1.0-or-later

//! Evaluate: classify the numbered test chunks of one language
//!
//! Reads `<test_dir>/<code>/0.txt .. <test_files - 1>.txt`, classifies each
//! chunk against the profile set and counts how many came back as the
//! expected language.

use crate::classify::{classify, LanguageScore};
use crate::error::Result;
use crate::profile::LanguageProfileSet;
use crate::storage::read_corpus;
use crate::types::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for an evaluation run
pub struct EvaluationConfig {
    /// Language the test chunks are written in
    pub language: Language,
    /// Directory containing one sub-directory per language code
    pub test_dir: PathBuf,
    /// Number of numbered chunks to read
    pub test_files: usize,
}

/// Result for a single test chunk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResult {
    pub file: PathBuf,
    /// `None` only when the profile set was empty
    pub predicted: Option<Language>,
    pub correct: bool,
    pub scores: Vec<LanguageScore>,
}

/// Complete evaluation report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub created_at: String,
    pub language: Language,
    pub total: usize,
    pub correct: usize,
    pub accuracy: f64,
    pub results: Vec<DocumentResult>,
}

impl EvaluationReport {
    /// Accuracy rounded to two decimals (ties to even), as a percentage.
    pub fn percent(&self) -> f64 {
        (self.accuracy * 100.0).round_ties_even()
    }
}

pub fn chunk_path(test_dir: &Path, language: Language, index: usize) -> PathBuf {
    test_dir.join(language.code()).join(format!("{index}.txt"))
}

/// Run evaluation. A missing chunk aborts the whole run.
pub fn run(config: &EvaluationConfig, profiles: &LanguageProfileSet) -> Result<EvaluationReport> {
    let mut results = Vec::with_capacity(config.test_files);

    for index in 0..config.test_files {
        let file = chunk_path(&config.test_dir, config.language, index);
        tracing::info!(file = %file.display(), "reading test corpus...");
        let text = read_corpus(&file)?;

        let (predicted, scores) = match classify(&text, profiles) {
            Some(c) => (Some(c.language), c.scores),
            None => (None, Vec::new()),
        };
        if let Some(lang) = predicted {
            tracing::info!("sentence classified as {}", lang);
        }

        results.push(DocumentResult {
            file,
            predicted,
            correct: predicted == Some(config.language),
            scores,
        });
    }

    let correct = results.iter().filter(|r| r.correct).count();
    let total = results.len();
    let accuracy = if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64
    };

    Ok(EvaluationReport {
        created_at: chrono::Utc::now().to_rfc3339(),
        language: config.language,
        total,
        correct,
        accuracy,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_paths_are_numbered_per_language() {
        assert_eq!(
            chunk_path(Path::new("test_data"), Language::Croatian, 7),
            PathBuf::from("test_data/hr/7.txt")
        );
    }

    #[test]
    fn zero_files_gives_empty_report() {
        let config = EvaluationConfig {
            language: Language::English,
            test_dir: PathBuf::from("/unused"),
            test_files: 0,
        };
        let report = run(&config, &LanguageProfileSet::default()).unwrap();
        assert_eq!(report.total, 0);
        assert_eq!(report.accuracy, 0.0);
        assert_eq!(report.percent(), 0.0);
    }

    fn report_with(correct: usize, total: usize) -> EvaluationReport {
        EvaluationReport {
            created_at: String::new(),
            language: Language::German,
            total,
            correct,
            accuracy: correct as f64 / total as f64,
            results: Vec::new(),
        }
    }

    #[test]
    fn percent_rounds_to_two_decimals_half_even() {
        assert_eq!(report_with(17, 20).percent(), 85.0);
        assert_eq!(report_with(1, 8).percent(), 12.0);
        assert_eq!(report_with(3, 8).percent(), 38.0);
        assert_eq!(report_with(2, 3).percent(), 67.0);
        assert_eq!(report_with(1, 3).percent(), 33.0);
    }
}
