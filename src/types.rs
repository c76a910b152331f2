// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for ngram-langid
//!
//! The five supported languages form a closed set. Everything that differs
//! between them (file names, display labels) lives in a `LanguageDescriptor`
//! so training, persistence and evaluation run one routine per descriptor.

use crate::error::{LangIdError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single extracted character padded with one space on each side.
pub type Token = String;

/// Supported natural languages, in classification order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    German,
    Slovene,
    Spanish,
    Croatian,
}

/// Static metadata for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    /// ISO 639-1 code, also the CLI selector and test sub-directory
    pub code: &'static str,
    pub name: &'static str,
    /// Upper-case label used in classification reports
    pub label: &'static str,
    pub corpus_file: &'static str,
    pub profile_file: &'static str,
}

static DESCRIPTORS: [LanguageDescriptor; 5] = [
    LanguageDescriptor {
        code: "en",
        name: "English",
        label: "ENGLISH",
        corpus_file: "en_corpus.txt",
        profile_file: "en_profile.txt",
    },
    LanguageDescriptor {
        code: "de",
        name: "German",
        label: "GERMAN",
        corpus_file: "de_corpus.txt",
        profile_file: "de_profile.txt",
    },
    LanguageDescriptor {
        code: "si",
        name: "Slovene",
        label: "SLOVENE",
        corpus_file: "si_corpus.txt",
        profile_file: "si_profile.txt",
    },
    LanguageDescriptor {
        code: "es",
        name: "Spanish",
        label: "SPANISH",
        corpus_file: "es_corpus.txt",
        profile_file: "es_profile.txt",
    },
    LanguageDescriptor {
        code: "hr",
        name: "Croatian",
        label: "CROATIAN",
        corpus_file: "hr_corpus.txt",
        profile_file: "hr_profile.txt",
    },
];

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::German,
        Language::Slovene,
        Language::Spanish,
        Language::Croatian,
    ];

    pub fn descriptor(self) -> &'static LanguageDescriptor {
        &DESCRIPTORS[self as usize]
    }

    pub fn code(self) -> &'static str {
        self.descriptor().code
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    /// Resolves a CLI selector such as `"en"` or `"hr"`.
    pub fn from_code(code: &str) -> Result<Self> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| LangIdError::UnsupportedLanguageSelector(code.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An ordered tuple of tokens. Orders 1 through 5 share one key space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NGram(Vec<Token>);

impl NGram {
    pub fn new(tokens: Vec<Token>) -> Self {
        NGram(tokens)
    }

    pub fn from_window(window: &[Token]) -> Self {
        NGram(window.to_vec())
    }

    pub fn order(&self) -> usize {
        self.0.len()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }
}

impl<S: Into<Token>> FromIterator<S> for NGram {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        NGram(iter.into_iter().map(Into::into).collect())
    }
}
