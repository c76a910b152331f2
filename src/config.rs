// SPDX-License-Identifier: PMPL-1.0-or-later

//! Directory layout and evaluation settings
//!
//! Every field has a default matching the conventional layout:
//!
//! ```text
//! train_data/<code>_corpus.txt
//! language_profiles/<code>_profile.txt
//! test_data/<code>/<i>.txt
//! ```
//!
//! A YAML file may override any subset of fields; CLI flags override both.

use crate::corpus::DEFAULT_CHUNK_LINES;
use crate::error::{LangIdError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub train_dir: PathBuf,
    pub profile_dir: PathBuf,
    pub test_dir: PathBuf,
    /// Number of numbered chunks evaluated per language
    pub test_files: usize,
    /// Lines per chunk when splitting a corpus
    pub chunk_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            train_dir: PathBuf::from("train_data"),
            profile_dir: PathBuf::from("language_profiles"),
            test_dir: PathBuf::from("test_data"),
            test_files: 20,
            chunk_lines: DEFAULT_CHUNK_LINES,
        }
    }
}

impl Config {
    pub fn from_yaml(path: &Path, content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|source| LangIdError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content =
                    fs::read_to_string(path).map_err(|e| LangIdError::from_io(path, e))?;
                Self::from_yaml(path, &content)
            }
            None => Ok(Self::default()),
        }
    }
}
