// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error type shared by the library modules.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LangIdError>;

#[derive(Debug, Error)]
pub enum LangIdError {
    /// A corpus, profile or test file does not exist.
    #[error("file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// A persisted profile line could not be parsed as `<tuple>: <count>`.
    #[error("malformed profile record in {} at line {line}: {reason}", path.display())]
    MalformedProfileRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("language not supported: {0}")]
    UnsupportedLanguageSelector(String),

    #[error("invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LangIdError {
    /// Maps an I/O error on `path` to `MissingFile` when the file is absent.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            LangIdError::MissingFile { path }
        } else {
            LangIdError::Io { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_missing_file() {
        let err = LangIdError::from_io(
            "nope.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, LangIdError::MissingFile { .. }));
        assert_eq!(err.to_string(), "file not found: nope.txt");
    }

    #[test]
    fn other_io_errors_are_kept() {
        let err = LangIdError::from_io(
            "locked.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, LangIdError::Io { .. }));
    }
}
