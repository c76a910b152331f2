// SPDX-License-Identifier: PMPL-1.0-or-later

//! Splitting a corpus into numbered test chunks

use crate::error::{LangIdError, Result};
use crate::storage::read_corpus;
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of lines per test chunk.
pub const DEFAULT_CHUNK_LINES: usize = 400;

/// Groups `text` into chunks of `lines_per_chunk` lines. Line endings are
/// kept, so concatenating the chunks gives back the input.
pub fn chunk_lines(text: &str, lines_per_chunk: usize) -> Vec<String> {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    lines
        .chunks(lines_per_chunk.max(1))
        .map(|chunk| chunk.concat())
        .collect()
}

/// Writes the chunks of `corpus` as `0.txt`, `1.txt`, ... into `out_dir`.
pub fn split_corpus(corpus: &Path, out_dir: &Path, lines_per_chunk: usize) -> Result<Vec<PathBuf>> {
    let text = read_corpus(corpus)?;
    fs::create_dir_all(out_dir).map_err(|e| LangIdError::from_io(out_dir, e))?;

    let mut written = Vec::new();
    for (i, chunk) in chunk_lines(&text, lines_per_chunk).iter().enumerate() {
        let path = out_dir.join(format!("{i}.txt"));
        fs::write(&path, chunk).map_err(|e| LangIdError::from_io(&path, e))?;
        written.push(path);
    }
    tracing::info!(
        corpus = %corpus.display(),
        chunks = written.len(),
        "corpus split and written to files"
    );
    Ok(written)
}
