//! G-code sources
//!
//! Streaming line reader over any `BufRead`, the file-level entry points
//! and the `.gcode` directory walker used in batch mode.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::SourceError;
use crate::estimation::{Estimate, Estimator};
use crate::parser::{ParsedLine, parse_line};

/// File suffix picked up when walking a directory
pub const GCODE_SUFFIX: &str = ".gcode";

/// Streaming iterator over the non-blank lines of a `BufRead` source
///
/// Yields `(line_number, trimmed_text)` with 1-based line numbers counted
/// over all physical lines, blank ones included.
pub struct LineSource<R: BufRead> {
    reader: R,
    line_number: usize,
    line_buffer: String,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            line_buffer: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = std::io::Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    let line = self.line_buffer.trim();
                    if !line.is_empty() {
                        return Some(Ok((self.line_number, line.to_string())));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Tokenize every non-blank line of a reader
///
/// `path` only labels I/O errors.
pub fn parse_reader<R: BufRead>(reader: R, path: &Path) -> Result<Vec<ParsedLine>, SourceError> {
    LineSource::new(reader)
        .map(|item| {
            let (line, text) = item.map_err(|e| SourceError::io(path, e))?;
            parse_line(&text).map_err(|source| SourceError::Parse { line, source })
        })
        .collect()
}

/// Tokenize every non-blank line of a file on disk
pub fn parse_file(path: &Path) -> Result<Vec<ParsedLine>, SourceError> {
    let file = File::open(path).map_err(|e| SourceError::io(path, e))?;
    parse_reader(BufReader::new(file), path)
}

/// Estimate filament use from a reader in one streaming pass
pub fn estimate_reader<R: BufRead>(reader: R, path: &Path) -> Result<Estimate, SourceError> {
    let mut estimator = Estimator::new();

    for item in LineSource::new(reader) {
        let (line, text) = item.map_err(|e| SourceError::io(path, e))?;
        let parsed = parse_line(&text).map_err(|source| SourceError::Parse { line, source })?;
        log::trace!("{}:{}: {}", path.display(), line, parsed);
        estimator
            .feed(&parsed)
            .map_err(|source| SourceError::Parse { line, source })?;
    }

    Ok(estimator.finish())
}

/// Estimate filament use for a G-code file on disk
pub fn estimate_file(path: &Path) -> Result<Estimate, SourceError> {
    let file = File::open(path).map_err(|e| SourceError::io(path, e))?;
    let estimate = estimate_reader(BufReader::new(file), path)?;
    log::info!(
        "{}: {} layers, {:.2} mm extruded",
        path.display(),
        estimate.layer_count(),
        estimate.total_extruded()
    );
    Ok(estimate)
}

/// Recursively collect `.gcode` files under `dir`, sorted by path
///
/// Entries that cannot be read are logged and skipped so one unreadable
/// subdirectory does not hide its siblings.
pub fn discover_gcode_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("skipping unreadable entry under {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(GCODE_SUFFIX))
        .map(|entry| entry.into_path())
        .collect()
}
