//! Error types
//!
//! Typed errors for the parsing pipeline. The binary wraps these in
//! `anyhow` with file context.

use std::path::PathBuf;

use thiserror::Error;

/// Error raised while tokenizing or aggregating G-code lines
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty line reached the tokenizer")]
    EmptyLine,

    #[error("invalid {field} value '{literal}'")]
    InvalidNumber {
        /// What the literal was supposed to be (e.g. "extrusion", "filament_density")
        field: &'static str,
        literal: String,
    },
}

/// Error raised while reading a G-code source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error at line {line}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
}

impl SourceError {
    /// Attach a path to an I/O error coming out of a reader
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
