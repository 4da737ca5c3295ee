//! Filament Estimator
//!
//! Estimates filament consumption from sliced G-code.
//!
//! This library provides:
//! - Line tokenizing into instructions and metadata comments
//! - Per-layer and per-color extrusion aggregation with retraction netting
//! - Weight conversion from filament geometry and density
//! - Summary, CSV and JSON reports
//! - Configuration management

pub mod cli;
pub mod config;
pub mod error;
pub mod estimation;
pub mod parser;
pub mod report;
pub mod source;

// Re-exports for clean public API
pub use config::Config;
pub use error::{ParseError, SourceError};
pub use estimation::{Estimate, Estimator, FilamentProfile, Layer, estimate_lines, weight};
pub use parser::{ParsedLine, parse_line};
pub use report::Format;
pub use source::{discover_gcode_files, estimate_file, estimate_reader, parse_file};
