//! Command-line driver
//!
//! Runs the estimator on one file or every `.gcode` file of a directory
//! and writes the rendered reports.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::config::Config;
use crate::estimation::Estimate;
use crate::source::{discover_gcode_files, estimate_file};

/// Estimate and render a single file
pub fn process_file(path: &Path, config: &Config) -> Result<String> {
    let mut estimate = estimate_file(path)
        .with_context(|| format!("Failed to estimate {}", path.display()))?;
    apply_fallback(path, &mut estimate, config);
    config.format.render(&estimate)
}

fn apply_fallback(path: &Path, estimate: &mut Estimate, config: &Config) {
    if !config.has_fallback() {
        return;
    }
    let filled = estimate.profile.fill_missing(&config.fallback);
    if !filled.is_empty() {
        log::warn!(
            "{}: no slicer metadata for {}, using configured values",
            path.display(),
            filled.join(", ")
        );
    }
}

/// Run the configured estimation, writing reports to `out`
///
/// Directories are walked recursively. A file that fails is reported on
/// stderr and the walk continues; the run fails at the end if any did.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    for path in &config.config_files {
        log::info!("using config file {}", path.display());
    }

    if !config.path.is_dir() {
        let report = process_file(&config.path, config)?;
        writeln!(out, "{}", absolute(&config.path).display())?;
        write!(out, "{}", report)?;
        return Ok(());
    }

    let files = discover_gcode_files(&config.path);
    if files.is_empty() {
        log::warn!(
            "no {} files under {}",
            crate::source::GCODE_SUFFIX,
            config.path.display()
        );
    }

    let mut failed = 0;
    for path in &files {
        match process_file(path, config) {
            Ok(report) => {
                writeln!(out, "{}", absolute(path).display())?;
                write!(out, "{}", report)?;
                writeln!(out)?;
            }
            Err(e) => {
                failed += 1;
                log::error!("{:#}", e);
                eprintln!("error: {:#}", e);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} files failed", failed, files.len());
    }
    Ok(())
}

fn absolute(path: &Path) -> std::path::PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
