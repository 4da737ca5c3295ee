//! Configuration management for the filament estimator.
//!
//! Handles:
//! - Command-line argument parsing
//! - TOML config files (user, project, explicit `--config`)
//! - Fallback filament values for G-code without slicer metadata

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::estimation::FilamentProfile;
use crate::report::Format;

/// File name of the per-project config, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".filament-estimator.toml";

/// Log filter used when neither CLI nor config files set one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Command-line arguments for the filament estimator
#[derive(Debug, Parser)]
#[command(name = "filament-estimator")]
#[command(about = "Estimate filament usage per layer and color from G-code")]
#[command(version)]
pub struct Args {
    /// G-code file, or a directory searched recursively for .gcode files
    pub path: PathBuf,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Explicit config file, applied after the user and project configs
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Filament density in g/cm3, used when the G-code does not state one
    #[arg(long)]
    pub density: Option<f64>,

    /// Filament diameter in mm, used when the G-code does not state one
    #[arg(long)]
    pub diameter: Option<f64>,

    /// Filament type, used when the G-code does not state one
    #[arg(long)]
    pub filament_type: Option<String>,

    /// Log level
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Contents of a TOML config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub format: Option<Format>,
    pub log_level: Option<String>,
    pub filament: Option<FilamentSection>,
}

/// `[filament]` table of a config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilamentSection {
    pub density: Option<f64>,
    pub diameter: Option<f64>,
    #[serde(rename = "type")]
    pub filament_type: Option<String>,
}

impl ConfigFile {
    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// File or directory to estimate
    pub path: PathBuf,
    pub format: Format,
    pub log_level: String,
    /// Values filled into profiles the G-code left empty
    pub fallback: FilamentProfile,
    /// Config files that were applied, lowest priority first
    pub config_files: Vec<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments and config files
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments, discovering config files
    pub fn from_args(args: Args) -> Result<Self> {
        let mut files = Vec::new();

        for path in default_config_paths() {
            if path.is_file() {
                let file = ConfigFile::load(&path)?;
                files.push((path, file));
            }
        }

        // An explicit config must exist
        if let Some(path) = &args.config {
            let file = ConfigFile::load(path)?;
            files.push((path.clone(), file));
        }

        Ok(Self::resolve(args, files))
    }

    /// Merge config files (lowest priority first) and arguments
    pub fn resolve(args: Args, files: Vec<(PathBuf, ConfigFile)>) -> Self {
        let mut format = Format::default();
        let mut log_level = None;
        let mut fallback = FilamentProfile::default();
        let mut config_files = Vec::new();

        for (path, file) in files {
            if let Some(f) = file.format {
                format = f;
            }
            if file.log_level.is_some() {
                log_level = file.log_level;
            }
            if let Some(section) = file.filament {
                section.apply(&mut fallback);
            }
            config_files.push(path);
        }

        FilamentSection {
            density: args.density,
            diameter: args.diameter,
            filament_type: args.filament_type,
        }
        .apply(&mut fallback);

        Config {
            path: args.path,
            format: args.format.unwrap_or(format),
            log_level: args
                .log_level
                .or(log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            fallback,
            config_files,
        }
    }

    /// Whether any fallback filament value was configured
    pub fn has_fallback(&self) -> bool {
        self.fallback != FilamentProfile::default()
    }
}

impl FilamentSection {
    fn apply(self, profile: &mut FilamentProfile) {
        if let Some(density) = self.density {
            profile.density = density;
        }
        if let Some(diameter) = self.diameter {
            profile.diameter = diameter;
        }
        if let Some(filament_type) = self.filament_type {
            profile.filament_type = filament_type;
        }
    }
}

/// User-global then project config locations, lowest priority first
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // ~/.config/filament-estimator/config.toml
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("filament-estimator").join("config.toml"));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(PROJECT_CONFIG_FILE));
    }

    paths
}
