//! Report Rendering
//!
//! Presentation of an [`Estimate`]; nothing here feeds back into estimation.

pub mod csv;
pub mod json;
pub mod summary;

pub use csv::render_csv;
pub use json::{JsonReport, render_json};
pub use summary::render_summary;

use serde::Deserialize;

use crate::estimation::Estimate;

/// Output format of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Filament profile and weight per color
    #[default]
    Summary,
    /// Per-layer detail with running totals
    Csv,
    /// Everything, machine readable
    Json,
}

impl Format {
    /// Render `estimate` in this format
    pub fn render(self, estimate: &Estimate) -> anyhow::Result<String> {
        Ok(match self {
            Format::Summary => render_summary(estimate),
            Format::Csv => render_csv(estimate),
            Format::Json => render_json(estimate)? + "\n",
        })
    }
}
