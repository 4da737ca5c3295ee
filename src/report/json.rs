//! JSON report

use serde::Serialize;

use crate::estimation::{Estimate, FilamentProfile, LayerRow};

/// Totals for one color segment
#[derive(Debug, Serialize)]
pub struct ColorTotal {
    pub color: u32,
    pub extruded_mm: f64,
    pub weight_g: f64,
}

/// Serializable view of an [`Estimate`] with all derived totals
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub profile: &'a FilamentProfile,
    pub layer_count: usize,
    pub total_extruded_mm: f64,
    pub total_weight_g: f64,
    pub colors: Vec<ColorTotal>,
    pub layers: Vec<LayerRow>,
}

impl<'a> From<&'a Estimate> for JsonReport<'a> {
    fn from(estimate: &'a Estimate) -> Self {
        let colors = estimate
            .color_totals()
            .into_iter()
            .map(|(color, extruded_mm)| ColorTotal {
                color,
                extruded_mm,
                weight_g: estimate.profile.weight(extruded_mm),
            })
            .collect();

        Self {
            profile: &estimate.profile,
            layer_count: estimate.layer_count(),
            total_extruded_mm: estimate.total_extruded(),
            total_weight_g: estimate.total_weight(),
            colors,
            layers: estimate.layer_rows(),
        }
    }
}

/// Render the estimate as pretty-printed JSON
pub fn render_json(estimate: &Estimate) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::from(estimate))
}
