//! Estimation results
//!
//! Plain data produced by the aggregator, plus the derived views the
//! report renderers need (per-color totals and per-layer rows).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::estimation::weight::weight;

/// Filament properties read from the slicer metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilamentProfile {
    /// Density in g/cm³
    #[serde(default)]
    pub density: f64,
    /// Diameter in mm
    #[serde(default)]
    pub diameter: f64,
    /// Material name (e.g., "PLA")
    #[serde(default, rename = "type")]
    pub filament_type: String,
}

impl FilamentProfile {
    /// Mass in grams of `length` millimeters of this filament
    pub fn weight(&self, length: f64) -> f64 {
        weight(length, self.diameter, self.density)
    }

    /// Fill fields left at their default from `fallback`
    ///
    /// Returns the names of the fields that were filled.
    pub fn fill_missing(&mut self, fallback: &FilamentProfile) -> Vec<&'static str> {
        let mut filled = Vec::new();
        if self.density == 0.0 && fallback.density != 0.0 {
            self.density = fallback.density;
            filled.push("density");
        }
        if self.diameter == 0.0 && fallback.diameter != 0.0 {
            self.diameter = fallback.diameter;
            filled.push("diameter");
        }
        if self.filament_type.is_empty() && !fallback.filament_type.is_empty() {
            self.filament_type = fallback.filament_type.clone();
            filled.push("type");
        }
        filled
    }
}

/// One printed layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    /// Layer index, 0 for everything before the first layer marker
    pub number: u32,
    /// Color segment, starting at 1
    pub color: u32,
    /// Net extruded length in mm
    pub extruded: f64,
}

impl Layer {
    pub fn new(number: u32, color: u32) -> Self {
        Self {
            number,
            color,
            extruded: 0.0,
        }
    }
}

/// Per-layer detail row with running totals, all in grams
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerRow {
    pub layer: u32,
    pub color: u32,
    pub weight: f64,
    pub total_weight: f64,
    pub color_weight: f64,
}

/// Result of estimating one G-code file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub profile: FilamentProfile,
    /// Never empty; numbered 0, 1, 2, ... in order
    pub layers: Vec<Layer>,
}

impl Estimate {
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Total net extruded length in mm
    pub fn total_extruded(&self) -> f64 {
        self.layers.iter().map(|l| l.extruded).sum()
    }

    pub fn total_weight(&self) -> f64 {
        self.profile.weight(self.total_extruded())
    }

    /// Extruded length per color segment, ascending by segment
    pub fn color_totals(&self) -> BTreeMap<u32, f64> {
        let mut totals = BTreeMap::new();
        for layer in &self.layers {
            *totals.entry(layer.color).or_insert(0.0) += layer.extruded;
        }
        totals
    }

    /// Weight per color segment, ascending by segment
    pub fn color_weights(&self) -> BTreeMap<u32, f64> {
        self.color_totals()
            .into_iter()
            .map(|(color, length)| (color, self.profile.weight(length)))
            .collect()
    }

    /// Per-layer rows in layer order
    ///
    /// The per-color running total restarts whenever a layer's color differs
    /// from the previous layer's (color 1 before the first layer).
    pub fn layer_rows(&self) -> Vec<LayerRow> {
        let mut total = 0.0;
        let mut running = 0.0;
        let mut current_color = 1;

        self.layers
            .iter()
            .map(|layer| {
                if layer.color != current_color {
                    running = 0.0;
                    current_color = layer.color;
                }
                running += layer.extruded;
                total += layer.extruded;

                LayerRow {
                    layer: layer.number,
                    color: layer.color,
                    weight: self.profile.weight(layer.extruded),
                    total_weight: self.profile.weight(total),
                    color_weight: self.profile.weight(running),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn layer(number: u32, color: u32, extruded: f64) -> Layer {
        Layer {
            number,
            color,
            extruded,
        }
    }

    fn pla() -> FilamentProfile {
        FilamentProfile {
            density: 1.24,
            diameter: 1.75,
            filament_type: "PLA".to_string(),
        }
    }

    #[test]
    fn test_color_totals_are_ascending() {
        let estimate = Estimate {
            profile: pla(),
            layers: vec![layer(0, 2, 1.0), layer(1, 1, 2.0), layer(2, 3, 4.0), layer(3, 2, 8.0)],
        };

        let totals: Vec<_> = estimate.color_totals().into_iter().collect();
        assert_eq!(totals, vec![(1, 2.0), (2, 9.0), (3, 4.0)]);
    }

    #[test]
    fn test_layer_rows_running_totals() {
        let profile = pla();
        let estimate = Estimate {
            profile: profile.clone(),
            layers: vec![layer(0, 1, 10.0), layer(1, 1, 20.0), layer(2, 2, 5.0)],
        };

        let rows = estimate.layer_rows();
        assert_eq!(rows.len(), 3);

        assert_abs_diff_eq!(rows[1].total_weight, profile.weight(30.0), epsilon = 1e-12);
        assert_abs_diff_eq!(rows[1].color_weight, profile.weight(30.0), epsilon = 1e-12);

        assert_eq!(rows[2].color, 2);
        assert_abs_diff_eq!(rows[2].total_weight, profile.weight(35.0), epsilon = 1e-12);
        assert_abs_diff_eq!(rows[2].color_weight, profile.weight(5.0), epsilon = 1e-12);
    }

    #[test]
    fn test_fill_missing_keeps_parsed_values() {
        let mut profile = FilamentProfile {
            density: 1.27,
            diameter: 0.0,
            filament_type: String::new(),
        };
        let fallback = FilamentProfile {
            density: 1.24,
            diameter: 1.75,
            filament_type: "PLA".to_string(),
        };

        let filled = profile.fill_missing(&fallback);
        assert_eq!(filled, vec!["diameter", "type"]);
        assert_eq!(profile.density, 1.27);
        assert_eq!(profile.diameter, 1.75);
        assert_eq!(profile.filament_type, "PLA");
    }

    #[test]
    fn test_total_weight() {
        let estimate = Estimate {
            profile: pla(),
            layers: vec![layer(0, 1, 60.0), layer(1, 2, 40.0)],
        };
        assert_abs_diff_eq!(estimate.total_extruded(), 100.0);
        assert_abs_diff_eq!(estimate.total_weight(), 0.29825, epsilon = 1e-4);
    }
}
