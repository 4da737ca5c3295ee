//! Console summary

use std::fmt::Write;

use crate::estimation::Estimate;

/// Human-readable summary: profile, layer count and weight per color
pub fn render_summary(estimate: &Estimate) -> String {
    let profile = &estimate.profile;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Filament Type: {}", profile.filament_type);
    let _ = writeln!(out, "Filament Diameter: {:.2}mm", profile.diameter);
    let _ = writeln!(out, "Filament Density: {:.2}g/cm3", profile.density);
    let _ = writeln!(out, "Total Layer Count: {}", estimate.layer_count());

    for (color, weight) in estimate.color_weights() {
        let _ = writeln!(out, "Color {}: {:.2}g", color, weight);
    }

    out
}
