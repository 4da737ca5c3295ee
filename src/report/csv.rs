//! CSV detail report
//!
//! A short preamble (profile and per-color totals) followed by one row
//! per layer. Every field is quoted.

use crate::estimation::Estimate;

/// Column headers of the per-layer section
pub const LAYER_HEADER: [&str; 5] = [
    "Layer",
    "Color",
    "Filament Used for layer [g]",
    "Total Filament Used [g]",
    "Total Filament Used Per Color [g]",
];

/// Render the CSV report
pub fn render_csv(estimate: &Estimate) -> String {
    let profile = &estimate.profile;
    let mut out = String::new();

    write_record(&mut out, &["Filament Type", profile.filament_type.as_str()]);
    write_record(
        &mut out,
        &["Filament Diameter [mm]", number(profile.diameter).as_str()],
    );
    write_record(
        &mut out,
        &["Filament Density [g/cm3]", number(profile.density).as_str()],
    );
    write_record(
        &mut out,
        &["Total Layer Count", estimate.layer_count().to_string().as_str()],
    );
    for (color, weight) in estimate.color_weights() {
        write_record(
            &mut out,
            &[format!("Color {}", color).as_str(), number(weight).as_str()],
        );
    }

    write_record(&mut out, &LAYER_HEADER);
    for row in estimate.layer_rows() {
        write_record(
            &mut out,
            &[
                row.layer.to_string().as_str(),
                row.color.to_string().as_str(),
                number(row.weight).as_str(),
                number(row.total_weight).as_str(),
                number(row.color_weight).as_str(),
            ],
        );
    }

    out
}

/// Full-precision float, always with a decimal point ("1.0" rather than "1")
fn number(value: f64) -> String {
    format!("{:?}", value)
}

fn write_record(out: &mut String, fields: &[&str]) {
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    }
    out.push('\n');
}
