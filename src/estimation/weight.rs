//! Length to mass conversion

use std::f64::consts::PI;

/// Mass in grams of `length` millimeters of filament
///
/// The extruded length is treated as a cylinder with the filament's
/// cross-section; mm³ are converted to cm³ before applying the density.
pub fn weight(length: f64, diameter: f64, density: f64) -> f64 {
    let radius = diameter / 2.0;
    let volume_mm3 = PI * radius * radius * length;
    (volume_mm3 / 1000.0) * density
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_weight_of_standard_pla() {
        // pi * 0.875^2 * 100 / 1000 * 1.24
        assert_abs_diff_eq!(weight(100.0, 1.75, 1.24), 0.29825, epsilon = 1e-4);
    }

    #[test]
    fn test_weight_is_linear_in_length() {
        let one = weight(1.0, 2.85, 1.27);
        assert_abs_diff_eq!(weight(250.0, 2.85, 1.27), one * 250.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_geometry_gives_zero() {
        assert_eq!(weight(100.0, 0.0, 1.24), 0.0);
        assert_eq!(weight(100.0, 1.75, 0.0), 0.0);
        assert_eq!(weight(0.0, 1.75, 1.24), 0.0);
    }
}
