//! Filament Estimation
//!
//! Turns parsed lines into per-layer, per-color extrusion totals.

pub mod engine;
pub mod extrusion;
pub mod model;
pub mod weight;

pub use engine::{Estimator, estimate_lines};
pub use extrusion::{extrusion_delta, normalize_decimal};
pub use model::{Estimate, FilamentProfile, Layer, LayerRow};
pub use weight::weight;
