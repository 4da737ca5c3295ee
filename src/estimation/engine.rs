//! Estimation Engine
//!
//! Single forward pass over parsed lines, tracking the open layer, the
//! active color segment and pending retraction.

use crate::error::ParseError;
use crate::estimation::extrusion::{extrusion_delta, parse_number};
use crate::estimation::model::{Estimate, FilamentProfile, Layer};
use crate::parser::{Instruction, ParsedLine};

/// Metadata prefix marking the start of a new layer
pub const LAYER_PREFIX: &str = "LAYER:";
pub const DENSITY_PREFIX: &str = "filament_density = ";
pub const DIAMETER_PREFIX: &str = "filament_diameter = ";
pub const TYPE_PREFIX: &str = "filament_type = ";

/// Linear move, the only command carrying extrusion we look at
pub const LINEAR_MOVE: &str = "G1";
/// Manual filament change
pub const COLOR_CHANGE: &str = "M600";

/// Aggregation state for one G-code stream
///
/// Feed every parsed line in file order, then call [`Estimator::finish`].
#[derive(Debug)]
pub struct Estimator {
    profile: FilamentProfile,
    finished: Vec<Layer>,
    current: Layer,
    layer_number: u32,
    color: u32,
    /// Net extrusion not yet credited to a layer; never positive between lines
    pending: f64,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator {
    pub fn new() -> Self {
        Self {
            profile: FilamentProfile::default(),
            finished: Vec::new(),
            current: Layer::new(0, 1),
            layer_number: 0,
            color: 1,
            pending: 0.0,
        }
    }

    /// Apply one parsed line
    pub fn feed(&mut self, line: &ParsedLine) -> Result<(), ParseError> {
        match line {
            ParsedLine::Metadata(meta) => self.apply_metadata(&meta.text),
            ParsedLine::Instruction(instr) => self.apply_instruction(instr),
        }
    }

    fn apply_metadata(&mut self, text: &str) -> Result<(), ParseError> {
        if text.starts_with(LAYER_PREFIX) {
            self.layer_number += 1;
            let next = Layer::new(self.layer_number, self.color);
            let done = std::mem::replace(&mut self.current, next);
            log::debug!(
                "layer {} closed with {:.5} mm, opening layer {} (color {})",
                done.number,
                done.extruded,
                self.layer_number,
                self.color
            );
            self.finished.push(done);
        } else if let Some(value) = text.strip_prefix(DENSITY_PREFIX) {
            self.profile.density = parse_number("filament_density", value)?;
        } else if let Some(value) = text.strip_prefix(DIAMETER_PREFIX) {
            self.profile.diameter = parse_number("filament_diameter", value)?;
        } else if let Some(value) = text.strip_prefix(TYPE_PREFIX) {
            self.profile.filament_type = value.to_string();
        }
        Ok(())
    }

    fn apply_instruction(&mut self, instr: &Instruction) -> Result<(), ParseError> {
        match instr.command.as_str() {
            COLOR_CHANGE => {
                self.color += 1;
                self.current.color = self.color;
                log::debug!(
                    "color change to {} during layer {}",
                    self.color,
                    self.current.number
                );
            }
            LINEAR_MOVE => {
                if let Some(delta) = extrusion_delta(instr)? {
                    self.pending += delta;
                    if self.pending > 0.0 {
                        self.current.extruded += self.pending;
                        self.pending = 0.0;
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Close the open layer and return the result
    ///
    /// Retraction still pending at this point is dropped.
    pub fn finish(mut self) -> Estimate {
        if self.pending < 0.0 {
            log::debug!(
                "dropping {:.5} mm of unmatched retraction at end of stream",
                self.pending
            );
        }
        self.finished.push(self.current);

        Estimate {
            profile: self.profile,
            layers: self.finished,
        }
    }
}

/// Run a whole sequence of parsed lines through a fresh [`Estimator`]
pub fn estimate_lines<'a, I>(lines: I) -> Result<Estimate, ParseError>
where
    I: IntoIterator<Item = &'a ParsedLine>,
{
    let mut estimator = Estimator::new();
    for line in lines {
        estimator.feed(line)?;
    }
    Ok(estimator.finish())
}
