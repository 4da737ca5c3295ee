//! Extrusion parameter parsing

use std::borrow::Cow;

use crate::error::ParseError;
use crate::parser::Instruction;

/// Parameter letter of the extruder axis
pub const EXTRUSION_AXIS: char = 'E';

/// Extract the signed extrusion delta of an instruction
///
/// Returns `Ok(None)` when no parameter starts with the extrusion axis
/// letter. Only the first such parameter is considered.
pub fn extrusion_delta(instruction: &Instruction) -> Result<Option<f64>, ParseError> {
    let Some(param) = instruction.parameter(EXTRUSION_AXIS) else {
        return Ok(None);
    };

    let literal = &param[EXTRUSION_AXIS.len_utf8()..];
    parse_number("extrusion", literal).map(Some)
}

/// Add the missing leading zero to `.5` and `-.5` style literals
pub fn normalize_decimal(literal: &str) -> Cow<'_, str> {
    if let Some(rest) = literal.strip_prefix("-.") {
        Cow::Owned(format!("-0.{}", rest))
    } else if literal.starts_with('.') {
        Cow::Owned(format!("0{}", literal))
    } else {
        Cow::Borrowed(literal)
    }
}

/// Parse a finite decimal, normalizing leading-dot forms first
pub(crate) fn parse_number(field: &'static str, literal: &str) -> Result<f64, ParseError> {
    let normalized = normalize_decimal(literal.trim());
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::InvalidNumber {
            field,
            literal: literal.to_string(),
        }),
    }
}
