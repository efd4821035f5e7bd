//! Size values: author shorthand and the engine's length form.
//!
//! The shorthand is a literal string (`"auto"`, `"600px"`, `"2.5rem"`)
//! or a bare number meaning a fraction of the available space.
//! Normalization parses the literal into the discriminated [`Len`] the
//! engine deserializes; an unrecognized literal is a hard error rather
//! than silently passing through.

use serde::Serialize;

use crate::MarkupError;

/// A size as written in markup: a literal string or a bare number.
#[derive(Debug, Clone, PartialEq)]
pub enum SizeValue {
    /// `"auto"`, `"<n>px"`, or `"<n>rem"`, parsed during normalization.
    Literal(String),
    /// Fraction of the available space.
    Fraction(f32),
}

impl SizeValue {
    /// Parse the shorthand into the wire representation.
    ///
    /// # Errors
    /// Returns [`MarkupError::InvalidSize`] for a literal that is not
    /// `"auto"` or a number suffixed with `px` or `rem`.
    pub fn normalize(&self) -> Result<Len, MarkupError> {
        match self {
            Self::Fraction(value) => Ok(Len::DefiniteFraction(*value)),
            Self::Literal(text) => parse_literal(text),
        }
    }
}

impl From<&str> for SizeValue {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for SizeValue {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

impl From<f32> for SizeValue {
    fn from(value: f32) -> Self {
        Self::Fraction(value)
    }
}

/// Parse a size literal: the `auto` keyword or a number with a unit
/// suffix.
fn parse_literal(text: &str) -> Result<Len, MarkupError> {
    if text == "auto" {
        return Ok(Len::Auto(true));
    }

    if let Some(number) = text.strip_suffix("px") {
        if let Ok(value) = number.parse::<f32>() {
            return Ok(Len::DefiniteAbsolutePixels(value));
        }
    }

    if let Some(number) = text.strip_suffix("rem") {
        if let Ok(value) = number.parse::<f32>() {
            return Ok(Len::DefiniteAbsoluteRems(value));
        }
    }

    Err(MarkupError::InvalidSize {
        value: text.to_string(),
    })
}

/// Wire-side length, externally tagged for the engine's deserializer.
///
/// `Auto` carries `true` so it serializes as `{"Auto": true}` — the
/// shape the engine expects — rather than the bare string a unit
/// variant would produce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Len {
    /// Absolute size in pixels.
    DefiniteAbsolutePixels(f32),
    /// Absolute size in root-em units.
    DefiniteAbsoluteRems(f32),
    /// Fraction of the available space.
    DefiniteFraction(f32),
    /// Content-determined size.
    Auto(bool),
}
