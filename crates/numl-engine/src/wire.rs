//! Wire encoding.
//!
//! The engine consumes the tree as UTF-8 JSON. The byte layout is
//! exactly serde's externally tagged output of [`Element`] — a single
//! top-level key naming the variant, property keys in authored order,
//! tagged payload objects for colors and sizes, bare `true` for
//! presence flags. Nothing here post-processes the text.

use numl_markup::Element;

use crate::EngineError;

/// Encode a tree as UTF-8 JSON bytes, ready for the engine call.
pub fn to_bytes(element: &Element) -> Result<Vec<u8>, EngineError> {
    Ok(serde_json::to_vec(element)?)
}

/// Encode a tree as a compact JSON string.
pub fn to_string(element: &Element) -> Result<String, EngineError> {
    Ok(serde_json::to_string(element)?)
}

/// Encode a tree as indented JSON, for inspection.
pub fn to_string_pretty(element: &Element) -> Result<String, EngineError> {
    Ok(serde_json::to_string_pretty(element)?)
}
