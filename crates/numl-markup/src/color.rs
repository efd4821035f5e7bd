//! Color values: author shorthand and the engine's wire form.
//!
//! Authors write a packed hex integer or state a component shape
//! explicitly (`rgb`/`rgba`/`hsl`/`hsla`); normalization rewrites the
//! shorthand into the discriminated [`Color`] the engine deserializes.
//! There is no runtime field-name sniffing to tell RGB from HSL apart —
//! the input union enumerates both shapes.

use serde::Serialize;

/// A color as written in markup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    /// Packed `0xRRGGBB` integer.
    Hex(u32),
    /// Packed `0xRRGGBBAA` integer.
    HexAlpha(u32),
    /// Red/green/blue components in the range 0.0 to 1.0, with an
    /// optional alpha.
    Rgb {
        r: f32,
        g: f32,
        b: f32,
        a: Option<f32>,
    },
    /// Hue/saturation/lightness in the range 0.0 to 1.0, with an
    /// optional alpha.
    Hsl {
        h: f32,
        s: f32,
        l: f32,
        a: Option<f32>,
    },
}

impl ColorValue {
    /// A packed `0xRRGGBB` color.
    pub fn hex(value: u32) -> Self {
        Self::Hex(value)
    }

    /// A packed `0xRRGGBBAA` color.
    pub fn hex_alpha(value: u32) -> Self {
        Self::HexAlpha(value)
    }

    /// An opaque RGB color.
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::Rgb { r, g, b, a: None }
    }

    /// An RGB color with an explicit alpha.
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::Rgb { r, g, b, a: Some(a) }
    }

    /// An opaque HSL color.
    pub fn hsl(h: f32, s: f32, l: f32) -> Self {
        Self::Hsl { h, s, l, a: None }
    }

    /// An HSL color with an explicit alpha.
    pub fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self::Hsl { h, s, l, a: Some(a) }
    }

    /// Rewrite into the wire representation.
    ///
    /// An RGB input without alpha becomes [`Color::Rgb`], with alpha
    /// [`Color::Rgba`]; likewise for HSL.
    pub fn normalize(self) -> Color {
        match self {
            Self::Hex(value) => Color::RgbHex(value),
            Self::HexAlpha(value) => Color::RgbaHex(value),
            Self::Rgb { r, g, b, a: None } => Color::Rgb { r, g, b },
            Self::Rgb { r, g, b, a: Some(a) } => Color::Rgba { r, g, b, a },
            Self::Hsl { h, s, l, a: None } => Color::Hsl { h, s, l },
            Self::Hsl { h, s, l, a: Some(a) } => Color::Hsla { h, s, l, a },
        }
    }
}

/// A bare numeric color is a packed RGB hex value.
impl From<u32> for ColorValue {
    fn from(value: u32) -> Self {
        Self::Hex(value)
    }
}

/// Wire-side color, externally tagged for the engine's deserializer.
///
/// Serializes as `{"RgbHex": 3026722}`, `{"Rgb": {"r": .., "g": ..,
/// "b": ..}}`, and so on. Component fields are in the range 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Color {
    /// Packed `0xRRGGBB`.
    RgbHex(u32),
    /// Packed `0xRRGGBBAA`.
    RgbaHex(u32),
    Rgb {
        r: f32,
        g: f32,
        b: f32,
    },
    Rgba {
        r: f32,
        g: f32,
        b: f32,
        a: f32,
    },
    Hsl {
        h: f32,
        s: f32,
        l: f32,
    },
    Hsla {
        h: f32,
        s: f32,
        l: f32,
        a: f32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    // =========================================================================
    // Normalization
    // =========================================================================

    #[test]
    fn test_hex_normalizes_to_rgb_hex() {
        assert_eq!(ColorValue::hex(0x2e7d32).normalize(), Color::RgbHex(0x2e7d32));
    }

    #[test]
    fn test_hex_alpha_normalizes_to_rgba_hex() {
        assert_eq!(
            ColorValue::hex_alpha(0x2e7d32ff).normalize(),
            Color::RgbaHex(0x2e7d32ff)
        );
    }

    #[test]
    fn test_rgb_without_alpha() {
        assert_eq!(
            ColorValue::rgb(0.1, 0.2, 0.3).normalize(),
            Color::Rgb { r: 0.1, g: 0.2, b: 0.3 }
        );
    }

    #[test]
    fn test_rgb_with_alpha() {
        assert_eq!(
            ColorValue::rgba(0.1, 0.2, 0.3, 0.5).normalize(),
            Color::Rgba {
                r: 0.1,
                g: 0.2,
                b: 0.3,
                a: 0.5
            }
        );
    }

    #[test]
    fn test_hsl_without_alpha() {
        assert_eq!(
            ColorValue::hsl(0.6, 1.0, 0.5).normalize(),
            Color::Hsl { h: 0.6, s: 1.0, l: 0.5 }
        );
    }

    #[test]
    fn test_hsl_with_alpha() {
        assert_eq!(
            ColorValue::hsla(0.6, 1.0, 0.5, 0.25).normalize(),
            Color::Hsla {
                h: 0.6,
                s: 1.0,
                l: 0.5,
                a: 0.25
            }
        );
    }

    #[test]
    fn test_bare_number_is_hex() {
        let color: ColorValue = 0xffaa22.into();
        assert_eq!(color.normalize(), Color::RgbHex(0xffaa22));
    }

    // =========================================================================
    // Wire shapes
    // =========================================================================

    #[test]
    fn test_wire_shape_rgb_hex() {
        let value = serde_json::to_value(Color::RgbHex(0x2e7d32)).unwrap();
        assert_eq!(value, json!({ "RgbHex": 3026722 }));
    }

    #[test]
    fn test_wire_shape_rgba_hex() {
        let value = serde_json::to_value(Color::RgbaHex(0xffffffff)).unwrap();
        assert_eq!(value, json!({ "RgbaHex": 4294967295_u32 }));
    }

    #[test]
    fn test_wire_shape_rgb_struct() {
        let value = serde_json::to_value(Color::Rgb { r: 1.0, g: 0.5, b: 0.0 }).unwrap();
        assert_eq!(value, json!({ "Rgb": { "r": 1.0, "g": 0.5, "b": 0.0 } }));
    }

    #[test]
    fn test_wire_shape_hsla_struct() {
        let value = serde_json::to_value(Color::Hsla {
            h: 0.5,
            s: 1.0,
            l: 0.25,
            a: 0.75,
        })
        .unwrap();
        assert_eq!(
            value,
            json!({ "Hsla": { "h": 0.5, "s": 1.0, "l": 0.25, "a": 0.75 } })
        );
    }
}
