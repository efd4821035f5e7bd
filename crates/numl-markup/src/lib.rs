//! NUML Markup Layer
//!
//! Builds a declarative UI tree from component-style tags. Tag
//! constructors take an ordered property mapping and children, the
//! normalizer rewrites author shorthand (packed hex colors, `"600px"`,
//! bare fractions) into the engine's discriminated wire form, and the
//! result is a plain immutable tree ready for serialization.
//!
//! # Example
//!
//! ```
//! use numl_markup::{div, h, Element, Props, Tag};
//!
//! let ui = h(
//!     Tag::Component(div),
//!     Some(Props::new().flex().bg(0x2e7d32).size("600px")),
//!     vec!["Hello World".into()],
//! )
//! .unwrap();
//! assert!(matches!(ui, Element::Div(_)));
//! ```

pub mod builder;
pub mod color;
pub mod element;
pub mod props;
pub mod size;

pub use builder::{h, Constructor, Tag};
pub use color::{Color, ColorValue};
pub use element::{div, Element, StyleMap, StyleValue};
pub use props::{Child, PropKind, PropName, PropValue, Props};
pub use size::{Len, SizeValue};

/// Markup construction error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarkupError {
    /// Raised when a bare name is used as a tag. Only component-style
    /// tags can be built; primitive markup names are rejected outright.
    #[error("tag `{name}` is not supported: expected a component constructor")]
    UnsupportedTagKind { name: String },

    /// A size literal that is not `"auto"` or a number suffixed with
    /// `px` or `rem`.
    #[error("size `{value}` is not recognized (expected \"auto\", \"<n>px\", or \"<n>rem\")")]
    InvalidSize { value: String },

    /// A value stored under a key whose kind it does not match. Only
    /// reachable through the general [`Props::set`] API; the typed
    /// setters cannot produce it.
    #[error("property `{name}` was given a value of the wrong kind")]
    InvalidValue { name: &'static str },
}
