//! The normalized element tree and the container constructor.
//!
//! [`div`] is the one concrete tag: it rewrites authored properties
//! into the discriminated wire form, key by key, in authored order.
//! The output tree is plain data — no identity, no mutation after
//! construction — and serializes directly into the engine's format.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::color::Color;
use crate::props::{Child, PropKind, PropName, PropValue, Props};
use crate::size::Len;
use crate::MarkupError;

/// A node in the normalized tree.
///
/// Externally tagged: `{"Div": {...}}` or `{"Text": "..."}` — the two
/// shapes the engine's deserializer accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Element {
    /// A container with normalized style properties.
    Div(StyleMap),
    /// A text leaf. Only ever appears inside a children list.
    Text(String),
}

/// Ordered normalized property map.
///
/// Serializes as a JSON object whose key order is insertion order,
/// which is the authored order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    entries: Vec<(PropName, StyleValue)>,
}

impl StyleMap {
    /// The value stored under `name`, if any.
    pub fn get(&self, name: PropName) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value)
    }

    /// Entries in authored order.
    pub fn iter(&self) -> impl Iterator<Item = (PropName, &StyleValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, name: PropName, value: StyleValue) {
        self.entries.push((name, value));
    }
}

impl Serialize for StyleMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name.as_str(), value)?;
        }
        map.end()
    }
}

/// A normalized property value.
///
/// Untagged: a presence flag serializes as a bare `true`, the rest
/// delegate to their tagged wire enums.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Presence flag for a style switch.
    Present(bool),
    Color(Color),
    Size(Len),
    /// Ordered children list.
    Nodes(Vec<Element>),
}

/// The box/container tag.
///
/// Rewrites each authored property into its wire form, preserving the
/// authored key order, and wraps the result in [`Element::Div`]. An
/// empty mapping yields an empty container.
///
/// # Errors
/// [`MarkupError::InvalidSize`] for an unrecognized size literal, and
/// [`MarkupError::InvalidValue`] when a value stored through the
/// general [`Props::set`] API does not match the key's kind.
pub fn div(props: Props) -> Result<Element, MarkupError> {
    let mut styles = StyleMap::default();
    for (name, value) in props {
        styles.push(name, normalize(name, value)?);
    }
    Ok(Element::Div(styles))
}

/// Apply the first matching normalization rule for `name`.
fn normalize(name: PropName, value: PropValue) -> Result<StyleValue, MarkupError> {
    match (name.kind(), value) {
        // Color-family keys take the discriminated color union.
        (PropKind::Color, PropValue::Color(color)) => Ok(StyleValue::Color(color.normalize())),
        // Children: text runs become leaves, elements pass through.
        (PropKind::Children, PropValue::Children(children)) => Ok(StyleValue::Nodes(
            children.into_iter().map(Child::into_node).collect(),
        )),
        // The size shorthand parses into the engine's length form.
        (PropKind::Size, PropValue::Size(size)) => Ok(StyleValue::Size(size.normalize()?)),
        // Every switch key is a pure presence flag, whatever was stored.
        (PropKind::Switch, _) => Ok(StyleValue::Present(true)),
        // Mismatches can only come through the general `set` API.
        (_, _) => Err(MarkupError::InvalidValue {
            name: name.as_str(),
        }),
    }
}
