//! The author-facing property surface.
//!
//! Every recognized property name is enumerated up front and mapped to
//! its normalization strategy, so the dispatch in the normalizer is
//! exhaustive instead of matching on raw key strings. Properties live
//! in an ordered list, not a hash map: the order they were written in
//! is the order they serialize in.

use crate::color::ColorValue;
use crate::element::Element;
use crate::size::SizeValue;

/// The recognized property names of the markup surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropName {
    Flex,
    JustifyCenter,
    ItemsCenter,
    ShadowLg,
    Border,
    TextXl,
    Bg,
    BorderColor,
    TextColor,
    Size,
    Children,
}

/// Normalization strategy for a property, looked up from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    /// Presence flag: serializes as `true` no matter what was stored.
    Switch,
    /// Color-valued: `bg`, `border_color`, `text_color`.
    Color,
    /// The `size` shorthand.
    Size,
    /// The reserved ordered children list.
    Children,
}

impl PropName {
    /// The wire key for this property.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flex => "flex",
            Self::JustifyCenter => "justify_center",
            Self::ItemsCenter => "items_center",
            Self::ShadowLg => "shadow_lg",
            Self::Border => "border",
            Self::TextXl => "text_xl",
            Self::Bg => "bg",
            Self::BorderColor => "border_color",
            Self::TextColor => "text_color",
            Self::Size => "size",
            Self::Children => "children",
        }
    }

    /// Which normalization rule applies to this property.
    pub fn kind(self) -> PropKind {
        match self {
            Self::Flex
            | Self::JustifyCenter
            | Self::ItemsCenter
            | Self::ShadowLg
            | Self::Border
            | Self::TextXl => PropKind::Switch,
            Self::Bg | Self::BorderColor | Self::TextColor => PropKind::Color,
            Self::Size => PropKind::Size,
            Self::Children => PropKind::Children,
        }
    }
}

/// A property value as authored, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// A style switch. Carries no payload; presence is the payload.
    Switch,
    Color(ColorValue),
    Size(SizeValue),
    Children(Vec<Child>),
}

/// A child as authored: a text run or an already-built element.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Text(String),
    Element(Element),
}

impl Child {
    /// Normalize into a tree node: text becomes a [`Element::Text`]
    /// leaf, elements pass through unchanged.
    pub fn into_node(self) -> Element {
        match self {
            Self::Text(text) => Element::Text(text),
            Self::Element(element) => element,
        }
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// Ordered property list as authored.
///
/// Setting a key that is already present replaces its value in place,
/// keeping the key's original position; new keys append at the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: Vec<(PropName, PropValue)>,
}

impl Props {
    /// The empty property list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name`: replace in place if the key exists,
    /// append otherwise.
    pub fn set(mut self, name: PropName, value: PropValue) -> Self {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// The value stored under `name`, if any.
    pub fn get(&self, name: PropName) -> Option<&PropValue> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // -----------------------------------------------------------------
    // Typed setters
    // -----------------------------------------------------------------

    pub fn flex(self) -> Self {
        self.set(PropName::Flex, PropValue::Switch)
    }

    pub fn justify_center(self) -> Self {
        self.set(PropName::JustifyCenter, PropValue::Switch)
    }

    pub fn items_center(self) -> Self {
        self.set(PropName::ItemsCenter, PropValue::Switch)
    }

    pub fn shadow_lg(self) -> Self {
        self.set(PropName::ShadowLg, PropValue::Switch)
    }

    pub fn border(self) -> Self {
        self.set(PropName::Border, PropValue::Switch)
    }

    pub fn text_xl(self) -> Self {
        self.set(PropName::TextXl, PropValue::Switch)
    }

    pub fn bg(self, color: impl Into<ColorValue>) -> Self {
        self.set(PropName::Bg, PropValue::Color(color.into()))
    }

    pub fn border_color(self, color: impl Into<ColorValue>) -> Self {
        self.set(PropName::BorderColor, PropValue::Color(color.into()))
    }

    pub fn text_color(self, color: impl Into<ColorValue>) -> Self {
        self.set(PropName::TextColor, PropValue::Color(color.into()))
    }

    pub fn size(self, size: impl Into<SizeValue>) -> Self {
        self.set(PropName::Size, PropValue::Size(size.into()))
    }

    pub fn children<I>(self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Child>,
    {
        let children = children.into_iter().map(Into::into).collect();
        self.set(PropName::Children, PropValue::Children(children))
    }
}

impl IntoIterator for Props {
    type Item = (PropName, PropValue);
    type IntoIter = std::vec::IntoIter<(PropName, PropValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Name → kind lookup
    // =========================================================================

    #[test]
    fn test_switch_names_map_to_switch_kind() {
        for name in [
            PropName::Flex,
            PropName::JustifyCenter,
            PropName::ItemsCenter,
            PropName::ShadowLg,
            PropName::Border,
            PropName::TextXl,
        ] {
            assert_eq!(name.kind(), PropKind::Switch);
        }
    }

    #[test]
    fn test_color_names_map_to_color_kind() {
        for name in [PropName::Bg, PropName::BorderColor, PropName::TextColor] {
            assert_eq!(name.kind(), PropKind::Color);
        }
    }

    #[test]
    fn test_size_and_children_kinds() {
        assert_eq!(PropName::Size.kind(), PropKind::Size);
        assert_eq!(PropName::Children.kind(), PropKind::Children);
    }

    #[test]
    fn test_wire_keys() {
        assert_eq!(PropName::JustifyCenter.as_str(), "justify_center");
        assert_eq!(PropName::BorderColor.as_str(), "border_color");
        assert_eq!(PropName::Bg.as_str(), "bg");
        assert_eq!(PropName::Children.as_str(), "children");
    }

    // =========================================================================
    // Ordered storage
    // =========================================================================

    #[test]
    fn test_default_is_empty() {
        let props = Props::new();
        assert!(props.is_empty());
        assert_eq!(props.len(), 0);
    }

    #[test]
    fn test_set_appends_in_order() {
        let props = Props::new().bg(0x2e7d32).size("600px").flex();
        let names: Vec<PropName> = props.into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec![PropName::Bg, PropName::Size, PropName::Flex]);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let props = Props::new().bg(0x111111).flex().bg(0x222222);
        assert_eq!(props.len(), 2);
        assert_eq!(
            props.get(PropName::Bg),
            Some(&PropValue::Color(ColorValue::Hex(0x222222)))
        );
        let names: Vec<PropName> = props.into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec![PropName::Bg, PropName::Flex]);
    }

    #[test]
    fn test_switch_setters_store_presence() {
        let props = Props::new().flex().border();
        assert_eq!(props.get(PropName::Flex), Some(&PropValue::Switch));
        assert_eq!(props.get(PropName::Border), Some(&PropValue::Switch));
        assert_eq!(props.get(PropName::ShadowLg), None);
    }

    #[test]
    fn test_children_setter_converts_strings() {
        let props = Props::new().children(vec!["Hello", "World"]);
        assert_eq!(
            props.get(PropName::Children),
            Some(&PropValue::Children(vec![
                Child::Text("Hello".to_string()),
                Child::Text("World".to_string()),
            ]))
        );
    }

    #[test]
    fn test_size_setter_accepts_number() {
        let props = Props::new().size(0.5);
        assert_eq!(
            props.get(PropName::Size),
            Some(&PropValue::Size(SizeValue::Fraction(0.5)))
        );
    }
}
