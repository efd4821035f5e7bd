//! The hyperscript-style element factory.
//!
//! `h(tag, props, children)` is the single entry point markup
//! evaluates through: children merge into the props under the reserved
//! key, the tag constructor runs the normalizer, and the built node
//! comes back untouched. Only component-style tags are accepted — a
//! bare primitive name fails immediately.

use crate::element::Element;
use crate::props::{Child, Props};
use crate::MarkupError;

/// A tag constructor: takes the final props, returns the built node.
pub type Constructor = fn(Props) -> Result<Element, MarkupError>;

/// A tag reference: a component constructor or a bare primitive name.
#[derive(Debug, Clone)]
pub enum Tag {
    /// A component-style tag, like [`div`](crate::element::div).
    Component(Constructor),
    /// A primitive markup name like `"span"`. Always rejected.
    Named(String),
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

/// Build an element from a tag, optional props, and children.
///
/// Children, when present, are merged into the props under the
/// reserved `children` key as an ordered sequence, overwriting any
/// children value already stored there. A missing props argument
/// becomes the empty mapping before the constructor runs.
///
/// # Errors
/// [`MarkupError::UnsupportedTagKind`] for a named (non-component)
/// tag; otherwise whatever the tag constructor returns.
pub fn h(tag: Tag, props: Option<Props>, children: Vec<Child>) -> Result<Element, MarkupError> {
    let constructor = match tag {
        Tag::Component(constructor) => constructor,
        Tag::Named(name) => return Err(MarkupError::UnsupportedTagKind { name }),
    };

    let mut props = props.unwrap_or_default();
    if !children.is_empty() {
        props = props.children(children);
    }

    constructor(props)
}
