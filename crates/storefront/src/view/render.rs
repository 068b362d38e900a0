//! HTML serialization of element trees.

use std::fmt::{self, Write};

use askama::filters::{Escaper, Html};

use super::{Element, Node};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Attribute carrying an element's key into the document.
pub const KEY_ATTRIBUTE: &str = "data-key";

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => fmt::Display::fmt(element, f),
            Self::Text(text) => Html.write_escaped_str(&mut *f, text),
            Self::Fragment(nodes) => nodes.iter().try_for_each(|node| fmt::Display::fmt(node, f)),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if let Some(key) = &self.key {
            write_attribute(f, KEY_ATTRIBUTE, key)?;
        }
        for (name, value) in &self.attributes {
            write_attribute(f, name, value)?;
        }
        f.write_char('>')?;

        if is_void(self.tag) {
            return Ok(());
        }

        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

/// Whether `tag` is a void element.
#[must_use]
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

fn write_attribute(f: &mut fmt::Formatter<'_>, name: &str, value: &str) -> fmt::Result {
    write!(f, " {name}=\"")?;
    Html.write_escaped_str(&mut *f, value)?;
    f.write_char('"')
}
