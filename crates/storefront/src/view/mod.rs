//! Element tree: a data description of nested UI nodes.
//!
//! Components build trees of [`Node`]s from data; the tree is then serialized
//! to HTML (see [`render`]) and handed to the browser, which owns patching the
//! visible document. Nothing here diffs trees.
//!
//! ```rust
//! use food_villa_storefront::view::Element;
//!
//! let tree = Element::new("div")
//!     .id("parent")
//!     .child(
//!         Element::new("div")
//!             .id("child1")
//!             .child(Element::new("h1").text("I am an H1 tag"))
//!             .child(Element::new("h2").text("I am an H2 tag")),
//!     );
//!
//! assert_eq!(
//!     tree.to_string(),
//!     r#"<div id="parent"><div id="child1"><h1>I am an H1 tag</h1><h2>I am an H2 tag</h2></div></div>"#
//! );
//! ```

pub mod render;

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A tag with attributes and children.
    Element(Element),
    /// Escaped text content.
    Text(String),
    /// A list of siblings without a wrapping tag.
    Fragment(Vec<Node>),
}

/// A tag with attributes, an optional reconciliation key, and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attributes: Vec<(String, String)>,
    key: Option<String>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            key: None,
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value for the same name.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attributes.push((name, value));
        }
        self
    }

    /// Set the `class` attribute.
    #[must_use]
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Set the `id` attribute.
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Set the key identifying this element among its siblings.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child only when `condition` holds.
    #[must_use]
    pub fn child_if(self, condition: bool, child: impl FnOnce() -> Node) -> Self {
        if condition { self.child(child()) } else { self }
    }

    /// Append every child from an iterator.
    #[must_use]
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Tag name.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// Reconciliation key, if set.
    #[must_use]
    pub fn key_value(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Child nodes.
    #[must_use]
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Whether the `class` attribute contains `class` as a whole word.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Concatenated text of this element and all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Every element in this subtree (including `self`) matching `predicate`,
    /// in document order.
    #[must_use]
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Self>
    where
        F: Fn(&Self) -> bool,
    {
        let mut found = Vec::new();
        self.collect_matching(&predicate, &mut found);
        found
    }

    /// Every element in this subtree carrying `class`.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<&Self> {
        self.find_all(|e| e.has_class(class))
    }

    fn collect_matching<'a, F>(&'a self, predicate: &F, found: &mut Vec<&'a Self>)
    where
        F: Fn(&Self) -> bool,
    {
        if predicate(self) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_matching(predicate, found);
        }
    }
}

impl Node {
    /// An empty fragment; renders as nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Fragment(Vec::new())
    }

    /// Concatenated text of this node and all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    /// Every element in this subtree matching `predicate`, in document order.
    #[must_use]
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        self.collect_matching(&predicate, &mut found);
        found
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.collect_text(out);
                }
            }
        }
    }

    fn collect_matching<'a, F>(&'a self, predicate: &F, found: &mut Vec<&'a Element>)
    where
        F: Fn(&Element) -> bool,
    {
        match self {
            Self::Element(element) => element.collect_matching(predicate, found),
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.collect_matching(predicate, found);
                }
            }
            Self::Text(_) => {}
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<Self>> for Node {
    fn from(nodes: Vec<Self>) -> Self {
        Self::Fragment(nodes)
    }
}

impl From<Option<Element>> for Node {
    fn from(element: Option<Element>) -> Self {
        element.map_or_else(Self::empty, Self::Element)
    }
}
