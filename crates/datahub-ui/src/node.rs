//! Render output tree.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The output of rendering a component — a lightweight markup tree.
///
/// The host walks this tree to produce the final page. Tests use
/// [`Node::text_content`] to assert on what a mounted component produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Renders nothing.
    Empty,
    /// A text node.
    Text(String),
    /// A markup element with attributes and children.
    Element(Element),
    /// A sequence of nodes without an enclosing element.
    Fragment(Vec<Node>),
}

impl Node {
    /// Creates a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Creates an element node with no attributes or children.
    pub fn element(tag: impl Into<String>) -> Element {
        Element::new(tag)
    }

    /// Concatenates all text content in the tree, depth first.
    pub fn text_content(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.clone(),
            Self::Element(element) => element
                .children
                .iter()
                .map(Node::text_content)
                .collect::<Vec<_>>()
                .join(""),
            Self::Fragment(nodes) => nodes
                .iter()
                .map(Node::text_content)
                .collect::<Vec<_>>()
                .join(""),
        }
    }
}

/// A markup element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name, e.g. `"div"` or `"button"`.
    pub tag: String,
    /// Element attributes in insertion order.
    pub attrs: IndexMap<String, String>,
    /// Child nodes.
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Appends a child node.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Appends multiple child nodes.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> Node {
        Node::Element(self)
    }
}
