//! Generic named tree nodes.
//!
//! A search response is a tree of nodes that are told apart only by an
//! optional `name` attribute. A node holds either scalar text or an ordered
//! list of children. The parsers in [`crate::parser`] are written against the
//! [`TreeNode`] trait so they work for any format that exposes this shape;
//! [`NamedNode`] is the owned implementation used by the bundled JSON reader.
//!
//! # Examples
//!
//! ```
//! use termvec::node::{NamedNode, TreeNode};
//!
//! let term = NamedNode::list(
//!     "rust",
//!     vec![NamedNode::text("tf", "2"), NamedNode::text("df", "1")],
//! );
//!
//! assert_eq!(term.name(), Some("rust"));
//! assert_eq!(term.find_child("df").unwrap().text(), "1");
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

pub mod json;

/// Read access to a node of a named tree.
///
/// The next sibling of a child is the following element of its parent's
/// [`children`](TreeNode::children) slice.
pub trait TreeNode: Sized {
    /// The node's `name` attribute, if it has one.
    fn name(&self) -> Option<&str>;

    /// Text content. For list nodes this is the concatenated text of all
    /// descendants.
    fn text(&self) -> Cow<'_, str>;

    /// Ordered children. Empty for scalar nodes.
    fn children(&self) -> &[Self];

    /// Whether the node is a list rather than a scalar.
    fn is_list(&self) -> bool;

    /// First child whose name equals `name`.
    fn find_child(&self, name: &str) -> Option<&Self> {
        self.children().iter().find(|c| c.name() == Some(name))
    }

    /// All children whose name equals `name`, in order.
    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> {
        self.children().iter().filter(move |c| c.name() == Some(name))
    }
}

/// Content of a [`NamedNode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeValue {
    /// Scalar text.
    Text(String),
    /// Ordered child nodes.
    List(Vec<NamedNode>),
}

/// An owned named tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedNode {
    name: Option<String>,
    value: NodeValue,
}

impl NamedNode {
    pub fn new(name: Option<String>, value: NodeValue) -> Self {
        NamedNode { name, value }
    }

    /// Create a named scalar node.
    pub fn text<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        NamedNode::new(Some(name.into()), NodeValue::Text(value.into()))
    }

    /// Create a named list node.
    pub fn list<N: Into<String>>(name: N, children: Vec<NamedNode>) -> Self {
        NamedNode::new(Some(name.into()), NodeValue::List(children))
    }

    /// Create a scalar node without a name.
    pub fn unnamed_text<V: Into<String>>(value: V) -> Self {
        NamedNode::new(None, NodeValue::Text(value.into()))
    }

    /// Create a list node without a name.
    pub fn unnamed_list(children: Vec<NamedNode>) -> Self {
        NamedNode::new(None, NodeValue::List(children))
    }

    pub fn value(&self) -> &NodeValue {
        &self.value
    }

    /// Append a child, turning a scalar node into a list.
    pub fn push(&mut self, child: NamedNode) {
        match &mut self.value {
            NodeValue::List(children) => children.push(child),
            NodeValue::Text(_) => self.value = NodeValue::List(vec![child]),
        }
    }

    fn collect_text(&self, buf: &mut String) {
        match &self.value {
            NodeValue::Text(s) => buf.push_str(s),
            NodeValue::List(children) => {
                for child in children {
                    child.collect_text(buf);
                }
            }
        }
    }
}

impl TreeNode for NamedNode {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn text(&self) -> Cow<'_, str> {
        match &self.value {
            NodeValue::Text(s) => Cow::Borrowed(s),
            NodeValue::List(_) => {
                let mut buf = String::new();
                self.collect_text(&mut buf);
                Cow::Owned(buf)
            }
        }
    }

    fn children(&self) -> &[Self] {
        match &self.value {
            NodeValue::Text(_) => &[],
            NodeValue::List(children) => children,
        }
    }

    fn is_list(&self) -> bool {
        matches!(self.value, NodeValue::List(_))
    }
}
