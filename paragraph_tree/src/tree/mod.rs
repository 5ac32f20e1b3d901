// Copyright 2021 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The styled text tree.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Index 0 is always the root and index
//! 1 the top-level span the builder starts in. Nodes are only ever appended, so a node's id is
//! greater than its parent's.

mod flatten;

pub use flatten::{FlattenedParagraph, StyleRun};

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::style::ComputedStyle;

/// Stable address of a node in a [`Paragraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node.
    pub const ROOT: Self = Self(0);

    /// The top-level span created with the tree.
    pub const TOP_SPAN: Self = Self(1);

    /// Position of the node in the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// What a node is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The paragraph container, holding the document defaults.
    Root,
    /// A style scope.
    Span,
    /// Leaf text.
    TextRun,
}

#[derive(Clone, Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    style: Arc<ComputedStyle>,
    text: Option<Box<str>>,
}

/// An immutable tree of styled text.
///
/// Produced by [`TreeBuilder::build`](crate::TreeBuilder::build).
#[derive(Clone, Debug)]
pub struct Paragraph {
    nodes: Vec<Node>,
}

impl Paragraph {
    /// Creates a tree holding the root and the empty top-level span, both styled `root_style`.
    pub(crate) fn new(root_style: ComputedStyle) -> Self {
        let style = Arc::new(root_style);
        let root = Node {
            kind: NodeKind::Root,
            parent: None,
            children: vec![NodeId::TOP_SPAN],
            style: Arc::clone(&style),
            text: None,
        };
        let span = Node {
            kind: NodeKind::Span,
            parent: Some(NodeId::ROOT),
            children: Vec::new(),
            style,
            text: None,
        };
        Self {
            nodes: vec![root, span],
        }
    }

    fn append(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Appends a span styled `style` as the last child of `parent`.
    pub(crate) fn push_span(&mut self, parent: NodeId, style: ComputedStyle) -> NodeId {
        self.append(
            parent,
            Node {
                kind: NodeKind::Span,
                parent: Some(parent),
                children: Vec::new(),
                style: Arc::new(style),
                text: None,
            },
        )
    }

    /// Appends a text run sharing `parent`'s style as the last child of `parent`.
    pub(crate) fn push_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let style = Arc::clone(&self.nodes[parent.0].style);
        self.append(
            parent,
            Node {
                kind: NodeKind::TextRun,
                parent: Some(parent),
                children: Vec::new(),
                style,
                text: Some(text.into()),
            },
        )
    }

    /// Replaces the root's style. Descendants keep the styles they were resolved against.
    pub(crate) fn set_root_style(&mut self, style: ComputedStyle) {
        self.nodes[NodeId::ROOT.0].style = Arc::new(style);
    }

    pub(crate) fn style_of(&self, id: NodeId) -> &ComputedStyle {
        &self.nodes[id.0].style
    }

    pub(crate) fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// The root node.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            id: NodeId::ROOT,
        }
    }

    /// The node at `id`, if it belongs to this tree.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { tree: self, id })
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every node in document order, starting at the root.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![NodeId::ROOT],
        }
    }

    /// Text runs in document order.
    pub fn text_runs(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.descendants().filter(|node| node.kind() == NodeKind::TextRun)
    }

    /// The concatenated text of every run.
    pub fn text(&self) -> String {
        self.text_runs().filter_map(|node| node.text()).collect()
    }
}

/// A borrowed view of one node.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a Paragraph,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    fn node(&self) -> &'a Node {
        &self.tree.nodes[self.id.0]
    }

    /// Id of the node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Kind of the node.
    pub fn kind(&self) -> NodeKind {
        self.node().kind
    }

    /// Resolved style of the node.
    pub fn style(&self) -> &'a ComputedStyle {
        &self.node().style
    }

    /// Whether both nodes point at the same style allocation.
    ///
    /// Text runs share the style of the span they were added to.
    pub fn shares_style_with(&self, other: &NodeRef<'_>) -> bool {
        Arc::ptr_eq(&self.node().style, &other.node().style)
    }

    /// The parent node; `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node().parent.map(|id| NodeRef {
            tree: self.tree,
            id,
        })
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = NodeRef<'a>> + 'a {
        let tree = self.tree;
        self.node()
            .children
            .iter()
            .map(move |&id| NodeRef { tree, id })
    }

    /// Text of a text run; `None` for other nodes.
    pub fn text(&self) -> Option<&'a str> {
        self.node().text.as_deref()
    }

    /// Number of ancestors; zero for the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.node().parent;
        while let Some(id) = current {
            depth += 1;
            current = self.tree.nodes[id.0].parent;
        }
        depth
    }
}

impl core::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("text", &self.text())
            .finish_non_exhaustive()
    }
}

/// Preorder iterator over the nodes of a [`Paragraph`].
#[derive(Clone, Debug)]
pub struct Descendants<'a> {
    tree: &'a Paragraph,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let children = &self.tree.nodes[id.0].children;
        self.stack.extend(children.iter().rev().copied());
        Some(NodeRef {
            tree: self.tree,
            id,
        })
    }
}
