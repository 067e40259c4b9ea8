//! A single generated node

use serde::Serialize;
use std::fmt;

/// Index of a node inside its [`NodeGraph`](super::NodeGraph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One generated node.
///
/// An alias node stands in for a node generated earlier in the same run: it has
/// `alias` set and never has children of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    name: String,
    children: Vec<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alias: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            parent,
            alias: None,
        }
    }

    pub(crate) fn alias_of(name: impl Into<String>, parent: NodeId, target: NodeId) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            parent: Some(parent),
            alias: Some(target),
        }
    }

    /// Name of the statement this node was generated for
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn alias_target(&self) -> Option<NodeId> {
        self.alias
    }

    pub fn is_alias(&self) -> bool {
        self.alias.is_some()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}
