//! The node arena of one generation run

use serde::Serialize;

use super::node::{Node, NodeId};

/// All nodes produced by one generation run.
///
/// The root is the first node created, so a finished graph always has it at
/// index 0. Graphs are only built by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NodeGraph {
    nodes: Vec<Node>,
}

impl NodeGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_node(&mut self, name: &str, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name, parent));
        id
    }

    pub(crate) fn add_alias(&mut self, name: &str, parent: NodeId, target: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::alias_of(name, parent, target));
        id
    }

    /// Append `child` to the children of `parent`
    pub(crate) fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.push_child(child);
        }
    }

    /// The root node, `None` only while nothing has been generated yet
    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.get(NodeId(0))
    }

    /// View of a node this graph handed out the id for
    pub(crate) fn node_ref(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { graph: self, id }
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { graph: self, id })
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in creation order (depth-first, pre-order)
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> {
        (0..self.nodes.len()).map(move |i| NodeRef {
            graph: self,
            id: NodeId(i),
        })
    }

    /// Non-alias nodes generated for statement `name`, in creation order
    pub fn nodes_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        self.iter()
            .filter(move |node| !node.is_alias() && node.name() == name)
    }
}

/// A borrowed view of one node and the graph it lives in
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    graph: &'a NodeGraph,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    fn data(&self) -> &'a Node {
        &self.graph.nodes[self.id.0]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn graph(&self) -> &'a NodeGraph {
        self.graph
    }

    pub fn name(&self) -> &'a str {
        self.data().name()
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.data().parent().and_then(|id| self.graph.get(id))
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let graph = self.graph;
        self.data()
            .children()
            .iter()
            .filter_map(move |id| graph.get(*id))
    }

    pub fn child_count(&self) -> usize {
        self.data().children().len()
    }

    pub fn alias_target(&self) -> Option<NodeRef<'a>> {
        self.data().alias_target().and_then(|id| self.graph.get(id))
    }

    pub fn is_alias(&self) -> bool {
        self.data().is_alias()
    }

    /// The node this one stands for: the alias target, or itself
    pub fn resolve(&self) -> NodeRef<'a> {
        self.alias_target().unwrap_or(*self)
    }

    /// Strict ancestors, nearest first
    pub fn ancestors(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    /// 1 for the root, parent depth + 1 otherwise
    pub fn depth(&self) -> usize {
        self.ancestors().count() + 1
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}
