//! Treeviz formatter for node graphs
//!
//! One line per node, nesting drawn with box-drawing connectors. Every node is
//! labelled with its name and id; alias children point at their target instead:
//!
//! ```text
//! prog #0
//! ├─ decl #1
//! │  └─ name #2
//! └─ decl -> #1
//! ```

use super::registry::{FormatError, Formatter};
use crate::bf::tree::{NodeGraph, NodeRef};

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, graph: &NodeGraph) -> Result<String, FormatError> {
        Ok(to_treeviz_str(graph))
    }

    fn description(&self) -> &str {
        "Tree with one line per node"
    }
}

/// Render a graph from its root; an empty graph renders as an empty string
pub fn to_treeviz_str(graph: &NodeGraph) -> String {
    let mut result = String::new();
    if let Some(root) = graph.root() {
        result.push_str(&label(root));
        result.push('\n');
        append_children(&mut result, root, "");
    }
    result
}

fn label(node: NodeRef<'_>) -> String {
    match node.alias_target() {
        Some(target) => format!("{} -> {}", node.name(), target.id()),
        None => format!("{} {}", node.name(), node.id()),
    }
}

fn append_children(result: &mut String, node: NodeRef<'_>, prefix: &str) {
    let count = node.child_count();
    for (i, child) in node.children().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "└─" } else { "├─" };
        result.push_str(&format!("{}{} {}\n", prefix, connector, label(child)));

        let new_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
        append_children(result, child, &new_prefix);
    }
}
