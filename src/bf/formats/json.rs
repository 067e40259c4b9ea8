//! JSON formatter for node graphs
//!
//! The graph is written as nested `{"id", "name", "children"}` objects starting at
//! the root. Alias children are written as `{"id", "name", "alias"}` where `alias` is
//! the id of the node they stand for, so the output stays a finite tree.

use serde_json::{json, Value};

use super::registry::{FormatError, Formatter};
use crate::bf::tree::{NodeGraph, NodeRef};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, graph: &NodeGraph) -> Result<String, FormatError> {
        to_json_string(graph)
    }

    fn description(&self) -> &str {
        "Nested JSON objects"
    }
}

pub fn to_json_string(graph: &NodeGraph) -> Result<String, FormatError> {
    let root = graph
        .root()
        .ok_or_else(|| FormatError::SerializationError("graph has no root".to_string()))?;
    serde_json::to_string_pretty(&to_value(root))
        .map_err(|err| FormatError::SerializationError(err.to_string()))
}

fn to_value(node: NodeRef<'_>) -> Value {
    match node.alias_target() {
        Some(target) => json!({
            "id": node.id().index(),
            "name": node.name(),
            "alias": target.id().index(),
        }),
        None => json!({
            "id": node.id().index(),
            "name": node.name(),
            "children": node.children().map(to_value).collect::<Vec<_>>(),
        }),
    }
}
