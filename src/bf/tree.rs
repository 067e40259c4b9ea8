//! Generated output: an arena of nodes plus alias edges
//!
//! Every node of one generation run lives in a single [`NodeGraph`], addressed by
//! [`NodeId`]. Children are owned by exactly one parent; `parent` and `alias` are
//! plain indices, so the structure is a tree of owned nodes plus non-owning alias
//! edges (a DAG).

pub mod graph;
pub mod node;

pub use graph::{NodeGraph, NodeRef};
pub use node::{Node, NodeId};
