//! The decision contract between the generator and its caller

use super::cache::GeneratedNodes;
use crate::bf::definition::{Reference, Statement};
use crate::bf::tree::{NodeId, NodeRef};

/// Policy answering the generator's decisions.
///
/// Answers are authoritative. The generator only range-checks them and aborts the
/// run with a contract violation when an answer cannot be honored.
pub trait GenerateStrategy {
    /// Whether this occurrence of `statement` is generated as a leaf.
    ///
    /// Only asked for statements that have alternatives. A statement declared as
    /// `name;` becomes a leaf without this call, so strategies must not count on
    /// seeing one call per generated node. `context` is the node being expanded
    /// as parent, `None` at the root. This is the termination hook for
    /// self-referential definitions.
    fn choose_leaf(&mut self, statement: &Statement, context: Option<NodeRef<'_>>) -> bool;

    /// An earlier node to reuse as an alias child, or `None` to generate a fresh one.
    ///
    /// `context` is the node under construction. A returned node must come from
    /// `generated` under `reference.name()`.
    fn choose_reference(
        &mut self,
        reference: &Reference,
        context: NodeRef<'_>,
        generated: &GeneratedNodes,
    ) -> Option<NodeId>;

    /// Which alternative to expand. Only asked when there are at least two.
    fn choose_index(&mut self, statement: &Statement, context: Option<NodeRef<'_>>) -> usize;

    /// How many children a `?`, `+` or `*` slot gets. Asked once per slot occurrence.
    fn choose_size(&mut self, reference: &Reference, context: NodeRef<'_>) -> usize;
}

impl<S: GenerateStrategy + ?Sized> GenerateStrategy for &mut S {
    fn choose_leaf(&mut self, statement: &Statement, context: Option<NodeRef<'_>>) -> bool {
        (**self).choose_leaf(statement, context)
    }

    fn choose_reference(
        &mut self,
        reference: &Reference,
        context: NodeRef<'_>,
        generated: &GeneratedNodes,
    ) -> Option<NodeId> {
        (**self).choose_reference(reference, context, generated)
    }

    fn choose_index(&mut self, statement: &Statement, context: Option<NodeRef<'_>>) -> usize {
        (**self).choose_index(statement, context)
    }

    fn choose_size(&mut self, reference: &Reference, context: NodeRef<'_>) -> usize {
        (**self).choose_size(reference, context)
    }
}

impl<S: GenerateStrategy + ?Sized> GenerateStrategy for Box<S> {
    fn choose_leaf(&mut self, statement: &Statement, context: Option<NodeRef<'_>>) -> bool {
        (**self).choose_leaf(statement, context)
    }

    fn choose_reference(
        &mut self,
        reference: &Reference,
        context: NodeRef<'_>,
        generated: &GeneratedNodes,
    ) -> Option<NodeId> {
        (**self).choose_reference(reference, context, generated)
    }

    fn choose_index(&mut self, statement: &Statement, context: Option<NodeRef<'_>>) -> usize {
        (**self).choose_index(statement, context)
    }

    fn choose_size(&mut self, reference: &Reference, context: NodeRef<'_>) -> usize {
        (**self).choose_size(reference, context)
    }
}
