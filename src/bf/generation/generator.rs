//! The recursive generation engine

use log::{debug, trace};

use super::cache::GeneratedNodes;
use super::strategy::GenerateStrategy;
use crate::bf::definition::{Definition, RefType, Reference};
use crate::bf::error::{ContractViolation, GenerationError};
use crate::bf::tree::{NodeGraph, NodeId};

/// Generates node graphs from a definition, one run per [`generate`](Generator::generate) call.
///
/// The definition is borrowed read-only, so several generators may share it.
pub struct Generator<'d, S> {
    definition: &'d Definition,
    strategy: S,
    generated: GeneratedNodes,
}

impl<'d, S: GenerateStrategy> Generator<'d, S> {
    pub fn new(definition: &'d Definition, strategy: S) -> Self {
        Self {
            definition,
            strategy,
            generated: GeneratedNodes::new(),
        }
    }

    pub fn definition(&self) -> &'d Definition {
        self.definition
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn strategy_mut(&mut self) -> &mut S {
        &mut self.strategy
    }

    pub fn into_strategy(self) -> S {
        self.strategy
    }

    /// Nodes recorded by the most recent successful run, empty after a failed one
    pub fn generated(&self) -> &GeneratedNodes {
        &self.generated
    }

    /// Generate a fresh graph rooted at statement `name`.
    ///
    /// Any error aborts the run; no partial graph is returned.
    pub fn generate(&mut self, name: &str) -> Result<NodeGraph, GenerationError> {
        self.generated.clear();
        debug!("generation run started at root '{}'", name);

        let mut run = Run {
            definition: self.definition,
            strategy: &mut self.strategy,
            generated: &mut self.generated,
            graph: NodeGraph::new(),
        };
        let result = run.generate(name, None);
        let graph = run.graph;
        if let Err(err) = result {
            debug!("generation run at root '{}' failed: {}", name, err);
            self.generated.clear();
            return Err(err);
        }

        debug!(
            "generation run at root '{}' finished with {} nodes",
            name,
            graph.len()
        );
        Ok(graph)
    }
}

/// State of one generation run
struct Run<'r, S> {
    definition: &'r Definition,
    strategy: &'r mut S,
    generated: &'r mut GeneratedNodes,
    graph: NodeGraph,
}

impl<S: GenerateStrategy> Run<'_, S> {
    fn generate(&mut self, name: &str, parent: Option<NodeId>) -> Result<NodeId, GenerationError> {
        trace!("generate name: {}, parent: {:?}", name, parent);
        let definition = self.definition;
        let statement = definition
            .statement(name)
            .ok_or_else(|| GenerationError::UnknownStatement(name.to_string()))?;

        let leaf = if statement.is_leaf() {
            true
        } else {
            let context = parent.map(|id| self.graph.node_ref(id));
            self.strategy.choose_leaf(statement, context)
        };
        let node = self.graph.add_node(statement.name(), parent);
        if leaf {
            return Ok(node);
        }

        let content = match statement.alternative_count() {
            1 => &statement.contents()[0],
            count => {
                let context = parent.map(|id| self.graph.node_ref(id));
                let index = self.strategy.choose_index(statement, context);
                statement.contents().get(index).ok_or_else(|| {
                    ContractViolation::IndexOutOfRange {
                        statement: statement.name().to_string(),
                        index,
                        count,
                    }
                })?
            }
        };

        for reference in content {
            match reference.ref_type() {
                RefType::NonNull => self.generate_child(reference, node)?,
                ref_type => {
                    let size = self.choose_size(reference, node)?;
                    trace!("slot {}{} of {} gets {} children", reference.name(), ref_type, node, size);
                    for _ in 0..size {
                        self.generate_child(reference, node)?;
                    }
                }
            }
        }

        self.generated.record(statement.name(), node);
        Ok(node)
    }

    fn choose_size(&mut self, reference: &Reference, node: NodeId) -> Result<usize, GenerationError> {
        let size = self
            .strategy
            .choose_size(reference, self.graph.node_ref(node));
        if !reference.ref_type().admits(size) {
            return Err(ContractViolation::SizeOutOfRange {
                reference: reference.name().to_string(),
                ref_type: reference.ref_type(),
                size,
            }
            .into());
        }
        Ok(size)
    }

    /// Fill one repeat of a slot: either an alias to an earlier node or a fresh subtree
    fn generate_child(&mut self, reference: &Reference, node: NodeId) -> Result<(), GenerationError> {
        let alias = self.strategy.choose_reference(
            reference,
            self.graph.node_ref(node),
            &*self.generated,
        );

        let child = match alias {
            Some(target) => {
                self.check_alias(reference, target)?;
                trace!("reuse {} as alias child of {}", target, node);
                self.graph.add_alias(reference.name(), node, target)
            }
            None => self.generate(reference.name(), Some(node))?,
        };
        self.graph.add_child(node, child);
        Ok(())
    }

    fn check_alias(&self, reference: &Reference, target: NodeId) -> Result<(), ContractViolation> {
        match self.graph.node(target) {
            Some(found) if found.name() != reference.name() => {
                Err(ContractViolation::AliasNameMismatch {
                    expected: reference.name().to_string(),
                    found: found.name().to_string(),
                    target,
                })
            }
            Some(_) if self.generated.contains(reference.name(), target) => Ok(()),
            _ => Err(ContractViolation::UnknownAliasTarget {
                reference: reference.name().to_string(),
                target,
            }),
        }
    }
}
