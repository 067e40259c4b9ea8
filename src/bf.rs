//! Main module for bf library functionality

pub mod config;
pub mod definition;
pub mod error;
pub mod formats;
pub mod generation;
pub mod lexing;
pub mod location;
pub mod parsing;
pub mod tree;

pub use definition::{ContextIndex, Definition, RefType, Reference, ReferenceList, Statement};
pub use error::{ContractViolation, GenerationError, GrammarError};
pub use generation::{GenerateStrategy, GeneratedNodes, Generator, RandomStrategy};
pub use location::{Location, Position};
pub use parsing::parse_definition;
pub use tree::{Node, NodeGraph, NodeId, NodeRef};
