//! Generation of node graphs from a definition
//!
//! The [`Generator`] walks a [`Definition`](crate::bf::definition::Definition) depth-first
//! and asks an injected [`GenerateStrategy`] four questions along the way: leaf or not,
//! which alternative, how many repeats, and whether to reuse an earlier node.
//!
//! ## Modules
//!
//! - `strategy` - the decision contract
//! - `cache` - nodes generated so far in a run, the input to alias decisions
//! - `generator` - the recursive engine
//! - `random` - a seedable default strategy

pub mod cache;
pub mod generator;
pub mod random;
pub mod strategy;

pub use cache::GeneratedNodes;
pub use generator::Generator;
pub use random::RandomStrategy;
pub use strategy::GenerateStrategy;
