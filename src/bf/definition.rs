//! The semantic model of a definition
//!
//! A [`Definition`] maps statement names to [`Statement`]s. Each statement holds zero or
//! more alternatives ([`ReferenceList`]s), and each alternative is an ordered list of
//! [`Reference`]s tagged with a [`RefType`] multiplicity.
//!
//! ## Modules
//!
//! - `ref_type` - the four multiplicity kinds and their one-character tags
//! - `reference` - a typed link to a statement, and the alternative lists built from them
//! - `statement` - one named production rule
//! - `definition` - the validated rule set and its context index

#[allow(clippy::module_inception)]
pub mod definition;
pub mod ref_type;
pub mod reference;
pub mod statement;

pub use definition::{ContextIndex, Definition};
pub use ref_type::RefType;
pub use reference::{Reference, ReferenceList};
pub use statement::Statement;
