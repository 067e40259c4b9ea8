//! Raw statement list produced by the front end
//!
//! Nothing here is validated: names may be undefined or declared twice.

use crate::bf::definition::{RefType, Reference};
use crate::bf::location::Position;

/// A statement declaration as written: `name;` or `name: alt | alt;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStatement {
    pub name: String,
    pub position: Position,
    /// `None` for a bare `name;` declaration
    pub contents: Option<Vec<RawContent>>,
}

/// One alternative as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawContent {
    pub references: Vec<RawReference>,
}

/// A reference token with its optional multiplicity tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReference {
    pub name: String,
    pub tag: Option<RefType>,
    pub position: Position,
}

impl RawReference {
    /// The reference this token denotes; no tag means [`RefType::NonNull`]
    pub fn to_reference(&self) -> Reference {
        Reference::new(self.name.clone(), self.tag.unwrap_or_default())
    }
}
