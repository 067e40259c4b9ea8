//! Error types for parsing definitions and generating graphs
//!
//! Parse-time problems are [`GrammarError`]s: the caller fixes the definition text and
//! tries again. Generation-time problems are [`GenerationError`]s and abort the whole run;
//! no partial graph is returned.

use std::fmt;

use crate::bf::definition::RefType;
use crate::bf::location::{Location, Position};
use crate::bf::tree::NodeId;

/// Errors that can occur while turning definition text into a Definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// The text does not follow the definition grammar
    Malformed {
        /// Text of the offending token, `None` at end of input
        found: Option<String>,
        message: String,
        location: Option<Location>,
    },
    /// A statement name is declared more than once
    DuplicateStatement {
        name: String,
        location: Option<Location>,
    },
    /// A reference names a statement that is never declared
    UndefinedReference {
        name: String,
        location: Option<Location>,
    },
}

impl GrammarError {
    /// The offending name or token text
    pub fn name(&self) -> Option<&str> {
        match self {
            GrammarError::Malformed { found, .. } => found.as_deref(),
            GrammarError::DuplicateStatement { name, .. }
            | GrammarError::UndefinedReference { name, .. } => Some(name),
        }
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            GrammarError::Malformed { location, .. }
            | GrammarError::DuplicateStatement { location, .. }
            | GrammarError::UndefinedReference { location, .. } => location.as_ref(),
        }
    }

    pub fn position(&self) -> Option<Position> {
        self.location().map(|location| location.position)
    }
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::Malformed { message, .. } => write!(f, "Malformed definition: {}", message)?,
            GrammarError::DuplicateStatement { name, .. } => {
                write!(f, "Duplicate statement '{}'", name)?
            }
            GrammarError::UndefinedReference { name, .. } => {
                write!(f, "Undefined reference '{}'", name)?
            }
        }
        if let Some(location) = self.location() {
            write!(f, " at {}", location)?;
        }
        Ok(())
    }
}

impl std::error::Error for GrammarError {}

/// A decision returned by a strategy that the generator cannot honor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// `choose_index` returned an index outside `[0, count)`
    IndexOutOfRange {
        statement: String,
        index: usize,
        count: usize,
    },
    /// `choose_size` returned a size the slot's multiplicity does not admit
    SizeOutOfRange {
        reference: String,
        ref_type: RefType,
        size: usize,
    },
    /// `choose_reference` returned a node of a different statement
    AliasNameMismatch {
        expected: String,
        found: String,
        target: NodeId,
    },
    /// `choose_reference` returned a node that is not a finished node of this run
    UnknownAliasTarget { reference: String, target: NodeId },
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::IndexOutOfRange {
                statement,
                index,
                count,
            } => write!(
                f,
                "alternative index {} out of range for '{}' ({} alternatives)",
                index, statement, count
            ),
            ContractViolation::SizeOutOfRange {
                reference,
                ref_type,
                size,
            } => write!(
                f,
                "size {} not admitted by slot '{}{}'",
                size,
                reference,
                ref_type.tag()
            ),
            ContractViolation::AliasNameMismatch {
                expected,
                found,
                target,
            } => write!(
                f,
                "alias {} is a '{}' node but the slot expects '{}'",
                target, found, expected
            ),
            ContractViolation::UnknownAliasTarget { reference, target } => write!(
                f,
                "alias {} for slot '{}' is not a generated node of this run",
                target, reference
            ),
        }
    }
}

/// Errors that abort a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    UnknownStatement(String),
    ContractViolation(ContractViolation),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::UnknownStatement(name) => write!(f, "No statement named: {}", name),
            GenerationError::ContractViolation(violation) => {
                write!(f, "Strategy contract violation: {}", violation)
            }
        }
    }
}

impl std::error::Error for GenerationError {}

impl From<ContractViolation> for GenerationError {
    fn from(violation: ContractViolation) -> Self {
        GenerationError::ContractViolation(violation)
    }
}
