//! The validated rule set
//!
//! A Definition is never observably incomplete: every constructor, including
//! deserialization, checks that statement names are unique and that every reference
//! resolves to a declared statement.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use super::ref_type::RefType;
use super::reference::ReferenceList;
use super::statement::Statement;
use crate::bf::error::GrammarError;
use crate::bf::lexing::is_identifier;
use crate::bf::location::DEFAULT_SOURCE_NAME;

/// Reverse-reference index of a definition.
///
/// Maps a referenced statement name to the statements that reference it, together
/// with the multiplicities used at those sites. Strategies use it to behave
/// differently depending on where a statement can appear.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContextIndex {
    entries: BTreeMap<String, BTreeMap<String, BTreeSet<RefType>>>,
}

impl ContextIndex {
    fn collect(statements: &BTreeMap<String, Statement>) -> Self {
        let mut entries: BTreeMap<String, BTreeMap<String, BTreeSet<RefType>>> = BTreeMap::new();
        for (name, statement) in statements {
            for reference in statement.references() {
                entries
                    .entry(reference.name().to_string())
                    .or_default()
                    .entry(name.clone())
                    .or_default()
                    .insert(reference.ref_type());
            }
        }
        Self { entries }
    }

    /// Referencing statements of `name`, with the multiplicities they use
    pub fn contexts(&self, name: &str) -> Option<&BTreeMap<String, BTreeSet<RefType>>> {
        self.entries.get(name)
    }

    /// Names of the statements that reference `name`
    pub fn parent_names<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .get(name)
            .into_iter()
            .flat_map(|parents| parents.keys().map(String::as_str))
    }

    pub fn is_referenced(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, BTreeSet<RefType>>)> {
        self.entries.iter().map(|(name, parents)| (name.as_str(), parents))
    }
}

/// The full rule set plus its derived context index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DefinitionData", into = "DefinitionData")]
pub struct Definition {
    statements: BTreeMap<String, Statement>,
    contexts: ContextIndex,
}

/// Persisted shape of a definition: its statements in name order
#[derive(Serialize, Deserialize)]
struct DefinitionData {
    statements: Vec<Statement>,
}

impl Definition {
    /// Build a definition from statements, validating names and references.
    ///
    /// Statements that could not be written as definition text are rejected as
    /// malformed: names that are not identifiers and empty alternatives.
    /// Errors carry no location; use the parser for positioned diagnostics.
    pub fn new(statements: impl IntoIterator<Item = Statement>) -> Result<Self, GrammarError> {
        let mut map = BTreeMap::new();
        for statement in statements {
            check_expressible(&statement)?;
            if map.contains_key(statement.name()) {
                return Err(GrammarError::DuplicateStatement {
                    name: statement.name().to_string(),
                    location: None,
                });
            }
            map.insert(statement.name().to_string(), statement);
        }
        for statement in map.values() {
            if let Some(reference) = statement
                .references()
                .find(|reference| !map.contains_key(reference.name()))
            {
                return Err(GrammarError::UndefinedReference {
                    name: reference.name().to_string(),
                    location: None,
                });
            }
        }
        Ok(Self::from_validated(map))
    }

    /// Caller guarantees unique names and resolvable references
    pub(crate) fn from_validated(statements: BTreeMap<String, Statement>) -> Self {
        let contexts = ContextIndex::collect(&statements);
        Self {
            statements,
            contexts,
        }
    }

    pub fn statement(&self, name: &str) -> Option<&Statement> {
        self.statements.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.statements.contains_key(name)
    }

    pub fn statements_map(&self) -> &BTreeMap<String, Statement> {
        &self.statements
    }

    /// All statements, ordered by name
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.statements.values()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn contexts(&self) -> &ContextIndex {
        &self.contexts
    }

    /// Statements no statement references, ordered by name
    pub fn roots(&self) -> impl Iterator<Item = &Statement> {
        self.statements
            .values()
            .filter(|statement| !self.contexts.is_referenced(statement.name()))
    }
}

fn check_expressible(statement: &Statement) -> Result<(), GrammarError> {
    let malformed = |found: &str, message: String| GrammarError::Malformed {
        found: Some(found.to_string()),
        message,
        location: None,
    };

    if !is_identifier(statement.name()) {
        return Err(malformed(
            statement.name(),
            format!("statement name '{}' is not an identifier", statement.name()),
        ));
    }
    if statement.contents().iter().any(ReferenceList::is_empty) {
        return Err(malformed(
            statement.name(),
            format!("statement '{}' has an empty alternative", statement.name()),
        ));
    }
    match statement
        .references()
        .find(|reference| !is_identifier(reference.name()))
    {
        Some(reference) => Err(malformed(
            reference.name(),
            format!("reference name '{}' is not an identifier", reference.name()),
        )),
        None => Ok(()),
    }
}

impl TryFrom<DefinitionData> for Definition {
    type Error = GrammarError;

    fn try_from(data: DefinitionData) -> Result<Self, Self::Error> {
        Definition::new(data.statements)
    }
}

impl From<Definition> for DefinitionData {
    fn from(definition: Definition) -> Self {
        DefinitionData {
            statements: definition.statements.into_values().collect(),
        }
    }
}

impl FromStr for Definition {
    type Err = GrammarError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        crate::bf::parsing::parse_definition(source, DEFAULT_SOURCE_NAME)
    }
}

impl fmt::Display for Definition {
    /// Renders definition text, one statement per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in self.statements.values() {
            writeln!(f, "{}", statement)?;
        }
        Ok(())
    }
}
