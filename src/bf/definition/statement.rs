//! A named production rule

use serde::{Deserialize, Serialize};
use std::fmt;

use super::reference::{Reference, ReferenceList};

/// A statement with zero or more alternatives.
///
/// With no alternatives the statement is an unconditional leaf. With several, the
/// generator asks the strategy which one to expand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    name: String,
    contents: Vec<ReferenceList>,
}

impl Statement {
    pub fn new(name: impl Into<String>, contents: Vec<ReferenceList>) -> Self {
        Self {
            name: name.into(),
            contents,
        }
    }

    /// A statement without alternatives
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contents(&self) -> &[ReferenceList] {
        &self.contents
    }

    pub fn alternative_count(&self) -> usize {
        self.contents.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.contents.is_empty()
    }

    /// Every reference of every alternative, in declaration order
    pub fn references(&self) -> impl Iterator<Item = &Reference> {
        self.contents.iter().flat_map(|alternative| alternative.iter())
    }
}

impl fmt::Display for Statement {
    /// Renders `name: alt | alt;`, or `name;` for a leaf
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for (i, alternative) in self.contents.iter().enumerate() {
            let separator = if i == 0 { ": " } else { " | " };
            write!(f, "{}{}", separator, alternative)?;
        }
        write!(f, ";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bf::definition::RefType;

    fn refs(tokens: &[&str]) -> ReferenceList {
        tokens
            .iter()
            .map(|token| token.parse::<Reference>().unwrap())
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_leaf_statement() {
        let statement = Statement::leaf("declName");
        assert!(statement.is_leaf());
        assert_eq!(statement.alternative_count(), 0);
        assert_eq!(statement.to_string(), "declName;");
    }

    #[test]
    fn test_display_alternatives() {
        let statement = Statement::new(
            "type",
            vec![refs(&["typeParam"]), refs(&["superType", "typeArg*"])],
        );
        assert_eq!(statement.to_string(), "type: typeParam | superType typeArg*;");
    }

    #[test]
    fn test_references_flatten_in_order() {
        let statement = Statement::new("a", vec![refs(&["b", "c?"]), refs(&["d+"])]);
        let names: Vec<_> = statement.references().map(|r| r.name()).collect();
        assert_eq!(names, vec!["b", "c", "d"]);
        assert_eq!(
            statement.references().last().map(|r| r.ref_type()),
            Some(RefType::OneOrMore)
        );
    }
}
