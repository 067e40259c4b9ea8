//! Definition parsing and validation
//!
//! [`parse_definition`] is the primary entry point: definition text in, validated
//! [`Definition`] out.

use chumsky::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::grammar::{self, ParserError};
use super::raw::RawStatement;
use crate::bf::definition::{Definition, Reference, ReferenceList, Statement};
use crate::bf::error::GrammarError;
use crate::bf::lexing::tokenize;
use crate::bf::location::{Location, Position, SourceLocation};

/// Parse definition text into a validated definition.
///
/// `source_name` only labels diagnostics (a file path, `<unknown>`, ...).
pub fn parse_definition(source: &str, source_name: &str) -> Result<Definition, GrammarError> {
    let raw = parse_raw_statements(source, source_name)?;
    build_definition(raw, source_name)
}

/// Parse definition text into raw statements without validating names
pub fn parse_raw_statements(
    source: &str,
    source_name: &str,
) -> Result<Vec<RawStatement>, GrammarError> {
    let tokens = tokenize(source, source_name)?;
    let source_loc = Arc::new(SourceLocation::new(source));
    grammar::definition(source_loc.clone())
        .parse(tokens)
        .map_err(|errors| malformed(errors, &source_loc, source_name))
}

/// Build a definition from raw statements.
///
/// First every statement is registered, then every reference is checked against
/// the registered names in source order. The first violation is reported at the
/// position of the offending token.
pub fn build_definition(
    raw_statements: Vec<RawStatement>,
    source_name: &str,
) -> Result<Definition, GrammarError> {
    let mut statements = BTreeMap::new();
    let mut collected: Vec<(Reference, Position)> = Vec::new();

    for raw in raw_statements {
        if statements.contains_key(&raw.name) {
            return Err(GrammarError::DuplicateStatement {
                name: raw.name,
                location: Some(Location::new(source_name, raw.position)),
            });
        }

        let contents: Vec<ReferenceList> = raw
            .contents
            .unwrap_or_default()
            .into_iter()
            .map(|content| {
                content
                    .references
                    .iter()
                    .map(|raw_ref| {
                        let reference = raw_ref.to_reference();
                        collected.push((reference.clone(), raw_ref.position));
                        reference
                    })
                    .collect::<Vec<_>>()
                    .into()
            })
            .collect();

        statements.insert(raw.name.clone(), Statement::new(raw.name, contents));
    }

    check_references(&statements, &collected, source_name)?;
    Ok(Definition::from_validated(statements))
}

fn check_references(
    statements: &BTreeMap<String, Statement>,
    collected: &[(Reference, Position)],
    source_name: &str,
) -> Result<(), GrammarError> {
    for (reference, position) in collected {
        if !statements.contains_key(reference.name()) {
            return Err(GrammarError::UndefinedReference {
                name: reference.name().to_string(),
                location: Some(Location::new(source_name, *position)),
            });
        }
    }
    Ok(())
}

/// Report the first parser error at the offending token, or at end of input
fn malformed(errors: Vec<ParserError>, source_loc: &SourceLocation, source_name: &str) -> GrammarError {
    let Some(error) = errors.into_iter().next() else {
        return GrammarError::Malformed {
            found: None,
            message: "invalid definition".to_string(),
            location: None,
        };
    };

    let (found, message, position) = match error.found() {
        Some((tok, range)) => (
            Some(tok.text().to_string()),
            format!("unexpected {}", tok),
            source_loc.byte_to_position(range.start),
        ),
        None => (
            None,
            "unexpected end of input".to_string(),
            source_loc.end_position(),
        ),
    };

    GrammarError::Malformed {
        found,
        message,
        location: Some(Location::new(source_name, position)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bf::definition::RefType;

    #[test]
    fn test_parse_simple_definition() {
        let definition = parse_definition("a: b*; b;", "<test>").unwrap();
        assert_eq!(definition.len(), 2);

        let a = definition.statement("a").unwrap();
        assert_eq!(a.alternative_count(), 1);
        assert_eq!(
            a.contents()[0].references(),
            &[Reference::new("b", RefType::ZeroOrMore)]
        );
        assert!(definition.statement("b").unwrap().is_leaf());
    }

    #[test]
    fn test_forward_references_resolve() {
        let definition = parse_definition("prog: decl+;\ndecl: name;\nname;", "<test>").unwrap();
        assert!(definition.contains("decl"));
        assert!(definition.contexts().is_referenced("name"));
    }

    #[test]
    fn test_undefined_reference_position() {
        let err = parse_definition("a: b*;", "<test>").unwrap_err();
        assert_eq!(
            err,
            GrammarError::UndefinedReference {
                name: "b".into(),
                location: Some(Location::new("<test>", Position::new(1, 4))),
            }
        );
    }

    #[test]
    fn test_first_undefined_reference_in_source_order() {
        let err = parse_definition("a: x;\nb: a y;", "<test>").unwrap_err();
        assert_eq!(err.name(), Some("x"));
        assert_eq!(err.position(), Some(Position::new(1, 4)));
    }

    #[test]
    fn test_duplicate_statement_reports_second_declaration() {
        let err = parse_definition("a;\nb: a;\na: b;", "defs.bf").unwrap_err();
        assert!(matches!(err, GrammarError::DuplicateStatement { .. }));
        assert_eq!(err.name(), Some("a"));
        assert_eq!(err.position(), Some(Position::new(3, 1)));
    }

    #[test]
    fn test_malformed_reports_offending_token() {
        let err = parse_definition("a: b;\nc: | d;", "<test>").unwrap_err();
        assert!(matches!(err, GrammarError::Malformed { .. }));
        assert_eq!(err.position().map(|p| p.line), Some(2));
    }

    #[test]
    fn test_malformed_at_end_of_input() {
        let err = parse_definition("a: b", "<test>").unwrap_err();
        assert!(matches!(err, GrammarError::Malformed { .. }));
        assert!(err.location().is_some());
    }
}
