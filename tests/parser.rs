//! Integration tests for parsing definition text

use bf::bf::{parse_definition, Definition, GrammarError, Position, RefType, Reference};
use rstest::rstest;

fn references(definition: &Definition, name: &str, alternative: usize) -> Vec<Reference> {
    definition.statement(name).unwrap().contents()[alternative]
        .references()
        .to_vec()
}

#[test]
fn test_zero_or_more_with_leaf() {
    let definition = parse_definition("a: b*; b;", "<test>").unwrap();
    assert_eq!(
        references(&definition, "a", 0),
        vec![Reference::new("b", RefType::ZeroOrMore)]
    );
    let b = definition.statement("b").unwrap();
    assert!(b.is_leaf());
    assert_eq!(b.alternative_count(), 0);
}

#[test]
fn test_undefined_reference_names_occurrence() {
    let err = parse_definition("a: b*;", "<unknown>").unwrap_err();
    assert!(matches!(err, GrammarError::UndefinedReference { .. }));
    assert_eq!(err.name(), Some("b"));
    assert_eq!(err.position(), Some(Position::new(1, 4)));
    assert_eq!(err.to_string(), "Undefined reference 'b' at <unknown>:1:4");
}

#[test]
fn test_undefined_reference_on_later_line() {
    let source = "prog: decl+;\ndecl: name type?;\nname;\n";
    let err = parse_definition(source, "lang.bf").unwrap_err();
    assert_eq!(err.name(), Some("type"));
    assert_eq!(err.position(), Some(Position::new(2, 12)));
}

#[test]
fn test_duplicate_statement() {
    let err = parse_definition("a: b;\nb;\nb;", "<test>").unwrap_err();
    assert!(matches!(err, GrammarError::DuplicateStatement { .. }));
    assert_eq!(err.name(), Some("b"));
    assert_eq!(err.position(), Some(Position::new(3, 1)));
}

#[rstest]
#[case("a: ;")]
#[case("a: b")]
#[case(": b;")]
#[case("a: b | ;")]
#[case("a b;")]
#[case("a: b?? ;")]
#[case("a: b; $")]
fn test_malformed_input_is_rejected(#[case] source: &str) {
    let err = parse_definition(source, "<test>").unwrap_err();
    assert!(
        matches!(err, GrammarError::Malformed { .. }),
        "expected malformed error for {:?}, got {:?}",
        source,
        err
    );
    assert!(err.location().is_some());
}

#[rstest]
#[case("", 0)]
#[case("a;", 1)]
#[case("a: b; b;", 2)]
#[case("a: b | c d+; b; c; d;", 4)]
#[case("// leading comment\na: a? ; // trailing\n", 1)]
fn test_statement_counts(#[case] source: &str, #[case] count: usize) {
    assert_eq!(parse_definition(source, "<test>").unwrap().len(), count);
}

#[test]
fn test_identifiers_are_case_sensitive() {
    let definition = parse_definition("A: a; a;", "<test>").unwrap();
    assert!(definition.contains("A"));
    assert!(definition.contains("a"));
    assert!(parse_definition("A: a;", "<test>").is_err());
}

#[test]
fn test_alternatives_keep_order() {
    let definition = parse_definition("expr: num | expr op expr; num; op;", "<test>").unwrap();
    let expr = definition.statement("expr").unwrap();
    assert_eq!(expr.alternative_count(), 2);
    assert_eq!(
        references(&definition, "expr", 1),
        vec![
            Reference::new("expr", RefType::NonNull),
            Reference::new("op", RefType::NonNull),
            Reference::new("expr", RefType::NonNull),
        ]
    );
}

#[test]
fn test_explicit_non_null_equals_untagged() {
    let tagged = parse_definition("a: b! c!; b; c;", "<test>").unwrap();
    let untagged = parse_definition("a: b c; b; c;", "<test>").unwrap();
    assert_eq!(tagged, untagged);
}

#[test]
fn test_display_round_trip() {
    let source = "class: declName memberDecl*;\nmemberDecl: declName param* | declName;\nparam: declName declName?;\ndeclName;\n";
    let definition: Definition = source.parse().unwrap();
    let reparsed: Definition = definition.to_string().parse().unwrap();
    assert_eq!(reparsed, definition);
}

#[test]
fn test_yaml_round_trip() {
    let definition: Definition = "a: b+ | c?; b; c;".parse().unwrap();
    let yaml = serde_yaml::to_string(&definition).unwrap();
    let restored: Definition = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(restored, definition);
}

#[test]
fn test_context_index_from_text() {
    let definition: Definition = "class: field* method*; field: name; method: name param*; param: name; name;"
        .parse()
        .unwrap();
    let parents: Vec<_> = definition.contexts().parent_names("name").collect();
    assert_eq!(parents, vec!["field", "method", "param"]);
    let roots: Vec<_> = definition.roots().map(|s| s.name()).collect();
    assert_eq!(roots, vec!["class"]);
}
