//! Token definitions for the definition language
//!
//! The tokens are defined using the logos derive macro. Whitespace and `//` line
//! comments never reach the parser.
use logos::Logos;
use std::fmt;

use crate::bf::definition::RefType;

/// All tokens of the definition language
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"([ \t\r\n\f]+|//[^\n]*)")]
pub enum Token {
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("|")]
    Pipe,

    // Multiplicity tags
    #[token("!")]
    Bang,
    #[token("?")]
    Question,
    #[token("+")]
    Plus,
    #[token("*")]
    Star,
}

impl Token {
    /// The multiplicity this token tags a reference with, if it is a tag
    pub fn ref_type(&self) -> Option<RefType> {
        match self {
            Token::Bang => Some(RefType::NonNull),
            Token::Question => Some(RefType::Nullable),
            Token::Plus => Some(RefType::OneOrMore),
            Token::Star => Some(RefType::ZeroOrMore),
            _ => None,
        }
    }

    /// Source text of the token
    pub fn text(&self) -> &str {
        match self {
            Token::Identifier(name) => name,
            Token::Colon => ":",
            Token::Semicolon => ";",
            Token::Pipe => "|",
            Token::Bang => "!",
            Token::Question => "?",
            Token::Plus => "+",
            Token::Star => "*",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "identifier '{}'", name),
            other => write!(f, "'{}'", other.text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        Token::lexer(source).map(|result| result.unwrap()).collect()
    }

    #[test]
    fn test_statement_tokens() {
        assert_eq!(
            lex_all("a: b* | c;"),
            vec![
                Token::Identifier("a".into()),
                Token::Colon,
                Token::Identifier("b".into()),
                Token::Star,
                Token::Pipe,
                Token::Identifier("c".into()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_tags() {
        assert_eq!(
            lex_all("!?+*"),
            vec![Token::Bang, Token::Question, Token::Plus, Token::Star]
        );
    }

    #[test]
    fn test_identifiers_with_underscores_and_digits() {
        assert_eq!(
            lex_all("_topDecl typeParam2"),
            vec![
                Token::Identifier("_topDecl".into()),
                Token::Identifier("typeParam2".into()),
            ]
        );
    }

    #[test]
    fn test_comments_and_whitespace_are_skipped() {
        let source = "// declaration\nprog: topDecl+; // trailing\n\tlang;\r\n";
        assert_eq!(
            lex_all(source),
            vec![
                Token::Identifier("prog".into()),
                Token::Colon,
                Token::Identifier("topDecl".into()),
                Token::Plus,
                Token::Semicolon,
                Token::Identifier("lang".into()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_unknown_character_is_an_error() {
        let mut lexer = Token::lexer("a # b");
        assert_eq!(lexer.next(), Some(Ok(Token::Identifier("a".into()))));
        assert_eq!(lexer.next(), Some(Err(())));
    }

    #[test]
    fn test_ref_type_of_tags() {
        assert_eq!(Token::Star.ref_type(), Some(RefType::ZeroOrMore));
        assert_eq!(Token::Colon.ref_type(), None);
    }
}
