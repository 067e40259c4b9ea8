//! Lexer for the definition language
//!
//! Raw tokenization using the logos lexer. Source strings become token streams
//! paired with their byte ranges, which the parser maps back to positions.

pub mod tokens;

pub use tokens::Token;

use logos::Logos;
use std::ops::Range;

use crate::bf::error::GrammarError;
use crate::bf::location::{Location, SourceLocation};

/// Token paired with the byte range it was lexed from
pub type TokenSpan = (Token, Range<usize>);

/// Tokenize definition text.
///
/// The first character that starts no token is reported as a malformed definition.
pub fn tokenize(source: &str, source_name: &str) -> Result<Vec<TokenSpan>, GrammarError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let span = lexer.span();
                let position = SourceLocation::new(source).byte_to_position(span.start);
                return Err(GrammarError::Malformed {
                    found: Some(lexer.slice().to_string()),
                    message: format!("unexpected character '{}'", lexer.slice()),
                    location: Some(Location::new(source_name, position)),
                });
            }
        }
    }

    Ok(tokens)
}

/// Whether `text` is exactly one identifier token, with nothing around it
pub fn is_identifier(text: &str) -> bool {
    let mut lexer = Token::lexer(text);
    matches!(lexer.next(), Some(Ok(Token::Identifier(_))))
        && lexer.span() == (0..text.len())
        && lexer.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bf::location::Position;

    #[test]
    fn test_tokenizes_with_spans() {
        let tokens = tokenize("a: b*;", "<test>").unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0], (Token::Identifier("a".into()), 0..1));
        assert_eq!(tokens[1], (Token::Colon, 1..2));
        assert_eq!(tokens[2], (Token::Identifier("b".into()), 3..4));
        assert_eq!(tokens[3], (Token::Star, 4..5));
        assert_eq!(tokens[4], (Token::Semicolon, 5..6));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("", "<test>").unwrap(), vec![]);
        assert_eq!(tokenize("  // nothing\n", "<test>").unwrap(), vec![]);
    }

    #[test]
    fn test_reports_unexpected_character() {
        let err = tokenize("a;\nb: a %;", "defs.bf").unwrap_err();
        assert_eq!(err.name(), Some("%"));
        assert_eq!(err.position(), Some(Position::new(2, 6)));
        assert_eq!(
            err.to_string(),
            "Malformed definition: unexpected character '%' at defs.bf:2:6"
        );
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("declName"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("a b*"));
        assert!(!is_identifier(" a"));
        assert!(!is_identifier("a// note"));
        assert!(!is_identifier("1a"));
        assert!(!is_identifier("b*"));
    }
}
