//! Parser combinators for the definition grammar
//!
//! ```text
//! definition  ::= statement*
//! statement   ::= identifier ':' contentList ';'  |  identifier ';'
//! contentList ::= content ('|' content)*
//! content     ::= ref+
//! ref         ::= identifier refType?
//! refType     ::= '!' | '?' | '+' | '*'
//! ```

use chumsky::prelude::*;
use std::ops::Range;
use std::sync::Arc;

use super::raw::{RawContent, RawReference, RawStatement};
use crate::bf::definition::RefType;
use crate::bf::lexing::{Token, TokenSpan};
use crate::bf::location::{Position, SourceLocation};

/// Type alias for parser error
pub type ParserError = Simple<TokenSpan>;

/// Helper: match a specific token type, ignoring the span
pub(crate) fn token(t: Token) -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenSpan| tok == &t).ignored()
}

/// An identifier with the position it starts at
pub(crate) fn identifier(
    source: Arc<SourceLocation>,
) -> impl Parser<TokenSpan, (String, Position), Error = ParserError> + Clone {
    filter_map(move |span: Range<usize>, (tok, range): TokenSpan| match tok {
        Token::Identifier(name) => Ok((name, source.byte_to_position(range.start))),
        other => Err(Simple::expected_input_found(
            span,
            Vec::new(),
            Some((other, range)),
        )),
    })
}

/// A multiplicity tag
pub(crate) fn ref_type() -> impl Parser<TokenSpan, RefType, Error = ParserError> + Clone {
    filter_map(
        |span: Range<usize>, (tok, range): TokenSpan| match tok.ref_type() {
            Some(ref_type) => Ok(ref_type),
            None => Err(Simple::expected_input_found(
                span,
                Vec::new(),
                Some((tok, range)),
            )),
        },
    )
}

/// `identifier refType?`
pub(crate) fn reference(
    source: Arc<SourceLocation>,
) -> impl Parser<TokenSpan, RawReference, Error = ParserError> + Clone {
    identifier(source)
        .then(ref_type().or_not())
        .map(|((name, position), tag)| RawReference {
            name,
            tag,
            position,
        })
}

/// `ref+`
pub(crate) fn content(
    source: Arc<SourceLocation>,
) -> impl Parser<TokenSpan, RawContent, Error = ParserError> + Clone {
    reference(source)
        .repeated()
        .at_least(1)
        .map(|references| RawContent { references })
}

/// `identifier (':' content ('|' content)*)? ';'`
pub(crate) fn statement(
    source: Arc<SourceLocation>,
) -> impl Parser<TokenSpan, RawStatement, Error = ParserError> + Clone {
    let content_list = content(source.clone())
        .separated_by(token(Token::Pipe))
        .at_least(1);

    identifier(source)
        .then(token(Token::Colon).ignore_then(content_list).or_not())
        .then_ignore(token(Token::Semicolon))
        .map(|((name, position), contents)| RawStatement {
            name,
            position,
            contents,
        })
}

/// The whole definition text
pub fn definition(
    source: Arc<SourceLocation>,
) -> impl Parser<TokenSpan, Vec<RawStatement>, Error = ParserError> + Clone {
    statement(source).repeated().then_ignore(end())
}
