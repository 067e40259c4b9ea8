//! Parser module for the definition language
//!
//! Parsing happens in two stages:
//!
//! 1. `grammar` turns the token stream into raw statements (chumsky combinators).
//!    Raw statements keep the position of every name so later diagnostics can
//!    point at the exact token.
//! 2. `parser` registers every raw statement, then validates every reference.
//!    Two passes are needed because references may name statements declared
//!    further down the text.
//!
//! Any other front end can produce [`RawStatement`]s and hand them to
//! [`build_definition`].

pub mod grammar;
#[allow(clippy::module_inception)]
pub mod parser;
pub mod raw;

pub use parser::{build_definition, parse_definition, parse_raw_statements};
pub use raw::{RawContent, RawReference, RawStatement};
