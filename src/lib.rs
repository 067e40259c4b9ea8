//! # bf
//!
//! Grammar-driven generation of structured test inputs.
//!
//! A definition is a small grammar-like text:
//!
//! ```text
//! prog: decl+;
//! decl: class | func;
//! class: name member*;
//! member: func;
//! func: name param*;
//! param: name;
//! name;
//! ```
//!
//! File Layout
//!
//! The crate is laid out as src/bf/<stage>:
//!   ├── lexing       Tokens for the definition language (logos)
//!   ├── parsing      Raw statements (chumsky) and their validation into a Definition
//!   ├── definition   The semantic model: RefType, Reference, Statement, Definition
//!   ├── tree         The generated output: an arena of nodes plus alias edges
//!   ├── generation   The strategy contract, the recursive generator, a random strategy
//!   ├── formats      Serializers for generated graphs
//!   ├── config       Layered configuration for the default strategy
//!   ├── location     Line/column positions for diagnostics
//!   └── error        Parse-time and generation-time errors
//!
//! Parsing happens once per definition. A definition is immutable after it is built and
//! can be shared across any number of generation runs.

#![allow(rustdoc::invalid_html_tags)]

pub mod bf;
