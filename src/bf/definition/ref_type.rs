//! Multiplicity of a reference slot

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many instances a reference slot expands to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefType {
    /// `!`, exactly one. Also the multiplicity of an untagged reference.
    #[default]
    NonNull,
    /// `?`, zero or one
    Nullable,
    /// `+`, at least one
    OneOrMore,
    /// `*`, any number
    ZeroOrMore,
}

impl RefType {
    pub const ALL: [RefType; 4] = [
        RefType::NonNull,
        RefType::Nullable,
        RefType::OneOrMore,
        RefType::ZeroOrMore,
    ];

    /// The one-character textual tag
    pub fn tag(self) -> char {
        match self {
            RefType::NonNull => '!',
            RefType::Nullable => '?',
            RefType::OneOrMore => '+',
            RefType::ZeroOrMore => '*',
        }
    }

    pub fn from_tag(tag: char) -> Option<RefType> {
        RefType::ALL.into_iter().find(|ref_type| ref_type.tag() == tag)
    }

    /// True for repeated slots (`+` and `*`)
    pub fn can_be_multi(self) -> bool {
        matches!(self, RefType::OneOrMore | RefType::ZeroOrMore)
    }

    pub fn min_size(self) -> usize {
        match self {
            RefType::NonNull | RefType::OneOrMore => 1,
            RefType::Nullable | RefType::ZeroOrMore => 0,
        }
    }

    /// Upper bound on the slot size, `None` when unbounded
    pub fn max_size(self) -> Option<usize> {
        match self {
            RefType::NonNull | RefType::Nullable => Some(1),
            RefType::OneOrMore | RefType::ZeroOrMore => None,
        }
    }

    /// Whether a slot of this multiplicity may hold `size` children
    pub fn admits(self, size: usize) -> bool {
        size >= self.min_size() && self.max_size().map_or(true, |max| size <= max)
    }
}

impl fmt::Display for RefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
