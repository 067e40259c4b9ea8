//! References and the alternative lists built from them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ref_type::RefType;

/// A typed link from one statement's alternative to another statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    name: String,
    #[serde(rename = "type")]
    ref_type: RefType,
}

impl Reference {
    pub fn new(name: impl Into<String>, ref_type: RefType) -> Self {
        Self {
            name: name.into(),
            ref_type,
        }
    }

    /// Name of the referenced statement
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ref_type(&self) -> RefType {
        self.ref_type
    }
}

/// Parses a reference token such as `b`, `b!` or `b*`.
///
/// A missing tag means [`RefType::NonNull`]. No check is made that the name
/// is a valid identifier; that is the tokenizer's job.
impl FromStr for Reference {
    type Err = String;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (name, ref_type) = match token.chars().last().and_then(RefType::from_tag) {
            Some(ref_type) => (&token[..token.len() - 1], ref_type),
            None => (token, RefType::default()),
        };
        if name.is_empty() {
            return Err(format!("reference token '{}' has no name", token));
        }
        Ok(Reference::new(name, ref_type))
    }
}

impl fmt::Display for Reference {
    /// Untagged references print without the implicit `!`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ref_type {
            RefType::NonNull => write!(f, "{}", self.name),
            ref_type => write!(f, "{}{}", self.name, ref_type),
        }
    }
}

/// One right-hand side of a statement. Order is the child-generation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceList(Vec<Reference>);

impl ReferenceList {
    pub fn new(references: Vec<Reference>) -> Self {
        Self(references)
    }

    pub fn references(&self) -> &[Reference] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reference> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Reference>> for ReferenceList {
    fn from(references: Vec<Reference>) -> Self {
        Self(references)
    }
}

impl<'a> IntoIterator for &'a ReferenceList {
    type Item = &'a Reference;
    type IntoIter = std::slice::Iter<'a, Reference>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ReferenceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, reference) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", reference)?;
        }
        Ok(())
    }
}
