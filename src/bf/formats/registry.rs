//! Format registry for node graph serialization
//!
//! Each format implements the `Formatter` trait and can be registered with `FormatRegistry`.

use crate::bf::tree::NodeGraph;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Serializes a node graph to a string representation
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "treeviz", "json")
    fn name(&self) -> &str;

    fn serialize(&self, graph: &NodeGraph) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of graph formatters, looked up by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a graph using the named format
    pub fn serialize(&self, graph: &NodeGraph, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(graph)
    }

    /// All format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::TreevizFormatter);
        registry.register(super::JsonFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bf::definition::Definition;
    use crate::bf::generation::{Generator, RandomStrategy};

    struct CountFormatter;
    impl Formatter for CountFormatter {
        fn name(&self) -> &str {
            "count"
        }
        fn serialize(&self, graph: &NodeGraph) -> Result<String, FormatError> {
            Ok(graph.len().to_string())
        }
        fn description(&self) -> &str {
            "Number of nodes"
        }
    }

    fn sample_graph() -> NodeGraph {
        let definition: Definition = "a: b c; b; c;".parse().unwrap();
        Generator::new(&definition, RandomStrategy::with_seed(0))
            .generate("a")
            .unwrap()
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(CountFormatter);

        assert!(registry.has("count"));
        assert!(!registry.has("nonexistent"));
        assert_eq!(registry.list_formats(), vec!["count"]);
        assert_eq!(registry.get("count").unwrap().description(), "Number of nodes");
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(CountFormatter);
        assert_eq!(registry.serialize(&sample_graph(), "count").unwrap(), "3");
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::new();
        match registry.serialize(&sample_graph(), "nonexistent") {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "nonexistent"),
            other => panic!("Expected FormatNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["json", "treeviz"]);
    }

    #[test]
    fn test_registry_replace_formatter() {
        let mut registry = FormatRegistry::new();
        registry.register(CountFormatter);
        registry.register(CountFormatter);
        assert_eq!(registry.list_formats().len(), 1);
    }

    #[test]
    fn test_format_error_display() {
        let err1 = FormatError::FormatNotFound("test".to_string());
        assert_eq!(format!("{err1}"), "Format 'test' not found");

        let err2 = FormatError::SerializationError("error".to_string());
        assert_eq!(format!("{err2}"), "Serialization error: error");
    }
}
