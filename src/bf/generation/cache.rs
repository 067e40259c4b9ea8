//! Per-run record of generated nodes

use std::collections::BTreeMap;

use crate::bf::tree::NodeId;

/// Statement name to every finished node generated for it in the current run.
///
/// Leaves cut short and alias children are never recorded. Reset at the start of
/// every run. Iteration is ordered by statement name, so strategies that walk the
/// cache stay reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedNodes {
    nodes: BTreeMap<String, Vec<NodeId>>,
}

impl GeneratedNodes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes generated for `name`, in completion order
    pub fn get(&self, name: &str) -> &[NodeId] {
        self.nodes.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str, id: NodeId) -> bool {
        self.get(name).contains(&id)
    }

    /// Recorded statements in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NodeId])> {
        self.nodes
            .iter()
            .map(|(name, ids)| (name.as_str(), ids.as_slice()))
    }

    /// Total number of recorded nodes
    pub fn len(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn record(&mut self, name: &str, id: NodeId) {
        self.nodes.entry(name.to_string()).or_default().push(id);
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_get() {
        let mut cache = GeneratedNodes::new();
        cache.record("class", NodeId(3));
        cache.record("class", NodeId(1));
        cache.record("field", NodeId(2));

        assert_eq!(cache.get("class"), &[NodeId(3), NodeId(1)]);
        assert!(cache.contains("field", NodeId(2)));
        assert!(!cache.contains("class", NodeId(2)));
        assert_eq!(cache.get("missing"), &[] as &[NodeId]);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_iter_is_name_ordered() {
        let mut cache = GeneratedNodes::new();
        for (i, name) in ["k9", "any", "k0", "k4", "b"].iter().enumerate() {
            cache.record(name, NodeId(i));
        }
        let names: Vec<_> = cache.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["any", "b", "k0", "k4", "k9"]);
    }

    #[test]
    fn test_clear() {
        let mut cache = GeneratedNodes::new();
        cache.record("a", NodeId(0));
        cache.clear();
        assert!(cache.is_empty());
    }
}
