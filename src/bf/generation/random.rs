//! A seedable random strategy

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::cache::GeneratedNodes;
use super::strategy::GenerateStrategy;
use crate::bf::config::GenerationConfig;
use crate::bf::definition::{RefType, Reference, Statement};
use crate::bf::tree::{NodeId, NodeRef};

/// Default strategy driven by a seeded RNG.
///
/// Every node at `max_depth` is a leaf, so generation always terminates. Two
/// strategies built from the same settings and seed make identical decisions.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
    settings: GenerationConfig,
}

impl RandomStrategy {
    /// Build from settings, seeding from entropy when `settings.seed` is `None`
    pub fn new(settings: GenerationConfig) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, settings }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(GenerationConfig {
            seed: Some(seed),
            ..GenerationConfig::default()
        })
    }

    pub fn settings(&self) -> &GenerationConfig {
        &self.settings
    }

    fn chance(&mut self, probability: f64) -> bool {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self.rng.gen_bool(probability)
    }

    /// Depth of a node generated below `context`
    fn child_depth(context: Option<NodeRef<'_>>) -> usize {
        context.map_or(1, |node| node.depth() + 1)
    }
}

impl GenerateStrategy for RandomStrategy {
    fn choose_leaf(&mut self, _statement: &Statement, context: Option<NodeRef<'_>>) -> bool {
        if Self::child_depth(context) >= self.settings.max_depth {
            return true;
        }
        self.chance(self.settings.leaf_probability)
    }

    fn choose_reference(
        &mut self,
        reference: &Reference,
        _context: NodeRef<'_>,
        generated: &GeneratedNodes,
    ) -> Option<NodeId> {
        if self.settings.no_alias.iter().any(|name| name == reference.name()) {
            return None;
        }
        let candidates = generated.get(reference.name());
        if candidates.is_empty() || !self.chance(self.settings.alias_probability) {
            return None;
        }
        candidates.choose(&mut self.rng).copied()
    }

    fn choose_index(&mut self, statement: &Statement, _context: Option<NodeRef<'_>>) -> usize {
        match statement.alternative_count() {
            0 => 0,
            count => self.rng.gen_range(0..count),
        }
    }

    fn choose_size(&mut self, reference: &Reference, context: NodeRef<'_>) -> usize {
        let ref_type = reference.ref_type();
        let floor = ref_type.min_size();
        // Children at the depth limit are leaves anyway; keep the slot minimal.
        if context.depth() + 1 >= self.settings.max_depth {
            return floor;
        }
        let ceiling = match ref_type {
            RefType::NonNull | RefType::Nullable => 1,
            RefType::OneOrMore | RefType::ZeroOrMore => self.settings.max_size.max(floor),
        };
        self.rng.gen_range(floor..=ceiling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bf::definition::Definition;
    use crate::bf::generation::Generator;

    fn definition(source: &str) -> Definition {
        source.parse().unwrap()
    }

    fn settings(seed: u64) -> GenerationConfig {
        GenerationConfig {
            seed: Some(seed),
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn test_same_seed_same_graph() {
        let def = definition("expr: num | expr op expr | lparen expr rparen; num; op; lparen; rparen;");
        let first = Generator::new(&def, RandomStrategy::with_seed(7))
            .generate("expr")
            .unwrap();
        let second = Generator::new(&def, RandomStrategy::with_seed(7))
            .generate("expr")
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_self_recursion_terminates_at_max_depth() {
        let def = definition("c: c?;");
        let strategy = RandomStrategy::new(GenerationConfig {
            max_depth: 4,
            leaf_probability: 0.0,
            ..settings(1)
        });
        let graph = Generator::new(&def, strategy).generate("c").unwrap();
        assert!(graph.len() <= 4);
        assert!(graph.iter().map(|node| node.depth()).max() <= Some(4));
    }

    #[test]
    fn test_sizes_respect_cardinality() {
        let def = definition("a: b? c+ d*; b; c; d;");
        for seed in 0..32 {
            let strategy = RandomStrategy::new(GenerationConfig {
                max_size: 3,
                leaf_probability: 0.0,
                ..settings(seed)
            });
            let graph = Generator::new(&def, strategy).generate("a").unwrap();
            let root = graph.root().unwrap();
            let count = |name: &str| root.children().filter(|c| c.name() == name).count();
            assert!(count("b") <= 1);
            assert!((1..=3).contains(&count("c")));
            assert!(count("d") <= 3);
        }
    }

    #[test]
    fn test_no_alias_names_are_never_reused() {
        let def = definition("a: b b b b; b: x; x;");
        let strategy = RandomStrategy::new(GenerationConfig {
            alias_probability: 1.0,
            leaf_probability: 0.0,
            no_alias: vec!["b".into()],
            ..settings(3)
        });
        let graph = Generator::new(&def, strategy).generate("a").unwrap();
        assert!(graph.iter().all(|node| !node.is_alias()));
    }

    #[test]
    fn test_alias_probability_one_reuses_first_node() {
        let def = definition("a: b b b; b: x; x;");
        let strategy = RandomStrategy::new(GenerationConfig {
            alias_probability: 1.0,
            leaf_probability: 0.0,
            ..settings(5)
        });
        let graph = Generator::new(&def, strategy).generate("a").unwrap();
        let root = graph.root().unwrap();
        let children: Vec<_> = root.children().collect();
        assert_eq!(children.len(), 3);
        assert!(!children[0].is_alias());
        assert_eq!(children[1].alias_target(), Some(children[0]));
        assert_eq!(children[2].alias_target(), Some(children[0]));
    }
}
