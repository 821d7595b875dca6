//! 祖先・同値クラスの閉包抽出

use crate::hierarchy::Taxonomy;
use crate::model::{ClassIri, SubClassAxiom};
use crate::TaxonomyError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};
use tracing::debug;

/// Result of a closure extraction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Closure {
    /// Every class reached from the seeds
    pub seen: BTreeSet<ClassIri>,
    /// Every SubClassOf edge leaving a class in `seen`
    pub needed_edges: BTreeSet<SubClassAxiom>,
}

impl Closure {
    pub fn contains(&self, class: &ClassIri) -> bool {
        self.seen.contains(class)
    }
}

/// Breadth-first walk over parent edges and equivalence groups
pub struct ClosureExtractor<'a> {
    taxonomy: &'a mut Taxonomy,
}

impl<'a> ClosureExtractor<'a> {
    pub fn new(taxonomy: &'a mut Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Collect the ancestors of `seeds`, closed under equivalence at every step.
    ///
    /// Only child -> parent edges are followed. An edge is kept for every parent
    /// of every visited class, including parents that were already seen.
    pub fn extract(&mut self, seeds: &[ClassIri]) -> Result<Closure, TaxonomyError> {
        if seeds.is_empty() {
            return Err(TaxonomyError::NoSeeds);
        }

        let groups = self.taxonomy.partition.groups();
        let mut closure = Closure::default();
        let mut queue: VecDeque<ClassIri> = VecDeque::new();

        for seed in seeds {
            if closure.seen.insert(seed.clone()) {
                queue.push_back(seed.clone());
            }
        }

        while let Some(current) = queue.pop_front() {
            let representative = self.taxonomy.partition.find(&current);
            if let Some(members) = groups.get(&representative) {
                for member in members {
                    if closure.seen.insert(member.clone()) {
                        queue.push_back(member.clone());
                    }
                }
            }

            for parent in self.taxonomy.graph.parents(&current) {
                closure
                    .needed_edges
                    .insert(SubClassAxiom::new(current.clone(), parent.clone()));
                if closure.seen.insert(parent.clone()) {
                    queue.push_back(parent.clone());
                }
            }
        }

        debug!(
            "Closure of {} seed(s): {} classes, {} edges",
            seeds.len(),
            closure.seen.len(),
            closure.needed_edges.len()
        );

        Ok(closure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::FunctionalSyntaxParser;

    fn iri(s: &str) -> ClassIri {
        ClassIri::from(s)
    }

    fn taxonomy(body: &str) -> Taxonomy {
        let doc = format!("Ontology(\n{}\n)\n", body);
        let parsed = FunctionalSyntaxParser::default().parse_str(&doc).unwrap();
        Taxonomy::build(&parsed)
    }

    fn set(items: &[&str]) -> BTreeSet<ClassIri> {
        items.iter().map(|s| iri(s)).collect()
    }

    #[test]
    fn test_equivalent_partner_pulls_in_its_ancestors() {
        let mut tax = taxonomy("SubClassOf(:B :A)\nSubClassOf(:C :A)\nEquivalentClasses(:C :D)");
        let closure = ClosureExtractor::new(&mut tax).extract(&[iri(":D")]).unwrap();

        assert_eq!(closure.seen, set(&[":A", ":C", ":D"]));
        assert_eq!(
            closure.needed_edges,
            [SubClassAxiom::new(":C", ":A")].into_iter().collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn test_descendants_are_not_followed() {
        let mut tax = taxonomy("SubClassOf(:Dog :Mammal)\nSubClassOf(:Mammal :Animal)");
        let closure = ClosureExtractor::new(&mut tax).extract(&[iri(":Mammal")]).unwrap();
        assert_eq!(closure.seen, set(&[":Mammal", ":Animal"]));
        assert!(!closure.contains(&iri(":Dog")));
    }

    #[test]
    fn test_edges_to_already_seen_parents_are_kept() {
        // diamond: both branches lead back to :Top
        let mut tax = taxonomy(
            "SubClassOf(:Leaf :Left)\nSubClassOf(:Leaf :Right)\nSubClassOf(:Left :Top)\nSubClassOf(:Right :Top)",
        );
        let closure = ClosureExtractor::new(&mut tax).extract(&[iri(":Leaf")]).unwrap();
        assert_eq!(closure.needed_edges.len(), 4);
    }

    #[test]
    fn test_cycles_terminate() {
        let mut tax = taxonomy("SubClassOf(:A :B)\nSubClassOf(:B :C)\nSubClassOf(:C :A)");
        let closure = ClosureExtractor::new(&mut tax).extract(&[iri(":A")]).unwrap();
        assert_eq!(closure.seen, set(&[":A", ":B", ":C"]));
        assert_eq!(closure.needed_edges.len(), 3);
    }

    #[test]
    fn test_unknown_seed_is_a_singleton() {
        let mut tax = taxonomy("SubClassOf(:A :B)");
        let closure = ClosureExtractor::new(&mut tax).extract(&[iri(":Ghost")]).unwrap();
        assert_eq!(closure.seen, set(&[":Ghost"]));
        assert!(closure.needed_edges.is_empty());
    }

    #[test]
    fn test_empty_seed_list_is_rejected() {
        let mut tax = taxonomy("SubClassOf(:A :B)");
        let err = ClosureExtractor::new(&mut tax).extract(&[]).unwrap_err();
        assert!(matches!(err, TaxonomyError::NoSeeds));
    }

    #[test]
    fn test_multiple_seeds_share_ancestors() {
        let mut tax = taxonomy("SubClassOf(:Cat :Mammal)\nSubClassOf(:Dog :Mammal)\nSubClassOf(:Trout :Fish)");
        let closure = ClosureExtractor::new(&mut tax)
            .extract(&[iri(":Cat"), iri(":Dog")])
            .unwrap();
        assert_eq!(closure.seen, set(&[":Cat", ":Dog", ":Mammal"]));
        assert_eq!(closure.needed_edges.len(), 2);
    }
}
