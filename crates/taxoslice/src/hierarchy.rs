//! クラス階層グラフ

use crate::model::{ClassIri, ParsedOntology, SubClassAxiom};
use crate::partition::EquivalencePartition;
use std::collections::{BTreeSet, HashMap};

/// child -> direct parents. Cycles are allowed.
#[derive(Debug, Clone, Default)]
pub struct HierarchyGraph {
    parents: HashMap<ClassIri, BTreeSet<ClassIri>>,
}

impl HierarchyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `child ⊑ parent`. Returns false if the edge was already known.
    pub fn add_edge(&mut self, child: ClassIri, parent: ClassIri) -> bool {
        self.parents.entry(child).or_default().insert(parent)
    }

    /// Direct parents of `class`, empty for roots and unknown classes
    pub fn parents(&self, class: &ClassIri) -> impl Iterator<Item = &ClassIri> {
        self.parents.get(class).into_iter().flatten()
    }

    pub fn edge_count(&self) -> usize {
        self.parents.values().map(BTreeSet::len).sum()
    }

    /// Number of classes with at least one parent
    pub fn node_count(&self) -> usize {
        self.parents.len()
    }
}

/// Hierarchy and equivalence groups built from one parsed document
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    pub graph: HierarchyGraph,
    pub partition: EquivalencePartition,
}

impl Taxonomy {
    /// Fold every axiom of `ontology` into the graph and the partition.
    ///
    /// Each identifier of a SubClassOf axiom is registered in the partition so
    /// that every class the closure can reach has a group.
    pub fn build(ontology: &ParsedOntology) -> Self {
        let mut taxonomy = Self::default();

        for SubClassAxiom { child, parent } in &ontology.subclass_axioms {
            taxonomy.graph.add_edge(child.clone(), parent.clone());
        }

        for axiom in &ontology.equivalence_axioms {
            for pair in axiom.members().windows(2) {
                taxonomy.partition.union(&pair[0], &pair[1]);
            }
        }

        for SubClassAxiom { child, parent } in &ontology.subclass_axioms {
            taxonomy.partition.find(child);
            taxonomy.partition.find(parent);
        }

        taxonomy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EquivalenceAxiom;

    fn iri(s: &str) -> ClassIri {
        ClassIri::from(s)
    }

    #[test]
    fn test_duplicate_axioms_collapse() {
        let mut ontology = ParsedOntology::new();
        ontology.subclass_axioms.push(SubClassAxiom::new(":Dog", ":Animal"));
        ontology.subclass_axioms.push(SubClassAxiom::new(":Dog", ":Animal"));
        ontology.subclass_axioms.push(SubClassAxiom::new(":Dog", ":Pet"));

        let taxonomy = Taxonomy::build(&ontology);
        assert_eq!(taxonomy.graph.edge_count(), 2);
        assert_eq!(taxonomy.graph.node_count(), 1);
        let parents: Vec<&ClassIri> = taxonomy.graph.parents(&iri(":Dog")).collect();
        assert_eq!(parents, vec![&iri(":Animal"), &iri(":Pet")]);
    }

    #[test]
    fn test_every_subclass_identifier_is_registered() {
        let mut ontology = ParsedOntology::new();
        ontology.subclass_axioms.push(SubClassAxiom::new(":Dog", ":Animal"));

        let taxonomy = Taxonomy::build(&ontology);
        assert!(taxonomy.partition.contains(&iri(":Dog")));
        assert!(taxonomy.partition.contains(&iri(":Animal")));
        assert_eq!(taxonomy.partition.len(), 2);
    }

    #[test]
    fn test_equivalence_axioms_union_their_members() {
        let mut ontology = ParsedOntology::new();
        ontology.equivalence_axioms.push(EquivalenceAxiom(vec![iri(":A"), iri(":B"), iri(":C")]));

        let mut taxonomy = Taxonomy::build(&ontology);
        assert!(taxonomy.partition.same_group(&iri(":A"), &iri(":C")));
        assert_eq!(taxonomy.partition.groups().len(), 1);
    }

    #[test]
    fn test_unknown_class_has_no_parents() {
        let taxonomy = Taxonomy::default();
        assert_eq!(taxonomy.graph.parents(&iri(":Nowhere")).count(), 0);
    }
}
