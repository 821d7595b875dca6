//! 同値クラスの素集合 (Union-Find)
//!
//! Only group membership is meaningful to callers. Which member ends up as the
//! representative depends on the order of `union` calls and must not be used
//! for anything but grouping identity.

use crate::model::ClassIri;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Disjoint-set forest over class identifiers
#[derive(Debug, Clone, Default)]
pub struct EquivalencePartition {
    parent: HashMap<ClassIri, ClassIri>,
}

impl EquivalencePartition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the representative of `x`, registering it as a singleton if unknown.
    ///
    /// Every node on the walked path is repointed directly at the root.
    pub fn find(&mut self, x: &ClassIri) -> ClassIri {
        if !self.parent.contains_key(x) {
            self.parent.insert(x.clone(), x.clone());
            return x.clone();
        }

        let mut path = Vec::new();
        let mut current = x.clone();
        loop {
            let next = &self.parent[&current];
            if *next == current {
                break;
            }
            path.push(current.clone());
            current = next.clone();
        }

        for node in path {
            self.parent.insert(node, current.clone());
        }

        current
    }

    /// Merge the groups of `a` and `b`; b's root becomes the shared representative.
    pub fn union(&mut self, a: &ClassIri, b: &ClassIri) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent.insert(root_a, root_b);
        }
    }

    /// Representative -> all members of its group
    pub fn groups(&mut self) -> BTreeMap<ClassIri, BTreeSet<ClassIri>> {
        let known: Vec<ClassIri> = self.parent.keys().cloned().collect();
        let mut groups: BTreeMap<ClassIri, BTreeSet<ClassIri>> = BTreeMap::new();
        for member in known {
            let root = self.find(&member);
            groups.entry(root).or_default().insert(member);
        }
        groups
    }

    pub fn same_group(&mut self, a: &ClassIri, b: &ClassIri) -> bool {
        self.find(a) == self.find(b)
    }

    pub fn contains(&self, x: &ClassIri) -> bool {
        self.parent.contains_key(x)
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn iri(s: &str) -> ClassIri {
        ClassIri::from(s)
    }

    fn membership(partition: &mut EquivalencePartition) -> BTreeSet<BTreeSet<ClassIri>> {
        partition.groups().into_values().collect()
    }

    #[test]
    fn test_find_registers_singleton() {
        let mut uf = EquivalencePartition::new();
        assert!(!uf.contains(&iri(":A")));
        assert_eq!(uf.find(&iri(":A")), iri(":A"));
        assert!(uf.contains(&iri(":A")));
        assert_eq!(uf.len(), 1);
    }

    #[test]
    fn test_union_is_transitive() {
        let mut uf = EquivalencePartition::new();
        uf.union(&iri(":A"), &iri(":B"));
        uf.union(&iri(":C"), &iri(":B"));
        assert!(uf.same_group(&iri(":A"), &iri(":C")));
        assert!(!uf.same_group(&iri(":A"), &iri(":D")));
    }

    #[test]
    fn test_groups_partition_every_known_identifier() {
        let mut uf = EquivalencePartition::new();
        uf.union(&iri(":A"), &iri(":B"));
        uf.find(&iri(":Z"));

        let expected: BTreeSet<BTreeSet<ClassIri>> = [
            [iri(":A"), iri(":B")].into_iter().collect(),
            [iri(":Z")].into_iter().collect(),
        ]
        .into_iter()
        .collect();
        assert_eq!(membership(&mut uf), expected);
    }

    #[test]
    fn test_long_chain_resolves_without_recursion() {
        let mut uf = EquivalencePartition::new();
        for i in 0..100_000 {
            uf.union(&iri(&format!(":C{}", i)), &iri(&format!(":C{}", i + 1)));
        }
        assert!(uf.same_group(&iri(":C0"), &iri(":C100000")));
        assert_eq!(uf.groups().len(), 1);
    }

    proptest! {
        #[test]
        fn prop_membership_is_order_independent(
            pairs in prop::collection::vec((0u8..12, 0u8..12), 0..30)
        ) {
            let mut forward = EquivalencePartition::new();
            for (a, b) in &pairs {
                forward.union(&iri(&format!(":N{}", a)), &iri(&format!(":N{}", b)));
            }

            let mut reversed = EquivalencePartition::new();
            for (a, b) in pairs.iter().rev() {
                reversed.union(&iri(&format!(":N{}", b)), &iri(&format!(":N{}", a)));
            }

            prop_assert_eq!(membership(&mut forward), membership(&mut reversed));
        }
    }
}
