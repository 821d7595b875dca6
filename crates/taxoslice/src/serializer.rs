//! 関数型構文シリアライザ

use crate::closure::Closure;
use crate::model::{ClassIri, PrefixDeclaration, SubClassAxiom};
use crate::partition::EquivalencePartition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io::{self, Write};

/// The facts that survive extraction, in output order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTaxonomy {
    pub prefixes: Vec<PrefixDeclaration>,
    /// Sorted by (child, parent)
    pub edges: BTreeSet<SubClassAxiom>,
    /// Whole groups with more than one member in the closure, ordered by representative
    pub equivalence_groups: Vec<BTreeSet<ClassIri>>,
}

impl SubTaxonomy {
    /// Select what to emit for `closure`.
    ///
    /// A group that meets the closure in two or more members is emitted whole,
    /// including members the closure never reached.
    pub fn assemble(
        prefixes: &[PrefixDeclaration],
        closure: &Closure,
        partition: &mut EquivalencePartition,
    ) -> Self {
        let equivalence_groups = partition
            .groups()
            .into_values()
            .filter(|members| members.iter().filter(|m| closure.contains(m)).count() > 1)
            .collect();

        Self {
            prefixes: prefixes.to_vec(),
            edges: closure.needed_edges.clone(),
            equivalence_groups,
        }
    }

    /// All classes mentioned by the emitted axioms
    pub fn classes(&self) -> BTreeSet<&ClassIri> {
        self.edges
            .iter()
            .flat_map(|edge| [&edge.child, &edge.parent])
            .chain(self.equivalence_groups.iter().flatten())
            .collect()
    }
}

/// Writer for the `Prefix` / `Ontology(` / `SubClassOf` / `EquivalentClasses` grammar
pub struct FunctionalSyntaxSerializer;

impl FunctionalSyntaxSerializer {
    pub fn write<W: Write + ?Sized>(sub: &SubTaxonomy, out: &mut W) -> io::Result<()> {
        for prefix in &sub.prefixes {
            writeln!(out, "{}", prefix)?;
        }

        writeln!(out)?;
        writeln!(out, "Ontology(")?;
        for edge in &sub.edges {
            writeln!(out, "  SubClassOf({} {})", edge.child, edge.parent)?;
        }
        for group in &sub.equivalence_groups {
            let members: Vec<&str> = group.iter().map(ClassIri::as_str).collect();
            writeln!(out, "  EquivalentClasses({})", members.join(" "))?;
        }
        writeln!(out, ")")?;

        Ok(())
    }

    pub fn render(sub: &SubTaxonomy) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = Self::write(sub, &mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}
