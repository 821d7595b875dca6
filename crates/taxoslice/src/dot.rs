//! Graphviz (DOT) 出力

use crate::model::ClassIri;
use crate::serializer::SubTaxonomy;
use std::io::{self, Write};

/// Renders a sub-taxonomy as a directed graph: `child -> parent` for every
/// SubClassOf edge, a bidirectional edge between neighbouring members of every
/// equivalence group.
pub struct DotWriter;

impl DotWriter {
    pub fn write<W: Write + ?Sized>(sub: &SubTaxonomy, out: &mut W) -> io::Result<()> {
        writeln!(out, "digraph Taxonomy {{")?;
        for edge in &sub.edges {
            writeln!(out, "  {} -> {};", quote(&edge.child), quote(&edge.parent))?;
        }
        for group in &sub.equivalence_groups {
            let members: Vec<&ClassIri> = group.iter().collect();
            for pair in members.windows(2) {
                writeln!(out, "  {} -> {} [dir=both];", quote(pair[0]), quote(pair[1]))?;
            }
        }
        writeln!(out, "}}")?;
        Ok(())
    }

    pub fn render(sub: &SubTaxonomy) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = Self::write(sub, &mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

fn quote(class: &ClassIri) -> String {
    let mut quoted = String::with_capacity(class.as_str().len() + 2);
    quoted.push('"');
    for c in class.as_str().chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
