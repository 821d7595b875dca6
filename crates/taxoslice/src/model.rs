//! タクソノミー抽出のデータモデル

use serde::{Deserialize, Serialize};

/// Class IRI wrapper for type safety
///
/// Compact IRIs (`:Dog`), prefixed names and full IRIs (`<http://...>`) are all
/// treated as opaque tokens and compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ClassIri(pub String);

impl ClassIri {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClassIri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClassIri {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ClassIri {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Prefix(...) line, kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefixDeclaration(pub String);

impl PrefixDeclaration {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PrefixDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// SubClassOf(child parent)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct SubClassAxiom {
    pub child: ClassIri,
    pub parent: ClassIri,
}

impl SubClassAxiom {
    pub fn new(child: impl Into<ClassIri>, parent: impl Into<ClassIri>) -> Self {
        Self {
            child: child.into(),
            parent: parent.into(),
        }
    }
}

/// EquivalentClasses(C1 ... Cn), n >= 2
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivalenceAxiom(pub Vec<ClassIri>);

impl EquivalenceAxiom {
    pub fn members(&self) -> &[ClassIri] {
        &self.0
    }
}

/// Facts recognized in one input document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedOntology {
    /// Prefix declarations in input order
    pub prefixes: Vec<PrefixDeclaration>,

    /// SubClassOf axioms in input order (duplicates allowed)
    pub subclass_axioms: Vec<SubClassAxiom>,

    /// EquivalentClasses axioms in input order
    pub equivalence_axioms: Vec<EquivalenceAxiom>,

    /// Body lines that matched no recognized pattern
    pub skipped_lines: usize,
}

impl ParsedOntology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn axiom_count(&self) -> usize {
        self.subclass_axioms.len() + self.equivalence_axioms.len()
    }
}
