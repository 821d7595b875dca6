//! OWL 関数型構文 (サブセット) パーサー
//!
//! Recognizes `Prefix(...)` lines before the `Ontology(` header and, inside the
//! body, one-line `SubClassOf` / `EquivalentClasses` axioms. Anything else in the
//! body is discarded unless [`ParseMode::Strict`] is requested.

use crate::model::{ClassIri, EquivalenceAxiom, ParsedOntology, PrefixDeclaration, SubClassAxiom};
use crate::TaxonomyError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

lazy_static! {
    static ref PREFIX_RE: Regex = Regex::new(r"(?i)^Prefix\(([^)]+)\)$").expect("prefix pattern");
    static ref HEADER_RE: Regex = Regex::new(r"(?i)^Ontology\(").expect("header pattern");
    static ref SUBCLASS_RE: Regex =
        Regex::new(r"(?i)^SubClassOf\(\s*([^\s)]+)\s+([^\s)]+)\s*\)$").expect("subclass pattern");
    static ref EQUIVALENT_RE: Regex =
        Regex::new(r"(?i)^EquivalentClasses\(\s*([^)]+)\)$").expect("equivalence pattern");
}

/// What to do with body lines that match no recognized pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Drop them without complaint
    #[default]
    Permissive,
    /// Fail on the first one
    Strict,
}

/// Classification of a single trimmed body line
#[derive(Debug, Clone, PartialEq, Eq)]
enum BodyLine {
    Blank,
    Marker,
    SubClass(SubClassAxiom),
    Equivalence(EquivalenceAxiom),
    Unrecognized,
}

/// Line-oriented parser for the functional-syntax subset
#[derive(Debug, Clone, Default)]
pub struct FunctionalSyntaxParser {
    mode: ParseMode,
}

impl FunctionalSyntaxParser {
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse an ontology document held in memory
    pub fn parse_str(&self, input: &str) -> Result<ParsedOntology, TaxonomyError> {
        self.parse_reader(input.as_bytes())
    }

    /// Parse an ontology file
    pub fn parse_file(&self, path: &Path) -> Result<ParsedOntology, TaxonomyError> {
        let file = File::open(path).map_err(|source| TaxonomyError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match self.parse_reader(BufReader::new(file)) {
            Err(TaxonomyError::Stream(source)) => Err(TaxonomyError::Io {
                path: path.to_path_buf(),
                source,
            }),
            other => other,
        }
    }

    /// Parse from any buffered reader, one line at a time
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParsedOntology, TaxonomyError> {
        let mut ontology = ParsedOntology::new();
        let mut in_body = false;

        for (index, line) in reader.lines().enumerate() {
            let raw = line?;
            let line = raw.trim();

            if !in_body {
                if PREFIX_RE.is_match(line) {
                    ontology.prefixes.push(PrefixDeclaration(line.to_string()));
                } else if HEADER_RE.is_match(line) {
                    in_body = true;
                }
                continue;
            }

            match classify_body_line(line) {
                BodyLine::Blank | BodyLine::Marker => {}
                BodyLine::SubClass(axiom) => ontology.subclass_axioms.push(axiom),
                BodyLine::Equivalence(axiom) => ontology.equivalence_axioms.push(axiom),
                BodyLine::Unrecognized => {
                    if self.mode == ParseMode::Strict {
                        return Err(TaxonomyError::UnrecognizedLine {
                            line_number: index + 1,
                            line: line.to_string(),
                        });
                    }
                    debug!("Skipping unrecognized line {}: {}", index + 1, line);
                    ontology.skipped_lines += 1;
                }
            }
        }

        debug!(
            "Parsed {} prefixes, {} SubClassOf, {} EquivalentClasses ({} lines skipped)",
            ontology.prefixes.len(),
            ontology.subclass_axioms.len(),
            ontology.equivalence_axioms.len(),
            ontology.skipped_lines
        );

        Ok(ontology)
    }
}

fn classify_body_line(line: &str) -> BodyLine {
    if line.is_empty() {
        return BodyLine::Blank;
    }
    if line == ")" || line.eq_ignore_ascii_case("ontology(") {
        return BodyLine::Marker;
    }

    if let Some(caps) = SUBCLASS_RE.captures(line) {
        return BodyLine::SubClass(SubClassAxiom::new(&caps[1], &caps[2]));
    }

    if let Some(caps) = EQUIVALENT_RE.captures(line) {
        let members: Vec<ClassIri> = caps[1].split_whitespace().map(ClassIri::from).collect();
        if members.len() >= 2 {
            return BodyLine::Equivalence(EquivalenceAxiom(members));
        }
    }

    BodyLine::Unrecognized
}
