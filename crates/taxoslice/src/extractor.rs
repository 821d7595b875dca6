//! ファイル間の抽出パイプライン

use crate::closure::{Closure, ClosureExtractor};
use crate::config::ExtractOptions;
use crate::dot::DotWriter;
use crate::hierarchy::Taxonomy;
use crate::model::{ClassIri, ParsedOntology};
use crate::parser::FunctionalSyntaxParser;
use crate::serializer::{FunctionalSyntaxSerializer, SubTaxonomy};
use crate::TaxonomyError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub seeds: Vec<ClassIri>,
    pub output: PathBuf,
    pub dot_output: Option<PathBuf>,
    /// Size of the closure
    pub classes: usize,
    pub subclass_axioms: usize,
    pub equivalence_groups: usize,
    pub skipped_lines: usize,
}

/// Parse -> build -> close -> serialize
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// In-memory extraction from an already parsed document
    pub fn extract(
        &self,
        ontology: &ParsedOntology,
        seeds: &[ClassIri],
    ) -> Result<(Closure, SubTaxonomy), TaxonomyError> {
        let mut taxonomy = Taxonomy::build(ontology);
        debug!(
            "Built taxonomy: {} edges, {} known classes",
            taxonomy.graph.edge_count(),
            taxonomy.partition.len()
        );

        let closure = ClosureExtractor::new(&mut taxonomy).extract(seeds)?;
        let sub = SubTaxonomy::assemble(&ontology.prefixes, &closure, &mut taxonomy.partition);
        Ok((closure, sub))
    }

    /// Extract from a document held in a string and render the result
    pub fn extract_str(&self, input: &str, seeds: &[ClassIri]) -> Result<String, TaxonomyError> {
        let ontology = FunctionalSyntaxParser::new(self.options.parse_mode).parse_str(input)?;
        let (_, sub) = self.extract(&ontology, seeds)?;
        Ok(FunctionalSyntaxSerializer::render(&sub))
    }

    /// Read `input`, extract the sub-taxonomy of `seeds`, write it to `output`
    pub fn run(
        &self,
        input: &Path,
        output: &Path,
        seeds: &[ClassIri],
    ) -> Result<ExtractionSummary, TaxonomyError> {
        info!("Extracting sub-taxonomy from {}", input.display());

        let parser = FunctionalSyntaxParser::new(self.options.parse_mode);
        debug!("Parsing in {:?} mode", parser.mode());
        let ontology = parser.parse_file(input)?;
        debug!(
            "Parsed {} axioms, skipped {} lines",
            ontology.axiom_count(),
            ontology.skipped_lines
        );
        let (closure, sub) = self.extract(&ontology, seeds)?;

        self.write_file(output, |out| FunctionalSyntaxSerializer::write(&sub, out))?;
        if let Some(dot_path) = &self.options.dot_output {
            self.write_file(dot_path, |out| DotWriter::write(&sub, out))?;
        }

        let summary = ExtractionSummary {
            seeds: seeds.to_vec(),
            output: output.to_path_buf(),
            dot_output: self.options.dot_output.clone(),
            classes: closure.seen.len(),
            subclass_axioms: sub.edges.len(),
            equivalence_groups: sub.equivalence_groups.len(),
            skipped_lines: ontology.skipped_lines,
        };
        info!(
            "Wrote {} SubClassOf and {} EquivalentClasses axioms to {}",
            summary.subclass_axioms,
            summary.equivalence_groups,
            output.display()
        );

        Ok(summary)
    }

    fn write_file<F>(&self, path: &Path, render: F) -> Result<(), TaxonomyError>
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        let io_error = |source: io::Error| TaxonomyError::Io {
            path: path.to_path_buf(),
            source,
        };

        if self.options.atomic_write {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(io_error)?;
            {
                let mut out = BufWriter::new(temp.as_file_mut());
                render(&mut out).map_err(io_error)?;
                out.flush().map_err(io_error)?;
            }
            temp.persist(path).map_err(|e| io_error(e.error))?;
        } else {
            let file = File::create(path).map_err(io_error)?;
            let mut out = BufWriter::new(file);
            render(&mut out).map_err(io_error)?;
            out.flush().map_err(io_error)?;
        }

        Ok(())
    }
}
