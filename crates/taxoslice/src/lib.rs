//! サブタクソノミー抽出エンジン
//!
//! このクレートは OWL 関数型構文のサブセットから部分階層を切り出します:
//! - `Prefix` / `SubClassOf` / `EquivalentClasses` の行単位パーサー
//! - 同値クラスの Union-Find
//! - シードからの祖先・同値クラス閉包
//! - 決定的なシリアライザ (関数型構文 / Graphviz)
//!
//! ```
//! use taxoslice::{ClassIri, Extractor};
//!
//! let input = "Ontology(\nSubClassOf(:B :A)\nSubClassOf(:C :A)\nEquivalentClasses(:C :D)\n)\n";
//! let output = Extractor::default().extract_str(input, &[ClassIri::from(":D")]).unwrap();
//! assert!(output.contains("SubClassOf(:C :A)"));
//! assert!(!output.contains(":B"));
//! ```

pub mod model;
pub mod parser;
pub mod partition;
pub mod hierarchy;
pub mod closure;
pub mod serializer;
pub mod dot;
pub mod config;
pub mod extractor;

pub use model::{ClassIri, PrefixDeclaration, SubClassAxiom, EquivalenceAxiom, ParsedOntology};
pub use parser::{FunctionalSyntaxParser, ParseMode};
pub use partition::EquivalencePartition;
pub use hierarchy::{HierarchyGraph, Taxonomy};
pub use closure::{Closure, ClosureExtractor};
pub use serializer::{FunctionalSyntaxSerializer, SubTaxonomy};
pub use dot::DotWriter;
pub use config::ExtractOptions;
pub use extractor::{Extractor, ExtractionSummary};

// Error types
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaxonomyError {
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read error: {0}")]
    Stream(#[from] std::io::Error),

    #[error("Unrecognized line {line_number}: {line}")]
    UnrecognizedLine { line_number: usize, line: String },

    #[error("At least one seed class is required")]
    NoSeeds,
}
