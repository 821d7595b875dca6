//! # Extraction Configuration

use crate::parser::ParseMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options for a file-to-file extraction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// How unrecognized body lines are handled
    pub parse_mode: ParseMode,

    /// Write through a temporary file and rename it over the target
    pub atomic_write: bool,

    /// Also write a Graphviz rendering here
    pub dot_output: Option<PathBuf>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            parse_mode: ParseMode::Permissive,
            atomic_write: true,
            dot_output: None,
        }
    }
}

impl ExtractOptions {
    pub fn strict(mut self) -> Self {
        self.parse_mode = ParseMode::Strict;
        self
    }

    pub fn with_atomic_write(mut self, atomic_write: bool) -> Self {
        self.atomic_write = atomic_write;
        self
    }

    pub fn with_dot_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.dot_output = Some(path.into());
        self
    }
}
