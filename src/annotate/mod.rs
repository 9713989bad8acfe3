mod loader;
mod summarize;

use std::collections::HashMap;

pub use loader::{load_annotation, parse_annotation};
pub use summarize::{ExtremeKind, ExtremeSpec, annotate_row, extreme_of, resolve_extremes};

pub const MISSING: &str = "NA";

/// Per-gene side table: one value column set per gene id.
#[derive(Debug, Clone)]
pub struct AnnotationTable {
    pub label: String,
    pub columns: Vec<String>,
    pub genes: HashMap<String, Vec<String>>,
}

impl AnnotationTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Output header columns: side columns, then `min_*`, then `max_*`.
    pub fn output_columns(&self, extremes: &[ExtremeSpec]) -> Vec<String> {
        let mut cols = self.columns.clone();
        for spec in extremes {
            cols.push(spec.header());
        }
        cols
    }
}

#[derive(Debug, Clone)]
pub struct AnnotatedRow {
    pub key: String,
    pub stats: Vec<String>,
    pub values: Vec<String>,
    pub extremes: Vec<String>,
    pub genes_found: usize,
    pub genes_missing: usize,
}
