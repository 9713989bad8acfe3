use std::path::PathBuf;

use crate::annotate::{AnnotatedRow, AnnotationTable, ExtremeSpec};
use crate::group::{Counts, FilterParams, GroupTable, MergeOutcome};
use crate::io::table_reader::TableHeader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Merge,
    Annotate,
}

impl Task {
    pub fn name(&self) -> &'static str {
        match self {
            Task::Merge => "merge",
            Task::Annotate => "annotate",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RowCounters {
    pub read: u64,
    pub passed_through: u64,
    pub dropped: u64,
    pub candidates: u64,
    pub kept: u64,
    pub merged_away: u64,
    pub ambiguous: u64,
    pub genes_found: u64,
    pub genes_missing: u64,
}

#[derive(Debug)]
pub struct Ctx {
    pub task: Task,
    pub input: PathBuf,
    pub output: PathBuf,
    pub report_path: Option<PathBuf>,
    pub filter: FilterParams,
    pub annotation_path: Option<PathBuf>,
    pub min_cols: Vec<String>,
    pub max_cols: Vec<String>,
    pub tool_version: String,
    pub header: Option<TableHeader>,
    pub passthrough: Vec<(String, Counts)>,
    pub candidates: Option<GroupTable>,
    pub merged: Option<MergeOutcome>,
    pub annotation: Option<AnnotationTable>,
    pub extremes: Vec<ExtremeSpec>,
    pub annotated: Vec<AnnotatedRow>,
    pub counters: RowCounters,
    pub warnings: Vec<String>,
}

impl Ctx {
    pub fn new(task: Task, input: PathBuf, output: PathBuf, tool_version: &str) -> Self {
        Self {
            task,
            input,
            output,
            report_path: None,
            filter: FilterParams::default(),
            annotation_path: None,
            min_cols: Vec::new(),
            max_cols: Vec::new(),
            tool_version: tool_version.to_string(),
            header: None,
            passthrough: Vec::new(),
            candidates: None,
            merged: None,
            annotation: None,
            extremes: Vec::new(),
            annotated: Vec::new(),
            counters: RowCounters::default(),
            warnings: Vec::new(),
        }
    }
}
