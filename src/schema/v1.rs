use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Merge,
    Annotate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paths {
    pub input: String,
    pub output: String,
    pub annotation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeSettings {
    pub min_count: u64,
    pub min_genes: usize,
    pub drop_low_count: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeCounts {
    pub rows_read: u64,
    pub passed_through: u64,
    pub dropped: u64,
    pub candidates: u64,
    pub kept: u64,
    pub merged_away: u64,
    pub ambiguous: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeEvent {
    pub key: String,
    pub into: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeSection {
    pub settings: MergeSettings,
    pub counts: MergeCounts,
    pub merges: Vec<MergeEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotateSection {
    pub rows: u64,
    pub genes_found: u64,
    pub genes_missing: u64,
    pub annotation_columns: Vec<String>,
    pub min_columns: Vec<String>,
    pub max_columns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub command: Command,
    pub paths: Paths,
    pub merge: Option<MergeSection>,
    pub annotate: Option<AnnotateSection>,
    pub warnings: Vec<String>,
}
