use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::ctx::{Ctx, Task};
use crate::group::KeyFate;
use crate::io::staged_file;
use crate::schema::v1::{
    AnnotateSection, Command, MergeCounts, MergeEvent, MergeSection, MergeSettings, Paths,
    RunReportV1,
};

pub fn build_report(ctx: &Ctx) -> Result<RunReportV1> {
    let paths = Paths {
        input: ctx.input.display().to_string(),
        output: ctx.output.display().to_string(),
        annotation: ctx.annotation_path.as_ref().map(|p| p.display().to_string()),
    };
    let c = &ctx.counters;

    let (command, merge, annotate) = match ctx.task {
        Task::Merge => {
            let outcome = ctx.merged.as_ref().context("merge result missing")?;
            let merges = outcome
                .decisions
                .iter()
                .filter_map(|d| match &d.fate {
                    KeyFate::MergedInto(into) => Some(MergeEvent {
                        key: d.key.clone(),
                        into: into.clone(),
                    }),
                    _ => None,
                })
                .collect();
            let section = MergeSection {
                settings: MergeSettings {
                    min_count: ctx.filter.min_count,
                    min_genes: ctx.filter.min_genes,
                    drop_low_count: ctx.filter.drop_low_count,
                },
                counts: MergeCounts {
                    rows_read: c.read,
                    passed_through: c.passed_through,
                    dropped: c.dropped,
                    candidates: c.candidates,
                    kept: c.kept,
                    merged_away: c.merged_away,
                    ambiguous: c.ambiguous,
                },
                merges,
            };
            (Command::Merge, Some(section), None)
        }
        Task::Annotate => {
            let annotation = ctx.annotation.as_ref().context("annotation table missing")?;
            let section = AnnotateSection {
                rows: c.read,
                genes_found: c.genes_found,
                genes_missing: c.genes_missing,
                annotation_columns: annotation.columns.clone(),
                min_columns: ctx.min_cols.clone(),
                max_columns: ctx.max_cols.clone(),
            };
            (Command::Annotate, None, Some(section))
        }
    };

    Ok(RunReportV1 {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: ctx.tool_version.clone(),
        schema_version: "v1".to_string(),
        command,
        paths,
        merge,
        annotate,
        warnings: ctx.warnings.clone(),
    })
}

pub fn stage_json(path: &Path, report: &RunReportV1) -> Result<NamedTempFile> {
    let mut file = staged_file(path)?;
    let mut writer = std::io::BufWriter::new(&mut file);
    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| format!("failed to write {}", path.display()))?;
    writer.flush()?;
    drop(writer);
    Ok(file)
}
