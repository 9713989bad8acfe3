use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::annotate::AnnotatedRow;
use crate::ctx::{Ctx, Task};
use crate::io::staged_file;

/// Writes the table into a temporary file beside `path`; nothing exists at `path` yet.
pub fn stage_tsv(path: &Path, ctx: &Ctx) -> Result<NamedTempFile> {
    let mut file = staged_file(path)?;
    write_table(&mut file, ctx).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(file)
}

pub fn write_table<W: Write>(out: W, ctx: &Ctx) -> Result<()> {
    let header = ctx.header.as_ref().context("table header missing")?;
    let mut w = BufWriter::new(out);

    match ctx.task {
        Task::Merge => {
            let merged = ctx.merged.as_ref().context("merge result missing")?;
            writeln!(w, "{}", header.raw)?;
            for (key, counts) in &ctx.passthrough {
                write_count_row(&mut w, key, counts)?;
            }
            for (key, counts) in merged.table.iter() {
                write_count_row(&mut w, key, counts)?;
            }
        }
        Task::Annotate => {
            let annotation = ctx.annotation.as_ref().context("annotation table missing")?;
            let extra = annotation.output_columns(&ctx.extremes);
            if extra.is_empty() {
                writeln!(w, "{}", header.raw)?;
            } else {
                writeln!(w, "{}\t{}", header.raw, extra.join("\t"))?;
            }
            for row in &ctx.annotated {
                write_annotated_row(&mut w, row)?;
            }
        }
    }

    w.flush()?;
    Ok(())
}

fn write_count_row<W: Write>(w: &mut W, key: &str, counts: &[u64]) -> Result<()> {
    write!(w, "{}", key)?;
    for c in counts {
        write!(w, "\t{}", c)?;
    }
    writeln!(w)?;
    Ok(())
}

fn write_annotated_row<W: Write>(w: &mut W, row: &AnnotatedRow) -> Result<()> {
    let mut fields: Vec<&str> = Vec::with_capacity(1 + row.stats.len() + row.values.len());
    fields.push(&row.key);
    fields.extend(row.stats.iter().map(|s| s.as_str()));
    fields.extend(row.values.iter().map(|s| s.as_str()));
    fields.extend(row.extremes.iter().map(|s| s.as_str()));
    writeln!(w, "{}", fields.join("\t"))?;
    Ok(())
}
