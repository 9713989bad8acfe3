use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::warn;

use crate::annotate::AnnotationTable;
use crate::io::open_maybe_gz;

pub fn load_annotation(path: &Path) -> Result<(AnnotationTable, Vec<String>)> {
    let mut content = String::new();
    open_maybe_gz(path)
        .with_context(|| format!("failed to open annotation table {}", path.display()))?
        .read_to_string(&mut content)
        .with_context(|| format!("failed to read annotation table {}", path.display()))?;
    parse_annotation(&content, &path.display().to_string())
}

/// Parses the side table. A gene listed twice keeps its last row.
pub fn parse_annotation(content: &str, source: &str) -> Result<(AnnotationTable, Vec<String>)> {
    let mut lines = content.lines().enumerate();
    let header = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((_, line)) => break line.trim_end(),
            None => bail!("{}: annotation table is empty", source),
        }
    };
    let mut header_cols = header.split('\t').map(|s| s.to_string());
    let label = header_cols.next().unwrap_or_default();
    let columns: Vec<String> = header_cols.collect();

    let mut genes: HashMap<String, Vec<String>> = HashMap::new();
    let mut warnings = Vec::new();
    for (idx, line) in lines {
        let line_no = idx + 1;
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            continue;
        }
        let mut parts = trimmed.split('\t');
        let gene = parts.next().unwrap_or_default();
        if gene.is_empty() {
            bail!("{}:{} empty gene id", source, line_no);
        }
        let values: Vec<String> = parts.map(|s| s.to_string()).collect();
        if genes.insert(gene.to_string(), values).is_some() {
            warn!(gene, line = line_no, "duplicate_annotation_gene");
            warnings.push(format!(
                "duplicate annotation for gene '{}' at {}:{} (kept last)",
                gene, source, line_no
            ));
        }
    }

    Ok((
        AnnotationTable {
            label,
            columns,
            genes,
        },
        warnings,
    ))
}
