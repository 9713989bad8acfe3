use anyhow::{Result, bail};

use crate::annotate::{AnnotatedRow, AnnotationTable, MISSING};
use crate::group::GENE_DELIMITER;

const VALUE_SEPARATOR: &str = ";";
const SKIPPED_TOKENS: [&str; 2] = [MISSING, "Inf"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremeKind {
    Min,
    Max,
}

impl ExtremeKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ExtremeKind::Min => "min",
            ExtremeKind::Max => "max",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExtremeSpec {
    pub kind: ExtremeKind,
    pub column: String,
    pub index: usize,
}

impl ExtremeSpec {
    pub fn header(&self) -> String {
        format!("{}_{}", self.kind.prefix(), self.column)
    }
}

/// Maps configured column names onto side-table indices, min columns first.
pub fn resolve_extremes(
    table: &AnnotationTable,
    min_cols: &[String],
    max_cols: &[String],
) -> Result<Vec<ExtremeSpec>> {
    let mut out = Vec::with_capacity(min_cols.len() + max_cols.len());
    let requested = min_cols
        .iter()
        .map(|c| (ExtremeKind::Min, c))
        .chain(max_cols.iter().map(|c| (ExtremeKind::Max, c)));
    for (kind, column) in requested {
        let Some(index) = table.column_index(column) else {
            bail!(
                "--{} column '{}' not found in annotation header ({})",
                kind.prefix(),
                column,
                table.columns.join(", ")
            );
        };
        out.push(ExtremeSpec {
            kind,
            column: column.clone(),
            index,
        });
    }
    Ok(out)
}

/// Picks the extreme of a `;`-joined value list, returning the winning token as written.
/// `NA` and `Inf` tokens are ignored; nothing left or an unparsable token yields `NA`.
pub fn extreme_of(joined: &str, kind: ExtremeKind) -> String {
    let mut best: Option<(f64, &str)> = None;
    for token in joined.split(VALUE_SEPARATOR) {
        if SKIPPED_TOKENS.contains(&token) {
            continue;
        }
        let Ok(value) = token.trim().parse::<f64>() else {
            return MISSING.to_string();
        };
        let better = match (best, kind) {
            (None, _) => true,
            (Some((b, _)), ExtremeKind::Min) => value < b,
            (Some((b, _)), ExtremeKind::Max) => value > b,
        };
        if better {
            best = Some((value, token));
        }
    }
    match best {
        Some((_, token)) => token.to_string(),
        None => MISSING.to_string(),
    }
}

pub fn annotate_row(
    key: &str,
    stats: Vec<String>,
    table: &AnnotationTable,
    extremes: &[ExtremeSpec],
) -> AnnotatedRow {
    let genes: Vec<&str> = key.split(GENE_DELIMITER).collect();
    let mut per_column: Vec<Vec<&str>> =
        vec![Vec::with_capacity(genes.len()); table.columns.len()];
    let mut genes_found = 0;
    let mut genes_missing = 0;

    for gene in &genes {
        let row = table.genes.get(*gene);
        if row.is_some() {
            genes_found += 1;
        } else {
            genes_missing += 1;
        }
        for (col, slot) in per_column.iter_mut().enumerate() {
            let value = row
                .and_then(|r| r.get(col))
                .map(|v| v.as_str())
                .unwrap_or(MISSING);
            slot.push(value);
        }
    }

    let values: Vec<String> = per_column
        .iter()
        .map(|vals| vals.join(VALUE_SEPARATOR))
        .collect();
    let extremes = extremes
        .iter()
        .map(|spec| extreme_of(&values[spec.index], spec.kind))
        .collect();

    AnnotatedRow {
        key: key.to_string(),
        stats,
        values,
        extremes,
        genes_found,
        genes_missing,
    }
}
