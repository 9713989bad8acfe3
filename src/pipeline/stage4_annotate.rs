use anyhow::{Context, Result};
use tracing::info;

use crate::annotate::annotate_row;
use crate::ctx::Ctx;
use crate::io::table_reader::TableReader;
use crate::pipeline::Stage;

pub struct Stage4Annotate;

impl Stage4Annotate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Annotate {
    fn name(&self) -> &'static str {
        "stage4_annotate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = ctx.annotation.as_ref().context("annotation table missing")?;
        let mut reader = TableReader::open(&ctx.input)?;
        let mut rows = Vec::new();

        while let Some(record) = reader.next_record()? {
            let row = annotate_row(&record.key, record.fields, table, &ctx.extremes);
            ctx.counters.genes_found += row.genes_found as u64;
            ctx.counters.genes_missing += row.genes_missing as u64;
            rows.push(row);
        }

        ctx.counters.read = rows.len() as u64;
        info!(
            rows = ctx.counters.read,
            genes_found = ctx.counters.genes_found,
            genes_missing = ctx.counters.genes_missing,
            "rows_annotated"
        );

        ctx.header = Some(reader.header().clone());
        ctx.annotated = rows;
        Ok(())
    }
}
