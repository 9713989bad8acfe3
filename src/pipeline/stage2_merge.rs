use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::group::merge_groups;
use crate::pipeline::Stage;

pub struct Stage2Merge;

impl Stage2Merge {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Merge {
    fn name(&self) -> &'static str {
        "stage2_merge"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = ctx.candidates.take().context("candidate table missing")?;
        let outcome = merge_groups(table)?;

        ctx.counters.kept = outcome.table.len() as u64;
        ctx.counters.merged_away = outcome.merged_away() as u64;
        ctx.counters.ambiguous = outcome.ambiguous() as u64;
        info!(
            kept = ctx.counters.kept,
            merged_away = ctx.counters.merged_away,
            ambiguous = ctx.counters.ambiguous,
            "merge_done"
        );

        ctx.merged = Some(outcome);
        Ok(())
    }
}
