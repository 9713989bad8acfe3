use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::annotate::{load_annotation, resolve_extremes};
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage3Annotation;

impl Stage3Annotation {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Annotation {
    fn name(&self) -> &'static str {
        "stage3_annotation"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let path = ctx
            .annotation_path
            .as_ref()
            .context("annotation table path missing")?;
        let (table, warnings) = load_annotation(path)?;
        let extremes = resolve_extremes(&table, &ctx.min_cols, &ctx.max_cols)?;

        if table.genes.is_empty() {
            warn!(annotation = %path.display(), "annotation table has no genes");
            ctx.warnings
                .push(format!("annotation table {} has no genes", path.display()));
        }
        info!(
            genes = table.genes.len(),
            columns = table.columns.len(),
            extremes = extremes.len(),
            "annotation_loaded"
        );

        ctx.warnings.extend(warnings);
        ctx.annotation = Some(table);
        ctx.extremes = extremes;
        Ok(())
    }
}
