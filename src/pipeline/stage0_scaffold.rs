use anyhow::{Context, Result, bail};
use std::fs;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage0Scaffold;

impl Stage0Scaffold {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Scaffold {
    fn name(&self) -> &'static str {
        "stage0_scaffold"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.input.is_file() {
            bail!("input table {} is not a readable file", ctx.input.display());
        }
        if ctx.output == ctx.input {
            bail!("output path must differ from input {}", ctx.input.display());
        }

        let mut parents = vec![ctx.output.parent()];
        if let Some(report) = &ctx.report_path {
            parents.push(report.parent());
        }
        for dir in parents
            .into_iter()
            .flatten()
            .filter(|p| !p.as_os_str().is_empty())
        {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            info!(out_dir = %dir.display(), "output_dir_ready");
        }

        Ok(())
    }
}
