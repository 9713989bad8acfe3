use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{commit, json_writer, tsv_writer};
use crate::pipeline::Stage;

pub struct Stage5Output;

impl Stage5Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Output {
    fn name(&self) -> &'static str {
        "stage5_output"
    }

    // Both files are fully written to temporaries before either is moved into place.
    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let report = match &ctx.report_path {
            Some(path) => {
                let report = json_writer::build_report(ctx)?;
                Some((path, json_writer::stage_json(path, &report)?))
            }
            None => None,
        };
        let table = tsv_writer::stage_tsv(&ctx.output, ctx)?;

        if let Some((path, file)) = report {
            commit(file, path)?;
            info!(report = %path.display(), "report_written");
        }
        if let Err(err) = commit(table, &ctx.output) {
            if let Some(path) = &ctx.report_path {
                let _ = std::fs::remove_file(path);
            }
            return Err(err);
        }

        info!(output = %ctx.output.display(), "stage5_output_ready");
        Ok(())
    }
}
