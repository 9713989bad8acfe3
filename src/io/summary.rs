use anyhow::Result;

use crate::ctx::{Ctx, Task};

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let c = &ctx.counters;
    let mut out = String::new();
    out.push_str(&format!("mmgroup v{} {}\n", ctx.tool_version, ctx.task.name()));
    out.push_str(&format!("Input: {}\n", ctx.input.display()));
    match ctx.task {
        Task::Merge => {
            out.push_str(&format!(
                "Rows: {} read, {} passed through, {} dropped, {} candidates\n",
                c.read, c.passed_through, c.dropped, c.candidates
            ));
            out.push_str(&format!(
                "Groups: {} kept, {} merged, {} ambiguous\n",
                c.kept, c.merged_away, c.ambiguous
            ));
        }
        Task::Annotate => {
            out.push_str(&format!(
                "Rows: {} annotated, genes {} found, {} missing\n",
                c.read, c.genes_found, c.genes_missing
            ));
        }
    }
    out.push_str(&format!("Output: {}\n", ctx.output.display()));
    if !ctx.warnings.is_empty() {
        out.push_str("warnings:\n");
        for warning in &ctx.warnings {
            out.push_str(&format!("- {}\n", warning));
        }
    }
    out.push_str("Done!\n");
    Ok(out)
}
