use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::group::{Eligibility, GroupKey, GroupTable};
use crate::io::table_reader::TableReader;
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let mut reader = TableReader::open(&ctx.input)?;
        let header = reader.header().clone();
        let mut table = GroupTable::with_width(header.n_values());

        while let Some((key, counts)) = reader.next_counts()? {
            ctx.counters.read += 1;
            let group = GroupKey::parse(&key);
            match ctx.filter.classify(&group, &counts) {
                Eligibility::Candidate => {
                    if table.insert(&key, counts)? {
                        warn!(key = %key, "duplicate_group_key");
                        ctx.warnings.push(format!(
                            "duplicate group key '{}' in {} (kept last row)",
                            key,
                            reader.source()
                        ));
                    }
                }
                Eligibility::PassThrough => {
                    ctx.counters.passed_through += 1;
                    ctx.passthrough.push((key, counts));
                }
                Eligibility::Dropped => ctx.counters.dropped += 1,
            }
        }

        ctx.counters.candidates = table.len() as u64;
        info!(
            rows = ctx.counters.read,
            samples = header.n_values(),
            candidates = ctx.counters.candidates,
            passed_through = ctx.counters.passed_through,
            dropped = ctx.counters.dropped,
            "rows_read"
        );

        ctx.header = Some(header);
        ctx.candidates = Some(table);
        Ok(())
    }
}
