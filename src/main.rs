use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mmgroup::cli::{AnnotateArgs, Cli, Commands, MergeArgs};
use mmgroup::ctx::{Ctx, Task};
use mmgroup::group::FilterParams;
use mmgroup::io;
use mmgroup::pipeline;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let ctx = match cli.command {
        Commands::Merge(args) => run_merge(args)?,
        Commands::Annotate(args) => run_annotate(args)?,
    };

    print_summary(&ctx)
}

fn run_merge(args: MergeArgs) -> Result<Ctx> {
    let mut ctx = Ctx::new(
        Task::Merge,
        args.input,
        args.output,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.report_path = args.report;
    ctx.filter = FilterParams {
        min_count: args.min_count,
        min_genes: args.min_genes,
        drop_low_count: args.drop_low_count,
    };
    pipeline::merge_pipeline().run(&mut ctx)?;
    Ok(ctx)
}

fn run_annotate(args: AnnotateArgs) -> Result<Ctx> {
    let mut ctx = Ctx::new(
        Task::Annotate,
        args.input,
        args.output,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.report_path = args.report;
    ctx.annotation_path = Some(args.annotation);
    ctx.min_cols = args.min;
    ctx.max_cols = args.max;
    pipeline::annotate_pipeline().run(&mut ctx)?;
    Ok(ctx)
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    Ok(())
}
