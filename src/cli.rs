use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "mmgroup",
    version,
    about = "Merge and annotate multi-mapped gene groups from mmquant tables"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fold each gene group into its unique live superset group
    Merge(MergeArgs),
    /// Attach per-gene statistics to every gene group
    Annotate(AnnotateArgs),
}

#[derive(Debug, Args)]
pub struct MergeArgs {
    #[arg(short, long, help = "Count table (TSV, optionally .gz)")]
    pub input: PathBuf,

    #[arg(short, long, help = "Output table (overwritten)")]
    pub output: PathBuf,

    #[arg(
        short = 'c',
        long = "count",
        default_value_t = 0,
        help = "Minimum number of reads per group to consider it for merging"
    )]
    pub min_count: u64,

    #[arg(
        short = 'l',
        long = "length",
        default_value_t = 1,
        help = "Minimum number of genes per group to merge it with a larger group"
    )]
    pub min_genes: usize,

    #[arg(
        long,
        default_value_t = false,
        help = "Drop multi-gene groups below --count instead of passing them through"
    )]
    pub drop_low_count: bool,

    #[arg(long, help = "Optional JSON run report")]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct AnnotateArgs {
    #[arg(short, long, help = "Table keyed by gene group (TSV, optionally .gz)")]
    pub input: PathBuf,

    #[arg(short, long, help = "Per-gene annotation table")]
    pub annotation: PathBuf,

    #[arg(short, long, help = "Output table (overwritten)")]
    pub output: PathBuf,

    #[arg(
        short = 's',
        long = "min",
        value_delimiter = ',',
        help = "Annotation columns to summarise by their minimum"
    )]
    pub min: Vec<String>,

    #[arg(
        short = 'l',
        long = "max",
        value_delimiter = ',',
        help = "Annotation columns to summarise by their maximum"
    )]
    pub max: Vec<String>,

    #[arg(long, help = "Optional JSON run report")]
    pub report: Option<PathBuf>,
}
