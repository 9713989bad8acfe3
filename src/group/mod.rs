mod filter;
mod key;
mod merge;
mod overlap;
mod table;

pub use filter::{Eligibility, FilterParams};
pub use key::{GENE_DELIMITER, GroupKey, genes_of, is_strict_subset};
pub use merge::{KeyFate, MergeDecision, MergeOutcome, merge_groups, walk_order};
pub use overlap::{Overlap, OverlapResolver};
pub use table::{Counts, GroupTable};
