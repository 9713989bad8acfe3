use crate::group::GroupKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Candidate,
    PassThrough,
    Dropped,
}

#[derive(Debug, Clone, Copy)]
pub struct FilterParams {
    pub min_count: u64,
    pub min_genes: usize,
    pub drop_low_count: bool,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            min_count: 0,
            min_genes: 1,
            drop_low_count: false,
        }
    }
}

impl FilterParams {
    /// Decides once, on the row as read, whether it enters the merge.
    pub fn classify(&self, key: &GroupKey, counts: &[u64]) -> Eligibility {
        if !key.is_multi_gene() {
            return Eligibility::PassThrough;
        }
        let total: u128 = counts.iter().map(|&c| c as u128).sum();
        if total < self.min_count as u128 {
            if self.drop_low_count {
                return Eligibility::Dropped;
            }
            return Eligibility::PassThrough;
        }
        if key.gene_count() < self.min_genes {
            return Eligibility::PassThrough;
        }
        Eligibility::Candidate
    }
}
