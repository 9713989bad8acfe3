use crate::group::{GroupKey, GroupTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap {
    None,
    /// Index into the candidate list of the single live superset.
    Unique(usize),
    Ambiguous(usize),
}

/// Counts live supersets of a key among a candidate list fixed for the whole pass.
pub struct OverlapResolver<'a> {
    candidates: &'a [GroupKey],
}

impl<'a> OverlapResolver<'a> {
    pub fn new(candidates: &'a [GroupKey]) -> Self {
        Self { candidates }
    }

    pub fn resolve(&self, idx: usize, live: &GroupTable) -> Overlap {
        let key = &self.candidates[idx];
        let mut count = 0usize;
        let mut last = None;
        for (j, other) in self.candidates.iter().enumerate() {
            if key.is_strict_subset_of(other) && live.contains(other.as_str()) {
                count += 1;
                last = Some(j);
            }
        }
        match (count, last) {
            (0, _) => Overlap::None,
            (1, Some(j)) => Overlap::Unique(j),
            (n, _) => Overlap::Ambiguous(n),
        }
    }
}
