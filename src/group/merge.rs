use anyhow::{Context, Result};
use tracing::debug;

use crate::group::{GroupKey, GroupTable, Overlap, OverlapResolver};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyFate {
    /// No live superset.
    Kept,
    /// Two or more live supersets; left as is.
    Ambiguous { supersets: usize },
    MergedInto(String),
}

#[derive(Debug, Clone)]
pub struct MergeDecision {
    pub key: String,
    pub fate: KeyFate,
}

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub table: GroupTable,
    /// One entry per candidate, in walk order.
    pub decisions: Vec<MergeDecision>,
}

impl MergeOutcome {
    pub fn merged_away(&self) -> usize {
        self.decisions
            .iter()
            .filter(|d| matches!(d.fate, KeyFate::MergedInto(_)))
            .count()
    }

    pub fn ambiguous(&self) -> usize {
        self.decisions
            .iter()
            .filter(|d| matches!(d.fate, KeyFate::Ambiguous { .. }))
            .count()
    }
}

/// Walk order: descending key length in characters, discovery order on ties.
pub fn walk_order(table: &GroupTable) -> Vec<GroupKey> {
    let mut keys: Vec<GroupKey> = table
        .iter()
        .map(|(key, _)| GroupKey::parse(key))
        .collect();
    keys.sort_by(|a, b| b.text_len().cmp(&a.text_len()));
    keys
}

/// Single pass over a fixed candidate list. Each key is folded into its
/// superset when exactly one superset is still live; the merged-away key is
/// removed so it cannot absorb later keys.
pub fn merge_groups(mut table: GroupTable) -> Result<MergeOutcome> {
    let candidates = walk_order(&table);
    let resolver = OverlapResolver::new(&candidates);
    let mut decisions = Vec::with_capacity(candidates.len());

    for (idx, key) in candidates.iter().enumerate() {
        let fate = match resolver.resolve(idx, &table) {
            Overlap::None => KeyFate::Kept,
            Overlap::Ambiguous(n) => {
                debug!(key = key.as_str(), supersets = n, "ambiguous_group");
                KeyFate::Ambiguous { supersets: n }
            }
            Overlap::Unique(j) => {
                let target = candidates[j].as_str();
                let counts = table
                    .remove(key.as_str())
                    .with_context(|| format!("group '{}' missing from table", key.as_str()))?;
                table.add_into(target, &counts)?;
                debug!(key = key.as_str(), into = target, "group_merged");
                KeyFate::MergedInto(target.to_string())
            }
        };
        decisions.push(MergeDecision {
            key: key.as_str().to_string(),
            fate,
        });
    }

    Ok(MergeOutcome { table, decisions })
}
