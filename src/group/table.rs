use std::collections::HashMap;

use anyhow::{Result, bail};

pub type Counts = Vec<u64>;

/// Group key text to per-sample counts, iterated in discovery order.
#[derive(Debug, Clone, Default)]
pub struct GroupTable {
    width: Option<usize>,
    order: Vec<String>,
    rows: HashMap<String, Counts>,
}

impl GroupTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(width: usize) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    /// Inserts or replaces a row. Returns true when the key was already present,
    /// in which case it keeps its original position.
    pub fn insert(&mut self, key: &str, counts: Counts) -> Result<bool> {
        match self.width {
            Some(w) if w != counts.len() => {
                bail!(
                    "row width mismatch for '{}': {} != {}",
                    key,
                    counts.len(),
                    w
                );
            }
            Some(_) => {}
            None => self.width = Some(counts.len()),
        }
        if self.rows.insert(key.to_string(), counts).is_some() {
            return Ok(true);
        }
        self.order.push(key.to_string());
        Ok(false)
    }

    pub fn get(&self, key: &str) -> Option<&Counts> {
        self.rows.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.rows.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Counts> {
        self.rows.remove(key)
    }

    /// Adds `counts` elementwise into the row stored under `key`.
    pub fn add_into(&mut self, key: &str, counts: &[u64]) -> Result<()> {
        let Some(row) = self.rows.get_mut(key) else {
            bail!("merge target '{}' is not present", key);
        };
        if row.len() != counts.len() {
            bail!(
                "row width mismatch merging into '{}': {} != {}",
                key,
                counts.len(),
                row.len()
            );
        }
        for (dst, src) in row.iter_mut().zip(counts) {
            *dst = dst
                .checked_add(*src)
                .ok_or_else(|| anyhow::anyhow!("count overflow merging into '{}'", key))?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Live rows in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Counts)> {
        self.order
            .iter()
            .filter_map(|k| self.rows.get(k).map(|row| (k.as_str(), row)))
    }
}
