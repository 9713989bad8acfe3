use std::collections::HashSet;

pub const GENE_DELIMITER: char = '_';

pub fn genes_of(key: &str) -> HashSet<&str> {
    key.split(GENE_DELIMITER).collect()
}

/// True when every gene of `a` also appears in `b` and the two keys differ as text.
///
/// Set inclusion is non-strict, so two keys listing the same genes in a
/// different order are subsets of each other.
pub fn is_strict_subset(a: &str, b: &str) -> bool {
    GroupKey::parse(a).is_strict_subset_of(&GroupKey::parse(b))
}

/// A group key with its gene set parsed once.
#[derive(Debug, Clone)]
pub struct GroupKey {
    text: String,
    genes: HashSet<String>,
}

impl GroupKey {
    pub fn parse(text: &str) -> Self {
        let genes = genes_of(text).into_iter().map(String::from).collect();
        Self {
            text: text.to_string(),
            genes,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn gene_count(&self) -> usize {
        self.genes.len()
    }

    pub fn is_multi_gene(&self) -> bool {
        self.text.contains(GENE_DELIMITER)
    }

    /// Length used to order the merge walk, in characters.
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_strict_subset_of(&self, other: &GroupKey) -> bool {
        self.text != other.text && self.genes.is_subset(&other.genes)
    }
}
