//! Count tables shared by the aggregations.
//!
//! Two tie-break policies exist and both are deterministic:
//!
//! - sender rankings: count descending, then name ascending
//!   ([`rank_by_count`]);
//! - word and emoji tables: count descending, then first occurrence in the
//!   export ([`FrequencyTable`]).

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// One row of a count table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Count<K> {
    pub key: K,
    pub count: usize,
}

impl<K> Count<K> {
    pub fn new(key: K, count: usize) -> Self {
        Self { key, count }
    }
}

/// Sorts accumulated counts by count descending, name ascending.
pub fn rank_by_count(counts: BTreeMap<String, usize>) -> Vec<Count<String>> {
    let mut ranked: Vec<Count<String>> = counts
        .into_iter()
        .map(|(key, count)| Count::new(key, count))
        .collect();
    // BTreeMap yields names ascending; the stable sort keeps that for ties
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Frequency table ordered by count descending, ties by first occurrence.
///
/// # Example
///
/// ```rust
/// use chatstat::analysis::FrequencyTable;
///
/// let table = FrequencyTable::from_occurrences(["b", "a", "a", "c", "b"]);
/// let keys: Vec<&str> = table.entries().iter().map(|c| c.key.as_str()).collect();
/// assert_eq!(keys, ["b", "a", "c"]);
/// assert_eq!(table.get("a"), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<Count<String>>,
}

impl FrequencyTable {
    /// Builds a table from items in encounter order.
    pub fn from_occurrences<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<Count<String>> = Vec::new();

        for item in items {
            let item = item.as_ref();
            match index.get(item) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(item.to_string(), entries.len());
                    entries.push(Count::new(item.to_string(), 1));
                }
            }
        }

        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    /// Full table.
    pub fn entries(&self) -> &[Count<String>] {
        &self.entries
    }

    /// The first `n` rows (fewer if the table is shorter).
    pub fn top(&self, n: usize) -> &[Count<String>] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Count for `key`, if present.
    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries.iter().find(|c| c.key == key).map(|c| c.count)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|c| c.count).sum()
    }
}
