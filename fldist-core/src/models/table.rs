use std::collections::hash_map;

use fxhash::FxHashMap;

/// Fragment size in base pairs. Anything an integer parse accepts is kept as is.
pub type FragmentLength = i64;

///
/// Mapping from fragment length to its frequency within one dataset.
///
/// Built once per dataset and not mutated afterwards; use [crate::prepare]
/// to get the lengths in ascending order.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LengthFrequencyTable {
    frequencies: FxHashMap<FragmentLength, f64>,
}

impl LengthFrequencyTable {
    pub fn get(&self, length: FragmentLength) -> Option<f64> {
        self.frequencies.get(&length).copied()
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, FragmentLength, f64> {
        self.frequencies.iter()
    }

    /// Sum of all frequencies; 1.0 for a normalized raw-count table.
    pub fn total_frequency(&self) -> f64 {
        self.frequencies.values().sum()
    }
}

impl FromIterator<(FragmentLength, f64)> for LengthFrequencyTable {
    /// Later pairs for the same length replace earlier ones.
    fn from_iter<I: IntoIterator<Item = (FragmentLength, f64)>>(iter: I) -> Self {
        LengthFrequencyTable {
            frequencies: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LengthFrequencyTable {
    type Item = (&'a FragmentLength, &'a f64);
    type IntoIter = hash_map::Iter<'a, FragmentLength, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

///
/// Running per-length counts for a single read pass.
///
#[derive(Debug, Default)]
pub struct RawCountAccumulator {
    counts: FxHashMap<FragmentLength, u64>,
    total: u64,
}

impl RawCountAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, length: FragmentLength) {
        *self.counts.entry(length).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn count(&self, length: FragmentLength) -> u64 {
        self.counts.get(&length).copied().unwrap_or(0)
    }

    ///
    /// Divide every count by the total number of accepted records.
    ///
    /// Returns the table together with the total; the table is empty when
    /// nothing was recorded.
    pub fn into_frequencies(self) -> (LengthFrequencyTable, u64) {
        let total = self.total;
        if total == 0 {
            return (LengthFrequencyTable::default(), 0);
        }

        let table = self
            .counts
            .into_iter()
            .map(|(length, count)| (length, count as f64 / total as f64))
            .collect();

        (table, total)
    }
}
