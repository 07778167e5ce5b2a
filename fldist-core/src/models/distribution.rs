use super::table::LengthFrequencyTable;

///
/// The outcome of reading one dataset.
///
/// Histogram sources are already probabilities and must not be divided again,
/// interval sources carry the number of records their frequencies came from.
///
#[derive(Clone, Debug, PartialEq)]
pub enum LengthDistribution {
    AlreadyNormalized(LengthFrequencyTable),
    RawCounts {
        table: LengthFrequencyTable,
        total: u64,
    },
}

impl LengthDistribution {
    /// The distribution of a source that could not be found.
    pub fn empty() -> Self {
        LengthDistribution::RawCounts {
            table: LengthFrequencyTable::default(),
            total: 0,
        }
    }

    pub fn table(&self) -> &LengthFrequencyTable {
        match self {
            LengthDistribution::AlreadyNormalized(table) => table,
            LengthDistribution::RawCounts { table, .. } => table,
        }
    }

    pub fn into_table(self) -> LengthFrequencyTable {
        match self {
            LengthDistribution::AlreadyNormalized(table) => table,
            LengthDistribution::RawCounts { table, .. } => table,
        }
    }

    ///
    /// Record count in the shape legends expect: the number of accepted records
    /// for raw counts, and 1 for a non-empty pre-normalized table (0 if empty).
    pub fn total_count(&self) -> u64 {
        match self {
            LengthDistribution::AlreadyNormalized(table) if table.is_empty() => 0,
            LengthDistribution::AlreadyNormalized(_) => 1,
            LengthDistribution::RawCounts { total, .. } => *total,
        }
    }

    pub fn is_normalized(&self) -> bool {
        matches!(self, LengthDistribution::AlreadyNormalized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_empty_distribution() {
        let dist = LengthDistribution::empty();
        assert_eq!(dist.total_count(), 0);
        assert!(dist.table().is_empty());
        assert!(!dist.is_normalized());
    }

    #[rstest]
    fn test_normalized_total_count() {
        let table: LengthFrequencyTable = vec![(100, 0.7), (200, 0.3)].into_iter().collect();
        let dist = LengthDistribution::AlreadyNormalized(table);
        assert_eq!(dist.total_count(), 1);

        let empty = LengthDistribution::AlreadyNormalized(LengthFrequencyTable::default());
        assert_eq!(empty.total_count(), 0);
    }
}
