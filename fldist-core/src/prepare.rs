use crate::models::{FragmentLength, LengthFrequencyTable};

///
/// Turn a table into plot-ready series: lengths in ascending order and the
/// frequencies aligned to them by position.
///
/// An empty table gives two empty vectors.
pub fn prepare(table: &LengthFrequencyTable) -> (Vec<FragmentLength>, Vec<f64>) {
    let mut pairs: Vec<(FragmentLength, f64)> = table.iter().map(|(&l, &f)| (l, f)).collect();
    pairs.sort_unstable_by_key(|&(length, _)| length);
    pairs.into_iter().unzip()
}

///
/// [prepare], zipped into `(x, y)` points for the renderer.
pub fn prepare_points(table: &LengthFrequencyTable) -> Vec<(f64, f64)> {
    let (lengths, frequencies) = prepare(table);
    lengths
        .into_iter()
        .zip(frequencies)
        .map(|(l, f)| (l as f64, f))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_prepare_sorts_and_aligns() {
        let table: LengthFrequencyTable = vec![(300, 0.2), (100, 0.5), (200, 0.3)]
            .into_iter()
            .collect();

        let (lengths, frequencies) = prepare(&table);
        assert_eq!(lengths, vec![100, 200, 300]);
        assert_eq!(frequencies, vec![0.5, 0.3, 0.2]);
    }

    #[rstest]
    fn test_prepare_empty() {
        let (lengths, frequencies) = prepare(&LengthFrequencyTable::default());
        assert!(lengths.is_empty());
        assert!(frequencies.is_empty());
    }

    #[rstest]
    fn test_prepare_orders_numerically() {
        let table: LengthFrequencyTable = vec![(1000, 0.1), (-5, 0.2), (99, 0.7)]
            .into_iter()
            .collect();
        let (lengths, _) = prepare(&table);
        assert_eq!(lengths, vec![-5, 99, 1000]);
    }

    #[rstest]
    fn test_prepare_points() {
        let table: LengthFrequencyTable = vec![(150, 0.25), (90, 0.75)].into_iter().collect();
        assert_eq!(prepare_points(&table), vec![(90.0, 0.75), (150.0, 0.25)]);
    }
}
