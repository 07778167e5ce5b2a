//! Ordered length-extraction strategies for interval records.
//!
//! Interval files in the wild disagree on where the fragment length lives.
//! Each [LengthStrategy] looks at the whitespace split fields of one line and
//! either yields a length or gives up; a [StrategyChain] tries them in order.

use crate::models::FragmentLength;

pub trait LengthStrategy {
    fn length(&self, fields: &[&str]) -> Option<FragmentLength>;
}

impl<F> LengthStrategy for F
where
    F: Fn(&[&str]) -> Option<FragmentLength>,
{
    fn length(&self, fields: &[&str]) -> Option<FragmentLength> {
        self(fields)
    }
}

///
/// Parse the field at a fixed (0-based) index as the length.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnStrategy(pub usize);

impl LengthStrategy for ColumnStrategy {
    fn length(&self, fields: &[&str]) -> Option<FragmentLength> {
        fields.get(self.0).and_then(|f| f.parse().ok())
    }
}

pub struct StrategyChain {
    strategies: Vec<Box<dyn LengthStrategy>>,
}

impl StrategyChain {
    pub fn new() -> Self {
        StrategyChain {
            strategies: Vec::new(),
        }
    }

    pub fn with<S: LengthStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    ///
    /// The interval chain: column 3, then column 4.
    pub fn interval_default() -> Self {
        StrategyChain::new()
            .with(ColumnStrategy(3))
            .with(ColumnStrategy(4))
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for StrategyChain {
    fn default() -> Self {
        StrategyChain::interval_default()
    }
}

impl LengthStrategy for StrategyChain {
    fn length(&self, fields: &[&str]) -> Option<FragmentLength> {
        self.strategies.iter().find_map(|s| s.length(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn split(line: &str) -> Vec<&str> {
        line.split_whitespace().collect()
    }

    #[rstest]
    #[case("chr1 0 100 150", Some(150))]
    #[case("chr1 0 100", None)]
    #[case("chr1 0 100 abc", None)]
    #[case("chr1 0 100 -7", Some(-7))]
    fn test_column_strategy(#[case] line: &str, #[case] expected: Option<FragmentLength>) {
        assert_eq!(ColumnStrategy(3).length(&split(line)), expected);
    }

    #[rstest]
    #[case("chr1 0 100 150", Some(150))]
    #[case("chr1 0 100 150 99", Some(150))]
    #[case("chr1 0 100 name 175", Some(175))]
    #[case("chr1 0 100 1.5 175", Some(175))]
    #[case("chr1 0 100 name strand", None)]
    #[case("chr1 0 100", None)]
    fn test_interval_default_chain(#[case] line: &str, #[case] expected: Option<FragmentLength>) {
        let chain = StrategyChain::interval_default();
        assert_eq!(chain.length(&split(line)), expected);
    }

    #[rstest]
    fn test_closure_strategy_end_minus_start() {
        let chain = StrategyChain::new().with(|fields: &[&str]| {
            let start: FragmentLength = fields.get(1)?.parse().ok()?;
            let end: FragmentLength = fields.get(2)?.parse().ok()?;
            Some(end - start)
        });

        assert_eq!(chain.len(), 1);
        assert_eq!(chain.length(&split("chr1 100 250")), Some(150));
        assert_eq!(chain.length(&split("chr1 x 250")), None);
    }

    #[rstest]
    fn test_empty_chain_yields_nothing() {
        let chain = StrategyChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.length(&split("chr1 0 100 150")), None);
    }
}
