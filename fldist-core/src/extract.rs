//! The frequency extractor.
//!
//! One call reads one dataset in a single pass and turns it into a
//! [LengthDistribution]. Malformed lines are skipped without a trace; the
//! input is expected to be noisy.

use std::io::BufRead;
use std::path::Path;

use log::{debug, info, warn};

use crate::errors::{FldistError, Result};
use crate::models::{
    FragmentLength, LengthDistribution, LengthFrequencyTable, RawCountAccumulator, SourceFormat,
};
use crate::strategy::{LengthStrategy, StrategyChain};
use crate::utils::{get_dynamic_reader, is_skippable_line};

///
/// Read a dataset and compute its length distribution.
///
/// A missing file is not an error: a warning is logged and an empty
/// distribution with a total of 0 is returned.
///
/// # Arguments
/// - path: path to the source file
/// - compressed: whether the file is gzip compressed
/// - format: histogram or interval layout
///
pub fn extract(path: &Path, compressed: bool, format: SourceFormat) -> Result<LengthDistribution> {
    recover_missing(try_extract(path, compressed, format))
}

///
/// Same as [extract], but interval lengths are found with a custom chain of
/// strategies. Histogram sources ignore the chain.
///
pub fn extract_with(
    path: &Path,
    compressed: bool,
    format: SourceFormat,
    strategies: &StrategyChain,
) -> Result<LengthDistribution> {
    recover_missing(try_extract_with(path, compressed, format, strategies))
}

///
/// Like [extract], but a missing file is reported as [FldistError::SourceNotFound].
pub fn try_extract(
    path: &Path,
    compressed: bool,
    format: SourceFormat,
) -> Result<LengthDistribution> {
    try_extract_with(path, compressed, format, &StrategyChain::interval_default())
}

pub fn try_extract_with(
    path: &Path,
    compressed: bool,
    format: SourceFormat,
    strategies: &StrategyChain,
) -> Result<LengthDistribution> {
    info!("Reading {}...", path.display());

    let reader = get_dynamic_reader(path, compressed)?;

    let distribution = match format {
        SourceFormat::Histogram => read_histogram(reader)?,
        SourceFormat::Interval => read_intervals(reader, strategies)?,
    };

    debug!(
        "{}: {} distinct lengths, total count {}",
        path.display(),
        distribution.table().len(),
        distribution.total_count()
    );

    Ok(distribution)
}

fn recover_missing(result: Result<LengthDistribution>) -> Result<LengthDistribution> {
    match result {
        Err(FldistError::SourceNotFound(path)) => {
            warn!("Error: File {} not found.", path.display());
            Ok(LengthDistribution::empty())
        }
        other => other,
    }
}

///
/// Parse a `<length> <probability>` line. Trailing fields are ignored.
fn parse_histogram_line(fields: &[&str]) -> Option<(FragmentLength, f64)> {
    let length = fields.first()?.parse().ok()?;
    let probability = fields.get(1)?.parse().ok()?;
    Some((length, probability))
}

fn read_histogram<R: BufRead>(reader: R) -> Result<LengthDistribution> {
    let mut pairs: Vec<(FragmentLength, f64)> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if is_skippable_line(&line) {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if let Some(pair) = parse_histogram_line(&fields) {
            pairs.push(pair);
        }
    }

    let table: LengthFrequencyTable = pairs.into_iter().collect();
    Ok(LengthDistribution::AlreadyNormalized(table))
}

fn read_intervals<R: BufRead>(reader: R, strategies: &StrategyChain) -> Result<LengthDistribution> {
    let mut acc = RawCountAccumulator::new();

    for line in reader.lines() {
        let line = line?;
        if is_skippable_line(&line) {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if let Some(length) = strategies.length(&fields) {
            acc.record(length);
        }
    }

    let (table, total) = acc.into_frequencies();
    Ok(LengthDistribution::RawCounts { table, total })
}
