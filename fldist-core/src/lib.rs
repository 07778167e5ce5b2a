//! Fragment length distributions for genomic interval datasets.
//!
//! Reads three kinds of sources into length -> frequency tables:
//!
//! - precomputed histograms (`<length> <probability>` per line), taken as is
//! - BED-like interval files (plain or gzip), where the length is found in
//!   column 3 or, failing that, column 4, and counts are normalized
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use fldist_core::{extract, prepare, SourceFormat};
//!
//! let dist = extract(Path::new("query.bed.gz"), true, SourceFormat::Interval).unwrap();
//! let (lengths, frequencies) = prepare(dist.table());
//! println!("{} records over {} lengths", dist.total_count(), lengths.len());
//! ```

pub mod config;
pub mod errors;
pub mod extract;
pub mod models;
pub mod prepare;
pub mod strategy;
pub mod utils;

// re-exports
pub use config::{CompareConfig, DatasetConfig, PlotConfig};
pub use errors::{ConfigError, FldistError};
pub use extract::{extract, extract_with, try_extract, try_extract_with};
pub use models::{FragmentLength, LengthDistribution, LengthFrequencyTable, SourceFormat};
pub use prepare::{prepare, prepare_points};
pub use strategy::{ColumnStrategy, LengthStrategy, StrategyChain};
