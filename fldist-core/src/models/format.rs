use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

///
/// The layout of a fragment length source file.
///
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// `<length> <probability> [ignored...]`, already a distribution.
    #[serde(alias = "hist")]
    Histogram,
    /// BED-like interval records, the length sits in a fixed column.
    #[serde(alias = "bed")]
    Interval,
}

impl FromStr for SourceFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "histogram" | "hist" => Ok(SourceFormat::Histogram),
            "interval" | "bed" => Ok(SourceFormat::Interval),
            _ => Err(ConfigError::InvalidSourceFormat(s.to_string())),
        }
    }
}

impl Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Histogram => write!(f, "histogram"),
            SourceFormat::Interval => write!(f, "interval"),
        }
    }
}
