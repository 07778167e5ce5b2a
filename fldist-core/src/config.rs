use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::SourceFormat;

pub mod consts {
    pub const REF_FILE: &str = "reference.hist";
    pub const QUERY_FILE: &str = "query.bed.gz";
    pub const OUTPUT_FILE: &str = "query.rescaled.bed";
    pub const OUTPUT_IMAGE: &str = "final_result_plot.png";

    pub const PLOT_TITLE: &str = "Fragment Length Distribution: Rescaling Results";
    pub const X_LABEL: &str = "Fragment Length (bp)";
    pub const Y_LABEL: &str = "Normalized Frequency";
    pub const X_MIN: f64 = 0.0;
    pub const X_MAX: f64 = 700.0;

    // 12x6 inches at 300 dpi
    pub const PLOT_WIDTH: u32 = 3600;
    pub const PLOT_HEIGHT: u32 = 1800;
}

///
/// Where one dataset lives and how to read it.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub compressed: bool,
    pub format: SourceFormat,
}

impl DatasetConfig {
    pub fn new<P: Into<PathBuf>>(path: P, compressed: bool, format: SourceFormat) -> Self {
        DatasetConfig {
            path: path.into(),
            compressed,
            format,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlotConfig {
    pub image: PathBuf,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_min: f64,
    pub x_max: f64,
    pub width: u32,
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            image: PathBuf::from(consts::OUTPUT_IMAGE),
            title: consts::PLOT_TITLE.to_string(),
            x_label: consts::X_LABEL.to_string(),
            y_label: consts::Y_LABEL.to_string(),
            x_min: consts::X_MIN,
            x_max: consts::X_MAX,
            width: consts::PLOT_WIDTH,
            height: consts::PLOT_HEIGHT,
        }
    }
}

///
/// Everything a comparison run needs: the three datasets and the plot.
///
/// Any key missing from a TOML file keeps its default. For a dataset section
/// that is the default of that dataset, so `[query]` with only a `path`
/// still reads gzip compressed intervals.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(from = "CompareConfigFile")]
pub struct CompareConfig {
    pub reference: DatasetConfig,
    pub query: DatasetConfig,
    pub output: DatasetConfig,
    pub plot: PlotConfig,
}

impl Default for CompareConfig {
    fn default() -> Self {
        CompareConfig {
            reference: DatasetConfig::new(consts::REF_FILE, false, SourceFormat::Histogram),
            query: DatasetConfig::new(consts::QUERY_FILE, true, SourceFormat::Interval),
            output: DatasetConfig::new(consts::OUTPUT_FILE, false, SourceFormat::Interval),
            plot: PlotConfig::default(),
        }
    }
}

/// A dataset section as written in TOML, every key optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct DatasetSection {
    path: Option<PathBuf>,
    compressed: Option<bool>,
    format: Option<SourceFormat>,
}

impl DatasetSection {
    fn over(self, default: DatasetConfig) -> DatasetConfig {
        DatasetConfig {
            path: self.path.unwrap_or(default.path),
            compressed: self.compressed.unwrap_or(default.compressed),
            format: self.format.unwrap_or(default.format),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct CompareConfigFile {
    reference: DatasetSection,
    query: DatasetSection,
    output: DatasetSection,
    plot: PlotConfig,
}

impl From<CompareConfigFile> for CompareConfig {
    fn from(file: CompareConfigFile) -> Self {
        let defaults = CompareConfig::default();
        CompareConfig {
            reference: file.reference.over(defaults.reference),
            query: file.query.over(defaults.query),
            output: file.output.over(defaults.output),
            plot: file.plot,
        }
    }
}

impl TryFrom<&Path> for CompareConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}
