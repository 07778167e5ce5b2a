use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::info;

use fldist_core::{CompareConfig, DatasetConfig, LengthDistribution, extract};
use fldist_plot::{PlotOptions, comparison_series, render_comparison};

use super::cli::*;

pub fn run_compare(matches: &ArgMatches) -> Result<()> {
    let config = config_from_matches(matches)?;
    compare(&config)
}

///
/// Start from the TOML config (or the defaults) and apply path overrides.
pub fn config_from_matches(matches: &ArgMatches) -> Result<CompareConfig> {
    let mut config = match matches.get_one::<String>(CONFIG_ARG) {
        Some(path) => CompareConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => CompareConfig::default(),
    };

    if let Some(path) = matches.get_one::<String>(REFERENCE_ARG) {
        config.reference.path = PathBuf::from(path);
    }
    if let Some(path) = matches.get_one::<String>(QUERY_ARG) {
        config.query.path = PathBuf::from(path);
    }
    if let Some(path) = matches.get_one::<String>(OUTPUT_ARG) {
        config.output.path = PathBuf::from(path);
    }
    if let Some(path) = matches.get_one::<String>(IMAGE_ARG) {
        config.plot.image = PathBuf::from(path);
    }

    Ok(config)
}

fn read_dataset(dataset: &DatasetConfig) -> Result<LengthDistribution> {
    extract(&dataset.path, dataset.compressed, dataset.format)
        .with_context(|| format!("Failed to read {}", dataset.path.display()))
}

///
/// Progress over the datasets of a run. Drawn on stderr, so it stays out of
/// the log on stdout and is hidden when stderr is not a terminal.
pub fn dataset_progress_bar(n_datasets: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::with_draw_target(Some(n_datasets), ProgressDrawTarget::stderr());
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} datasets")?
            .progress_chars("##-"),
    );
    Ok(pb)
}

///
/// Read the reference, query and output datasets and plot them together.
///
/// Missing datasets become empty series; only unreadable data or a failed
/// render stops the run.
pub fn compare(config: &CompareConfig) -> Result<()> {
    let pb = dataset_progress_bar(3)?;

    let reference = read_dataset(&config.reference)?;
    pb.inc(1);
    let query = read_dataset(&config.query)?;
    pb.inc(1);
    let output = read_dataset(&config.output)?;
    pb.inc(1);
    pb.finish_and_clear();

    info!("Generating plot...");

    let options = PlotOptions::from(&config.plot);
    let series = comparison_series(
        &reference,
        &query,
        &output,
        options.line_width(),
        options.star_size(),
    );

    render_comparison(&series, &options, &config.plot.image)
        .with_context(|| format!("Failed to save plot to {}", config.plot.image.display()))?;

    info!("Done! Plot saved to '{}'", config.plot.image.display());

    Ok(())
}
