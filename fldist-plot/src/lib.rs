//! Comparison plots for fragment length distributions.
//!
//! Charts are saved as PNG files through the [`plotters`] bitmap backend.

pub mod errors;
pub mod render;
pub mod series;

// re-exports
pub use errors::PlotError;
pub use render::{PlotOptions, draw_series_on, render_comparison};
pub use series::{PlotSeries, SeriesStyle, colors, comparison_series};
