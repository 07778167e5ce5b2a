use plotters::style::RGBColor;

use fldist_core::prepare_points;
use fldist_core::utils::format_thousands;
use fldist_core::LengthDistribution;

pub mod colors {
    use plotters::style::RGBColor;

    pub const REFERENCE: RGBColor = RGBColor(0, 128, 0);
    pub const QUERY: RGBColor = RGBColor(128, 0, 128);
    pub const OUTPUT: RGBColor = RGBColor(135, 206, 235);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesStyle {
    /// Continuous line, stroke width in pixels.
    Line { width: u32 },
    /// One five-pointed star per point, outer radius in pixels.
    Stars { size: u32 },
}

///
/// One dataset as the renderer sees it: sorted `(length, frequency)` points.
///
#[derive(Debug, Clone)]
pub struct PlotSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub style: SeriesStyle,
}

impl PlotSeries {
    pub fn new<S: Into<String>>(
        label: S,
        points: Vec<(f64, f64)>,
        color: RGBColor,
        style: SeriesStyle,
    ) -> Self {
        PlotSeries {
            label: label.into(),
            points,
            color,
            style,
        }
    }
}

///
/// The three series of a rescaling comparison, in drawing order: reference
/// and original query as lines, rescaled output as stars on top.
///
/// `line_width` and `star_size` are pixel sizes for the reference line and
/// the stars; the query line is drawn slightly thinner.
pub fn comparison_series(
    reference: &LengthDistribution,
    query: &LengthDistribution,
    output: &LengthDistribution,
    line_width: u32,
    star_size: u32,
) -> Vec<PlotSeries> {
    let query_width = (line_width * 3 / 4).max(1);

    vec![
        PlotSeries::new(
            "Reference",
            prepare_points(reference.table()),
            colors::REFERENCE,
            SeriesStyle::Line { width: line_width },
        ),
        PlotSeries::new(
            format!(
                "Original Query (n={})",
                format_thousands(query.total_count())
            ),
            prepare_points(query.table()),
            colors::QUERY,
            SeriesStyle::Line { width: query_width },
        ),
        PlotSeries::new(
            format!(
                "Rescaled Output (n={})",
                format_thousands(output.total_count())
            ),
            prepare_points(output.table()),
            colors::OUTPUT,
            SeriesStyle::Stars { size: star_size },
        ),
    ]
}
