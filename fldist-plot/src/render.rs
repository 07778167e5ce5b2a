//! PNG rendering of comparison charts using the [`plotters`] bitmap backend.

use std::f64::consts::PI;
use std::fs;
use std::ops::Range;
use std::path::Path;

use log::debug;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use fldist_core::PlotConfig;

use crate::errors::{PlotError, Result};
use crate::series::{PlotSeries, SeriesStyle};

/// Height the font sizes below are tuned for; other heights scale them.
const BASE_HEIGHT: f64 = 800.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: Range<f64>,
    pub width: u32,
    pub height: u32,
}

impl PlotOptions {
    fn scale(&self) -> f64 {
        self.height as f64 / BASE_HEIGHT
    }

    fn px(&self, size: f64) -> f64 {
        (size * self.scale()).max(1.0)
    }

    /// Reference line width in pixels at this resolution.
    pub fn line_width(&self) -> u32 {
        self.px(3.0).round() as u32
    }

    /// Star outer radius in pixels at this resolution.
    pub fn star_size(&self) -> u32 {
        self.px(7.0).round() as u32
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PlotError::InvalidOptions(format!(
                "Image size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.x_range.start < self.x_range.end) {
            return Err(PlotError::InvalidOptions(format!(
                "x-axis range is empty: {}..{}",
                self.x_range.start, self.x_range.end
            )));
        }
        Ok(())
    }
}

impl From<&PlotConfig> for PlotOptions {
    fn from(config: &PlotConfig) -> Self {
        PlotOptions {
            title: config.title.clone(),
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            x_range: config.x_min..config.x_max,
            width: config.width,
            height: config.height,
        }
    }
}

///
/// Vertices of a five-pointed star centred on (0, 0), first point up.
pub fn star_vertices(size: u32) -> Vec<(i32, i32)> {
    let outer = size as f64;
    let inner = outer * 0.4;

    (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = -PI / 2.0 + i as f64 * PI / 5.0;
            (
                (radius * angle.cos()).round() as i32,
                (radius * angle.sin()).round() as i32,
            )
        })
        .collect()
}

fn in_range(points: &[(f64, f64)], x_range: &Range<f64>) -> Vec<(f64, f64)> {
    points
        .iter()
        .copied()
        .filter(|(x, _)| x_range.contains(x) || *x == x_range.end)
        .collect()
}

///
/// Y-axis range covering every visible point with 5% headroom.
///
/// Always includes 0, so it only goes below when a histogram carries
/// negative values. With nothing visible (or all zeros) the range is 0..1.
pub fn y_axis_range(series: &[PlotSeries], x_range: &Range<f64>) -> Range<f64> {
    let ys: Vec<f64> = series
        .iter()
        .flat_map(|s| in_range(&s.points, x_range))
        .map(|(_, y)| y)
        .filter(|y| y.is_finite())
        .collect();

    if ys.is_empty() {
        return 0.0..1.0;
    }

    let y_min = ys.iter().copied().fold(0.0, f64::min);
    let y_max = ys.iter().copied().fold(0.0, f64::max);

    if y_max <= y_min {
        return 0.0..1.0;
    }

    y_min * 1.05..y_max * 1.05
}

///
/// Draw each series and register its legend entry; no text is drawn here.
///
/// Points outside `x_range` are dropped. `legend_span` is the width in pixels
/// of the legend sample.
pub fn draw_series_on<'a, DB: DrawingBackend + 'a>(
    chart_context: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    series: &[PlotSeries],
    x_range: &Range<f64>,
    legend_span: i32,
) -> Result<()> {
    for s in series {
        let color = s.color;
        let points = in_range(&s.points, x_range);

        match s.style {
            SeriesStyle::Line { width } => {
                let style = color.mix(0.8).stroke_width(width);
                chart_context
                    .draw_series(LineSeries::new(points, style))
                    .map_err(|e| PlotError::Drawing(e.to_string()))?
                    .label(&s.label)
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + legend_span, y)], style)
                    });
            }
            SeriesStyle::Stars { size } => {
                let style = color.filled();
                chart_context
                    .draw_series(points.into_iter().map(|point| {
                        EmptyElement::at(point) + Polygon::new(star_vertices(size), style)
                    }))
                    .map_err(|e| PlotError::Drawing(e.to_string()))?
                    .label(&s.label)
                    .legend(move |(x, y)| {
                        EmptyElement::at((x + legend_span / 2, y))
                            + Polygon::new(star_vertices(size), style)
                    });
            }
        }
    }

    Ok(())
}

///
/// Draw the series onto one chart and save it as a PNG file.
///
/// Series are drawn in order, so later ones sit on top. Points outside the
/// x-axis range are left out; empty series still get a legend entry.
///
/// # Arguments
/// * `series` - the datasets to draw
/// * `options` - title, axis labels, x-axis range and image size
/// * `output_path` - where to write the PNG; parent directories are created
///
pub fn render_comparison(
    series: &[PlotSeries],
    options: &PlotOptions,
    output_path: &Path,
) -> Result<()> {
    options.validate()?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| PlotError::CreateOutputDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let root = BitMapBackend::new(output_path, (options.width, options.height));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let y_range = y_axis_range(series, &options.x_range);
    debug!(
        "Plotting {} series, x {:?}, y {:?}",
        series.len(),
        options.x_range,
        y_range
    );

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(&options.title, ("sans-serif", options.px(32.0)))
        .margin(options.px(20.0) as u32)
        .x_label_area_size(options.px(60.0) as u32)
        .y_label_area_size(options.px(85.0) as u32)
        .build_cartesian_2d(options.x_range.clone(), y_range)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .x_desc(&options.x_label)
        .y_desc(&options.y_label)
        .axis_desc_style(("sans-serif", options.px(26.0)))
        .label_style(("sans-serif", options.px(20.0)))
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.3}", y))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    draw_series_on(
        &mut chart_context,
        series,
        &options.x_range,
        options.px(24.0) as i32,
    )?;

    chart_context
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", options.px(20.0)))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.4))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::series::colors;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn options() -> PlotOptions {
        PlotOptions::from(&PlotConfig::default())
    }

    #[rstest]
    fn test_star_vertices_shape() {
        let vertices = star_vertices(10);
        assert_eq!(vertices.len(), 10);
        assert_eq!(vertices[0], (0, -10));
        // inner vertices sit at 40% of the outer radius
        let (x, y) = vertices[1];
        let r = ((x * x + y * y) as f64).sqrt();
        assert!((r - 4.0).abs() < 1.0);
    }

    #[rstest]
    fn test_y_axis_range_ignores_points_outside_x_range() {
        let series = vec![PlotSeries::new(
            "a",
            vec![(100.0, 0.2), (500.0, 0.4), (900.0, 0.9)],
            colors::QUERY,
            SeriesStyle::Line { width: 1 },
        )];

        let range = y_axis_range(&series, &(0.0..700.0));
        assert_eq!(range.start, 0.0);
        assert!((range.end - 0.42).abs() < 1e-12);
    }

    #[rstest]
    fn test_y_axis_range_without_points() {
        let series = vec![PlotSeries::new(
            "empty",
            vec![],
            colors::OUTPUT,
            SeriesStyle::Stars { size: 3 },
        )];
        assert_eq!(y_axis_range(&series, &(0.0..700.0)), 0.0..1.0);
    }

    #[rstest]
    fn test_options_from_default_config() {
        let options = options();
        assert_eq!(options.x_range, 0.0..700.0);
        assert_eq!((options.width, options.height), (3600, 1800));
        assert!(options.line_width() > 1);
        assert!(options.star_size() > options.line_width());
    }

    #[rstest]
    fn test_invalid_options_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut options = options();
        options.x_range = 700.0..0.0;

        let result = render_comparison(&[], &options, &dir.path().join("plot.png"));
        assert!(matches!(result, Err(PlotError::InvalidOptions(_))));
    }

    #[rstest]
    fn test_series_are_drawn_without_text() {
        let (width, height) = (300u32, 150u32);
        let mut buffer = vec![0u8; (width * height * 3) as usize];

        let series = vec![
            PlotSeries::new(
                "Reference",
                vec![(50.0, 0.1), (350.0, 0.9), (650.0, 0.1)],
                colors::REFERENCE,
                SeriesStyle::Line { width: 3 },
            ),
            PlotSeries::new(
                "Rescaled Output (n=2)",
                vec![(200.0, 0.5), (900.0, 0.5)],
                colors::OUTPUT,
                SeriesStyle::Stars { size: 8 },
            ),
        ];

        {
            let area = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            area.fill(&WHITE).unwrap();
            let mut chart = ChartBuilder::on(&area)
                .build_cartesian_2d(0.0..700.0, 0.0..1.0)
                .unwrap();

            draw_series_on(&mut chart, &series, &(0.0..700.0), 10).unwrap();
            area.present().unwrap();
        }

        let pixels: Vec<&[u8]> = buffer.chunks(3).collect();
        // stars are filled with the exact series colour
        let sky_blue = [colors::OUTPUT.0, colors::OUTPUT.1, colors::OUTPUT.2];
        assert!(pixels.iter().any(|px| *px == sky_blue));
        // the line is a translucent green over white
        assert!(pixels.iter().any(|px| {
            let (r, g, b) = (px[0] as i32, px[1] as i32, px[2] as i32);
            g > r + 50 && g > b + 50
        }));
    }

    #[rstest]
    fn test_output_directory_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();

        let result = render_comparison(&[], &options(), &blocker.join("plot.png"));
        assert!(matches!(
            result,
            Err(PlotError::CreateOutputDir { ref path, .. }) if *path == blocker
        ));
    }

    #[rstest]
    #[ignore = "Text rendering needs system fonts"]
    fn test_render_comparison_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plots/comparison.png");

        let mut options = options();
        options.width = 1200;
        options.height = 600;

        let series = vec![
            PlotSeries::new(
                "Reference",
                vec![(100.0, 0.3), (167.0, 0.5), (334.0, 0.2)],
                colors::REFERENCE,
                SeriesStyle::Line { width: 2 },
            ),
            PlotSeries::new(
                "Original Query (n=0)",
                vec![],
                colors::QUERY,
                SeriesStyle::Line { width: 2 },
            ),
            PlotSeries::new(
                "Rescaled Output (n=3)",
                vec![(167.0, 0.66), (334.0, 0.33), (800.0, 0.01)],
                colors::OUTPUT,
                SeriesStyle::Stars { size: 8 },
            ),
        ];

        render_comparison(&series, &options, &path).unwrap();
        assert!(path.is_file());
    }
}
