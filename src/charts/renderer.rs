//! Static Chart Renderer
//! Writes bar and box charts as PNG files using plotters' bitmap backend.
//!
//! Layout for both charts:
//! 1. Title centered on top
//! 2. Industries along the x-axis, labels rotated 90 degrees
//! 3. Net worth on the y-axis with a horizontal grid

use crate::charts::{BarChart, BoxChart, ChartError, ChartSurface};
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub const BAR_CHART_FILE: &str = "industry_avg_net_worth.png";
pub const BOX_CHART_FILE: &str = "net_worth_distribution_by_industry.png";

// Colors
const BAR_COLOR: RGBColor = RGBColor(91, 155, 213);
const BOX_COLOR: RGBColor = RGBColor(237, 125, 49);
const POINT_COLOR: RGBColor = RGBColor(112, 173, 71);

/// Matches a 10x6 inch figure at 100 DPI.
const CANVAS: (u32, u32) = (1000, 600);
const X_LABEL_AREA: u32 = 160;
const Y_LABEL_AREA: u32 = 80;

fn render_err(e: impl std::fmt::Display) -> ChartError {
    ChartError::Render(e.to_string())
}

fn segment_label(value: &SegmentValue<&String>) -> String {
    match value {
        SegmentValue::Exact(label) | SegmentValue::CenterOf(label) => label.to_string(),
        SegmentValue::Last => String::new(),
    }
}

/// Renders charts into PNG files under an output directory.
pub struct PngSurface {
    out_dir: PathBuf,
    size: (u32, u32),
}

impl PngSurface {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            size: CANVAS,
        }
    }

    fn target(&self, file_name: &str) -> Result<PathBuf, ChartError> {
        fs::create_dir_all(&self.out_dir)?;
        Ok(self.out_dir.join(file_name))
    }

    /// Y-range padded by 15% of the span on each side.
    ///
    /// A single repeated value is padded by 15% of its magnitude instead.
    fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_infinite() {
            return (0.0, 1.0);
        }
        let span = max - min;
        let magnitude = min.abs().max(max.abs());
        let pad = if span > 0.0 {
            span * 0.15
        } else if magnitude > 0.0 {
            magnitude * 0.15
        } else {
            1.0
        };
        (min - pad, max + pad)
    }

    /// Bars grow from zero, so the range always includes it.
    fn bar_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
        let (low, high) = Self::value_range(values);
        (low.min(0.0), high.max(0.0))
    }
}

impl ChartSurface for PngSurface {
    fn draw_bar(&mut self, chart: &BarChart) -> Result<Option<PathBuf>, ChartError> {
        let path = self.target(BAR_CHART_FILE)?;
        Self::render_bar(&path, self.size, chart)?;
        log::info!("wrote {}", path.display());
        Ok(Some(path))
    }

    fn draw_box(&mut self, chart: &BoxChart) -> Result<Option<PathBuf>, ChartError> {
        let path = self.target(BOX_CHART_FILE)?;
        Self::render_box(&path, self.size, chart)?;
        log::info!("wrote {}", path.display());
        Ok(Some(path))
    }
}

impl PngSurface {
    fn render_bar(path: &Path, size: (u32, u32), chart: &BarChart) -> Result<(), ChartError> {
        let labels: Vec<String> = chart.bars.iter().map(|(label, _)| label.clone()).collect();
        let (bottom, top) = Self::bar_range(chart.bars.iter().map(|(_, v)| *v));

        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 24))
            .margin(15)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(labels[..].into_segmented(), bottom..top)
            .map_err(render_err)?;

        ctx.configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len())
            .x_label_formatter(&|v| segment_label(v))
            .x_label_style(
                ("sans-serif", 13)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .y_desc(&chart.y_label)
            .draw()
            .map_err(render_err)?;

        ctx.draw_series(
            Histogram::vertical(&ctx)
                .style(BAR_COLOR.filled())
                .margin(6)
                .data(
                    labels
                        .iter()
                        .zip(chart.bars.iter().map(|(_, v)| *v))
                        .filter(|(_, v)| v.is_finite()),
                ),
        )
        .map_err(render_err)?;

        root.present().map_err(render_err)
    }

    fn render_box(path: &Path, size: (u32, u32), chart: &BoxChart) -> Result<(), ChartError> {
        let labels: Vec<String> = chart.boxes.iter().map(|(label, _)| label.clone()).collect();
        let (low, high) =
            Self::value_range(chart.boxes.iter().flat_map(|(_, values)| values.iter().copied()));

        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        // Boxplot elements are drawn in f32 coordinates
        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 24))
            .margin(15)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(labels[..].into_segmented(), low as f32..high as f32)
            .map_err(render_err)?;

        ctx.configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len())
            .x_label_formatter(&|v| segment_label(v))
            .x_label_style(
                ("sans-serif", 13)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .y_desc(&chart.y_label)
            .draw()
            .map_err(render_err)?;

        ctx.draw_series(labels.iter().zip(chart.boxes.iter()).map(|(label, (_, values))| {
            let quartiles = Quartiles::new(values.as_slice());
            Boxplot::new_vertical(SegmentValue::CenterOf(label), &quartiles)
                .width(24)
                .whisker_width(0.5)
                .style(BOX_COLOR)
        }))
        .map_err(render_err)?;

        // Raw values on top of each box
        ctx.draw_series(
            labels
                .iter()
                .zip(chart.boxes.iter())
                .flat_map(|(label, (_, values))| {
                    values.iter().map(move |v| {
                        Circle::new(
                            (SegmentValue::CenterOf(label), *v as f32),
                            2,
                            POINT_COLOR.mix(0.6).filled(),
                        )
                    })
                }),
        )
        .map_err(render_err)?;

        root.present().map_err(render_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartPlotter;
    use crate::stats::{IndustryAverage, IndustryAverages, IndustryDistribution};
    use std::collections::BTreeMap;

    #[test]
    fn value_range_pads_both_sides() {
        let (low, high) = PngSurface::value_range([100.0, 200.0].into_iter());
        assert_eq!(low, 85.0);
        assert_eq!(high, 215.0);
    }

    #[test]
    fn value_range_ignores_nan_and_defaults() {
        assert_eq!(PngSurface::value_range([f64::NAN].into_iter()), (0.0, 1.0));
        assert_eq!(PngSurface::value_range([0.0].into_iter()), (-1.0, 1.0));
        let (low, high) = PngSurface::value_range([5.0, f64::NAN].into_iter());
        assert_eq!((low, high), (4.25, 5.75));
    }

    #[test]
    fn value_range_scales_with_small_spans() {
        let (low, high) = PngSurface::value_range([0.2, 0.3].into_iter());
        assert!((low - 0.185).abs() < 1e-12);
        assert!((high - 0.315).abs() < 1e-12);
    }

    #[test]
    fn bar_range_includes_zero() {
        assert_eq!(PngSurface::bar_range([10.0, 20.0].into_iter()), (0.0, 21.5));
        assert_eq!(PngSurface::bar_range([-50.0, 100.0].into_iter()), (-72.5, 122.5));
        let (low, high) = PngSurface::bar_range([-5.0, -1.0].into_iter());
        assert!((low + 5.6).abs() < 1e-12);
        assert_eq!(high, 0.0);
    }

    #[test]
    fn writes_both_chart_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = PngSurface::new(dir.path());

        let averages = IndustryAverages(vec![
            IndustryAverage {
                industry: "Finance".into(),
                count: 1,
                mean: 200.0,
            },
            IndustryAverage {
                industry: "Retail".into(),
                count: 1,
                mean: -20.0,
            },
            IndustryAverage {
                industry: "Tech".into(),
                count: 2,
                mean: 125.0,
            },
        ]);
        let mut groups = BTreeMap::new();
        groups.insert("Finance".to_string(), vec![200.0]);
        groups.insert("Retail".to_string(), vec![-20.0]);
        groups.insert("Tech".to_string(), vec![100.0, 150.0]);

        let bar = ChartPlotter::plot_industry_average(
            &mut surface,
            &averages,
            "Net Worth (in billions)",
        )
        .unwrap();
        let boxes = ChartPlotter::plot_distribution_by_industry(
            &mut surface,
            &IndustryDistribution(groups),
            "Net Worth (in billions)",
        )
        .unwrap();

        assert_eq!(bar, Some(dir.path().join(BAR_CHART_FILE)));
        assert_eq!(boxes, Some(dir.path().join(BOX_CHART_FILE)));
        for file in [BAR_CHART_FILE, BOX_CHART_FILE] {
            let meta = fs::metadata(dir.path().join(file)).unwrap();
            assert!(meta.len() > 0, "{file} is empty");
        }
    }

    #[test]
    fn target_creates_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let surface = PngSurface::new(dir.path().join("charts"));
        let path = surface.target(BAR_CHART_FILE).unwrap();
        assert!(dir.path().join("charts").is_dir());
        assert_eq!(path.file_name().unwrap(), BAR_CHART_FILE);
    }
}
