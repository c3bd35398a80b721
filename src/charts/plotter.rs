//! Chart Plotter Module
//! Turns computed aggregates into chart descriptions and hands them to a surface.

use crate::stats::{IndustryAverages, IndustryDistribution};
use std::path::PathBuf;
use thiserror::Error;

pub const AVERAGE_CHART_TITLE: &str = "Average Net Worth by Industry";
pub const DISTRIBUTION_CHART_TITLE: &str = "Net Worth Distribution by Industry";

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("No data to plot for {0}.")]
    NoData(&'static str),
    #[error("Failed to prepare chart output: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to render chart: {0}")]
    Render(String),
}

/// Bar chart: one bar per category.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub y_label: String,
    pub bars: Vec<(String, f64)>,
}

/// Box chart: one box per category over its raw values.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChart {
    pub title: String,
    pub y_label: String,
    pub boxes: Vec<(String, Vec<f64>)>,
}

/// Where charts end up. Returns the location written, if any.
pub trait ChartSurface {
    fn draw_bar(&mut self, chart: &BarChart) -> Result<Option<PathBuf>, ChartError>;
    fn draw_box(&mut self, chart: &BoxChart) -> Result<Option<PathBuf>, ChartError>;
}

/// Creates the two net-worth charts.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Bar chart of mean net worth per industry.
    pub fn plot_industry_average(
        surface: &mut dyn ChartSurface,
        averages: &IndustryAverages,
        y_label: &str,
    ) -> Result<Option<PathBuf>, ChartError> {
        if averages.is_empty() {
            return Err(ChartError::NoData("average net worth"));
        }

        let chart = BarChart {
            title: AVERAGE_CHART_TITLE.to_string(),
            y_label: y_label.to_string(),
            bars: averages
                .iter()
                .map(|avg| (avg.industry.clone(), avg.mean))
                .collect(),
        };
        surface.draw_bar(&chart)
    }

    /// Box chart of net worth per industry.
    pub fn plot_distribution_by_industry(
        surface: &mut dyn ChartSurface,
        distribution: &IndustryDistribution,
        y_label: &str,
    ) -> Result<Option<PathBuf>, ChartError> {
        if distribution.is_empty() {
            return Err(ChartError::NoData("net worth distribution"));
        }

        let chart = BoxChart {
            title: DISTRIBUTION_CHART_TITLE.to_string(),
            y_label: y_label.to_string(),
            boxes: distribution
                .0
                .iter()
                .filter(|(_, values)| !values.is_empty())
                .map(|(industry, values)| (industry.clone(), values.clone()))
                .collect(),
        };
        surface.draw_box(&chart)
    }
}
