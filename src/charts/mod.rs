//! Charts module - Chart descriptions and rendering

mod plotter;
mod renderer;

pub use plotter::{
    BarChart, BoxChart, ChartError, ChartPlotter, ChartSurface, AVERAGE_CHART_TITLE,
    DISTRIBUTION_CHART_TITLE,
};
pub use renderer::{PngSurface, BAR_CHART_FILE, BOX_CHART_FILE};
