//! Command line options and the load → validate → aggregate → print/plot flow.

use crate::charts::{ChartPlotter, ChartSurface, PngSurface};
use crate::data::{read_data, Dataset, LoadError};
use crate::report::{self, Report};
use crate::stats::{
    ColumnConfig, IndustryAverages, WealthAnalyzer, DEFAULT_INDUSTRY_COLUMN,
    DEFAULT_NET_WORTH_COLUMN,
};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

pub const DEFAULT_DATASET: &str = "Top_1000_wealthiest_people.csv";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "wealth-insight",
    version,
    about = "Descriptive statistics and industry charts for the wealthiest people dataset"
)]
pub struct Cli {
    /// CSV file with a header row.
    #[arg(value_name = "DATASET", default_value = DEFAULT_DATASET)]
    pub dataset: PathBuf,

    /// Categorical column used for grouping.
    #[arg(long = "industry-column", default_value = DEFAULT_INDUSTRY_COLUMN)]
    pub industry_column: String,

    /// Numeric column summarised and averaged.
    #[arg(long = "net-worth-column", default_value = DEFAULT_NET_WORTH_COLUMN)]
    pub net_worth_column: String,

    /// Number of sample rows to print.
    #[arg(long = "head", default_value_t = 5)]
    pub head: usize,

    /// Render the bar and box charts as PNG files into this directory.
    #[arg(long = "charts", value_name = "DIR")]
    pub charts: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl Cli {
    pub fn columns(&self) -> ColumnConfig {
        ColumnConfig {
            industry: self.industry_column.clone(),
            net_worth: self.net_worth_column.clone(),
        }
    }

    /// Default log filter derived from -v / -q; `RUST_LOG` still wins.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Entry-point flow writing to `out`, rendering charts (if requested) on `surface`.
///
/// A missing dataset prints one error line and returns `Ok(())`.
pub fn run_with_surface(
    cli: &Cli,
    out: &mut dyn Write,
    surface: Option<&mut dyn ChartSurface>,
) -> Result<()> {
    let dataset = match read_data(&cli.dataset) {
        Ok(dataset) => dataset,
        Err(LoadError::FileNotFound(path)) => {
            log::debug!("dataset missing: {}", path.display());
            writeln!(out, "Error: File not found - {}", path.display())?;
            return Ok(());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("reading {}", cli.dataset.display()));
        }
    };

    let analyzer = WealthAnalyzer::new(cli.columns());
    let averages = match cli.format {
        OutputFormat::Table => write_table(&dataset, &analyzer, cli.head, out)?,
        OutputFormat::Json => {
            let report =
                Report::build(&dataset, &analyzer, cli.head).context("analyzing dataset")?;
            report.write_json(out)?;
            report.industry_average
        }
    };

    if let Some(surface) = surface {
        let distribution = analyzer
            .distribution_by_industry(&dataset)
            .context("grouping net worth by industry")?;
        ChartPlotter::plot_industry_average(
            &mut *surface,
            &averages,
            &analyzer.columns().net_worth,
        )
        .context("plotting average net worth")?;
        ChartPlotter::plot_distribution_by_industry(
            surface,
            &distribution,
            &analyzer.columns().net_worth,
        )
        .context("plotting net worth distribution")?;
    }

    Ok(())
}

/// Prints each section as soon as it is computed, so the sections before a
/// failing aggregate still reach `out`.
fn write_table(
    dataset: &Dataset,
    analyzer: &WealthAnalyzer,
    head: usize,
    out: &mut dyn Write,
) -> Result<IndustryAverages> {
    report::write_sample(out, &dataset.column_names(), &dataset.head_rows(head))?;

    let describe = analyzer.describe(dataset).context("describing dataset")?;
    report::write_describe(out, &describe)?;

    let averages = analyzer
        .industry_average(dataset)
        .context("averaging net worth by industry")?;
    report::write_industry_average(out, &averages, &analyzer.columns().net_worth)?;

    let shape = analyzer
        .skewness_kurtosis(dataset)
        .context("computing skewness and kurtosis")?;
    report::write_shape(out, &shape)?;

    Ok(averages)
}

/// Entry-point flow with PNG charts when `--charts` is given.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    match &cli.charts {
        Some(dir) => {
            let mut surface = PngSurface::new(dir);
            run_with_surface(cli, out, Some(&mut surface))
        }
        None => run_with_surface(cli, out, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dataset_layout() {
        let cli = Cli::parse_from(["wealth-insight"]);
        assert_eq!(cli.dataset, PathBuf::from(DEFAULT_DATASET));
        assert_eq!(cli.columns(), ColumnConfig::default());
        assert_eq!(cli.head, 5);
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn verbosity_flags() {
        assert_eq!(
            Cli::parse_from(["wealth-insight", "-vv"]).log_level(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            Cli::parse_from(["wealth-insight", "-q"]).log_level(),
            log::LevelFilter::Error
        );
        assert!(Cli::try_parse_from(["wealth-insight", "-v", "-q"]).is_err());
    }

    #[test]
    fn custom_columns_and_format() {
        let cli = Cli::parse_from([
            "wealth-insight",
            "people.csv",
            "--industry-column",
            "Sector",
            "--net-worth-column",
            "Worth",
            "--format",
            "json",
            "--charts",
            "out",
        ]);
        assert_eq!(cli.columns().industry, "Sector");
        assert_eq!(cli.columns().net_worth, "Worth");
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.charts, Some(PathBuf::from("out")));
    }
}
