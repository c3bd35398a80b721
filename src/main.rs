//! Wealth Insight - statistics and charts for the wealthiest people dataset
//!
//! Reads the dataset, prints sample rows, descriptive statistics and the
//! average net worth per industry, and optionally renders charts.

use anyhow::Result;
use clap::Parser;
use std::io;
use wealth_insight::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(&cli, &mut out)
}
