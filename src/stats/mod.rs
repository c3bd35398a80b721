//! Stats module - Descriptive statistics and validated aggregates

mod analyzer;
mod calculator;

pub use analyzer::{
    AnalysisError, ColumnConfig, IndustryAverage, IndustryAverages, IndustryDistribution, Shape,
    WealthAnalyzer, DEFAULT_INDUSTRY_COLUMN, DEFAULT_NET_WORTH_COLUMN,
};
pub use calculator::{StatsCalculator, Summary};
