//! Wealth Analyzer
//! Validated aggregates over a [`Dataset`]: describe, industry averages,
//! distribution by industry and skewness/kurtosis of net worth.

use crate::data::{is_numeric_dtype, validate, Dataset, ValidationError};
use crate::stats::{StatsCalculator, Summary};
use polars::prelude::PolarsError;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

pub const DEFAULT_INDUSTRY_COLUMN: &str = "Industry";
pub const DEFAULT_NET_WORTH_COLUMN: &str = "Net Worth (in billions)";

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Column '{column}' is not numeric (found {dtype})")]
    NotNumeric { column: String, dtype: String },
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Names of the columns the analyzer reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnConfig {
    pub industry: String,
    pub net_worth: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            industry: DEFAULT_INDUSTRY_COLUMN.to_string(),
            net_worth: DEFAULT_NET_WORTH_COLUMN.to_string(),
        }
    }
}

/// Mean net worth of one industry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryAverage {
    pub industry: String,
    pub count: usize,
    pub mean: f64,
}

/// Industry means ordered lexically by industry name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IndustryAverages(pub Vec<IndustryAverage>);

impl IndustryAverages {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndustryAverage> {
        self.0.iter()
    }

    /// Mean for an industry, if present.
    pub fn get(&self, industry: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|avg| avg.industry == industry)
            .map(|avg| avg.mean)
    }
}

/// Every net-worth value per industry, ordered lexically by industry name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndustryDistribution(pub BTreeMap<String, Vec<f64>>);

impl IndustryDistribution {
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    pub fn get(&self, industry: &str) -> Option<&[f64]> {
        self.0.get(industry).map(Vec::as_slice)
    }
}

/// Skewness and excess kurtosis of a column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shape {
    pub skewness: f64,
    pub kurtosis: f64,
}

/// Computes validated statistics for a configured pair of columns.
#[derive(Debug, Clone, Default)]
pub struct WealthAnalyzer {
    columns: ColumnConfig,
}

impl WealthAnalyzer {
    pub fn new(columns: ColumnConfig) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &ColumnConfig {
        &self.columns
    }

    /// Summary statistics for every numeric column.
    ///
    /// The net-worth column is required and must be numeric.
    pub fn describe(&self, dataset: &Dataset) -> Result<Vec<Summary>, AnalysisError> {
        validate(dataset, &[self.columns.net_worth.as_str()])?;
        self.require_numeric(dataset, &self.columns.net_worth)?;

        let mut summaries = Vec::new();
        for column in dataset.numeric_columns() {
            let values = dataset.numeric_values(&column)?;
            let mut summary = StatsCalculator::compute_descriptive_stats(&values);
            summary.column = column;
            summaries.push(summary);
        }

        log::debug!("described {} numeric columns", summaries.len());
        Ok(summaries)
    }

    /// Mean net worth per industry.
    pub fn industry_average(&self, dataset: &Dataset) -> Result<IndustryAverages, AnalysisError> {
        let groups = self.group_by_industry(dataset)?;

        let averages: Vec<IndustryAverage> = groups
            .0
            .into_iter()
            .map(|(industry, values)| {
                let mean = StatsCalculator::compute_descriptive_stats(&values).mean;
                IndustryAverage {
                    industry,
                    count: values.len(),
                    mean,
                }
            })
            .collect();

        log::debug!("averaged net worth over {} industries", averages.len());
        Ok(IndustryAverages(averages))
    }

    /// Net-worth values grouped by industry, for the box chart.
    pub fn distribution_by_industry(
        &self,
        dataset: &Dataset,
    ) -> Result<IndustryDistribution, AnalysisError> {
        self.group_by_industry(dataset)
    }

    /// Skewness and excess kurtosis of net worth.
    pub fn skewness_kurtosis(&self, dataset: &Dataset) -> Result<Shape, AnalysisError> {
        validate(dataset, &[self.columns.net_worth.as_str()])?;
        self.require_numeric(dataset, &self.columns.net_worth)?;

        let values = dataset.numeric_values(&self.columns.net_worth)?;
        let shape = Shape {
            skewness: StatsCalculator::skewness(&values),
            kurtosis: StatsCalculator::kurtosis(&values),
        };
        log::debug!(
            "net worth skewness={:.4} kurtosis={:.4}",
            shape.skewness,
            shape.kurtosis
        );
        Ok(shape)
    }

    fn group_by_industry(&self, dataset: &Dataset) -> Result<IndustryDistribution, AnalysisError> {
        validate(
            dataset,
            &[self.columns.industry.as_str(), self.columns.net_worth.as_str()],
        )?;
        self.require_numeric(dataset, &self.columns.net_worth)?;

        let industries = dataset.text_cells(&self.columns.industry)?;
        let values = dataset.numeric_cells(&self.columns.net_worth)?;

        let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for (industry, value) in industries.into_iter().zip(values) {
            // Rows without an industry are not grouped
            let Some(industry) = industry else {
                continue;
            };
            let bucket = groups.entry(industry).or_default();
            if let Some(v) = value {
                bucket.push(v);
            }
        }

        Ok(IndustryDistribution(groups))
    }

    fn require_numeric(&self, dataset: &Dataset, column: &str) -> Result<(), AnalysisError> {
        let dtype = dataset.dtype(column)?;
        if is_numeric_dtype(&dtype) {
            Ok(())
        } else {
            Err(AnalysisError::NotNumeric {
                column: column.to_string(),
                dtype: dtype.to_string(),
            })
        }
    }
}
