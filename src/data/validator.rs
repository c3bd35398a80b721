//! Dataset Validator
//! Checks row count and required columns before any statistic is computed.

use super::Dataset;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The dataset is empty.")]
    EmptyDataset,
    #[error("Missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Fail if the dataset has no rows, then if any required column is absent.
///
/// Every absent column is reported, in the order requested.
pub fn validate(dataset: &Dataset, required_columns: &[&str]) -> Result<(), ValidationError> {
    if dataset.is_empty() {
        return Err(ValidationError::EmptyDataset);
    }

    let missing: Vec<String> = required_columns
        .iter()
        .filter(|name| !dataset.has_column(name))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingColumns(missing))
    }
}
