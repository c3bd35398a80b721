//! Dataset Module
//! In-memory table of wealthy individuals backed by a Polars DataFrame.

use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Returns true for the integer and float dtypes treated as numeric.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// A loaded table. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    df: DataFrame,
    source: Option<PathBuf>,
}

impl Dataset {
    /// Wrap an existing DataFrame.
    pub fn new(df: DataFrame) -> Self {
        Self { df, source: None }
    }

    pub(crate) fn with_source(df: DataFrame, source: &Path) -> Self {
        Self {
            df,
            source: Some(source.to_path_buf()),
        }
    }

    /// File the dataset was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Get list of column names in file order.
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.df.column(name).is_ok()
    }

    /// Get list of numeric column names in file order.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.df
            .get_columns()
            .iter()
            .filter(|col| is_numeric_dtype(col.dtype()))
            .map(|col| col.name().to_string())
            .collect()
    }

    /// Dtype of a column.
    pub fn dtype(&self, name: &str) -> PolarsResult<DataType> {
        Ok(self.df.column(name)?.dtype().clone())
    }

    /// Non-null, non-NaN values of a column cast to f64.
    pub fn numeric_values(&self, name: &str) -> PolarsResult<Vec<f64>> {
        Ok(self
            .numeric_cells(name)?
            .into_iter()
            .flatten()
            .collect())
    }

    /// Row-aligned f64 cells of a column; nulls and NaN become `None`.
    pub fn numeric_cells(&self, name: &str) -> PolarsResult<Vec<Option<f64>>> {
        let as_f64 = self.df.column(name)?.cast(&DataType::Float64)?;
        let ca = as_f64.f64()?;
        Ok(ca
            .into_iter()
            .map(|v| v.filter(|v| !v.is_nan()))
            .collect())
    }

    /// Row-aligned text cells of a column; nulls become `None`.
    pub fn text_cells(&self, name: &str) -> PolarsResult<Vec<Option<String>>> {
        let as_str = self.df.column(name)?.cast(&DataType::String)?;
        let ca = as_str.as_materialized_series().str()?;
        Ok(ca
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect())
    }

    /// First `n` rows rendered as display strings, for console output.
    pub fn head_rows(&self, n: usize) -> Vec<Vec<String>> {
        let head = self.df.head(Some(n));
        (0..head.height())
            .map(|i| {
                head.get_columns()
                    .iter()
                    .map(|col| match col.get(i) {
                        Ok(val) if val.is_null() => String::new(),
                        Ok(val) => val.to_string().trim_matches('"').to_string(),
                        Err(_) => String::new(),
                    })
                    .collect()
            })
            .collect()
    }
}

impl From<DataFrame> for Dataset {
    fn from(df: DataFrame) -> Self {
        Self::new(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        let df = DataFrame::new(vec![
            Column::new("Name".into(), ["Alice", "Bob", "Charlie"]),
            Column::new("Industry".into(), ["Tech", "Finance", "Tech"]),
            Column::new("Net Worth (in billions)".into(), [100i64, 200, 150]),
            Column::new("Age".into(), [Some(40.0f64), None, Some(f64::NAN)]),
        ])
        .unwrap();
        Dataset::new(df)
    }

    #[test]
    fn lists_numeric_columns_in_file_order() {
        let ds = sample();
        assert_eq!(
            ds.numeric_columns(),
            vec!["Net Worth (in billions)".to_string(), "Age".to_string()]
        );
        assert_eq!(ds.column_names().len(), 4);
        assert!(ds.has_column("Industry"));
        assert!(!ds.has_column("Country"));
    }

    #[test]
    fn numeric_values_skip_nulls_and_nan() {
        let ds = sample();
        assert_eq!(ds.numeric_values("Age").unwrap(), vec![40.0]);
        assert_eq!(
            ds.numeric_values("Net Worth (in billions)").unwrap(),
            vec![100.0, 200.0, 150.0]
        );
    }

    #[test]
    fn head_rows_strip_string_quotes() {
        let ds = sample();
        let rows = ds.head_rows(2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "Alice");
        assert_eq!(rows[1][1], "Finance");
        assert_eq!(rows[1][3], "");
    }

    #[test]
    fn default_dataset_is_empty() {
        assert!(Dataset::default().is_empty());
    }
}
