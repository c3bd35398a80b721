//! CSV Data Loader Module
//! Handles CSV file loading using Polars.

use super::Dataset;
use polars::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found - {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Number of rows scanned when inferring column dtypes.
const INFER_SCHEMA_ROWS: usize = 10_000;

/// Read a CSV file with a header row into a [`Dataset`].
pub fn read_data(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();

    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(LoadError::FileNotFound(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::FileNotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    // Use lazy evaluation, then collect
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    log::info!(
        "loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );

    Ok(Dataset::with_source(df, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_header_and_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Name,Country,Industry,Net Worth (in billions),Company").unwrap();
        writeln!(file, "Alice,USA,Tech,100,CompanyA").unwrap();
        writeln!(file, "Bob,UK,Finance,200,CompanyB").unwrap();
        file.flush().unwrap();

        let ds = read_data(file.path()).unwrap();
        assert_eq!(ds.height(), 2);
        assert_eq!(ds.column_names().len(), 5);
        assert!(ds.has_column("Name"));
        let total: f64 = ds
            .numeric_values("Net Worth (in billions)")
            .unwrap()
            .iter()
            .sum();
        assert_eq!(total, 300.0);
        assert_eq!(ds.source(), Some(file.path()));
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let err = read_data("invalid_path.csv").unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(ref p) if p == Path::new("invalid_path.csv")));
        assert_eq!(err.to_string(), "File not found - invalid_path.csv");
    }

    #[test]
    fn directory_is_not_a_dataset() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_data(dir.path()),
            Err(LoadError::FileNotFound(_))
        ));
    }
}
