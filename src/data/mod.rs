//! Data module - CSV loading, dataset access and validation

mod dataset;
mod loader;
mod validator;

pub use dataset::{is_numeric_dtype, Dataset};
pub use loader::{read_data, LoadError};
pub use validator::{validate, ValidationError};
