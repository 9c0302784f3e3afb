use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherDataError {
    #[error("Weather data file '{0}' could not be opened")]
    FileOpen(PathBuf, #[source] std::io::Error),

    #[error("Parsing error reading weather CSV data from {source_name}")]
    CsvRead {
        source_name: String,
        #[source]
        source: PolarsError,
    },

    #[error("Required column '{0}' not found in weather data")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Column '{column}' could not be read as {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
        #[source]
        source: PolarsError,
    },

    #[error("Missing value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },

    #[error("Value {value} in column '{column}' at row {row} is out of range")]
    InvalidValue {
        column: String,
        row: usize,
        value: f64,
    },

    #[error("Unknown wind direction '{value}' at row {row}")]
    UnknownWindDirection { row: usize, value: String },

    #[error("Unparsable date '{value}' at row {row}")]
    DateParse {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
