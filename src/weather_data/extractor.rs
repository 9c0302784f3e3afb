use crate::weather_data::error::WeatherDataError;
use polars::prelude::*;

pub(crate) const COL_DATE: &str = "date";
pub(crate) const COL_RAINFALL: &str = "rainfall"; // mm
pub(crate) const COL_HIGH_TEMPERATURE: &str = "high_temperature";
pub(crate) const COL_LOW_TEMPERATURE: &str = "low_temperature";
pub(crate) const COL_HUMIDITY: &str = "humidity"; // percent
pub(crate) const COL_CLOUD_COVER: &str = "cloud_cover"; // oktas
pub(crate) const COL_AVERAGE_WIND_SPEED: &str = "average_wind_speed";
pub(crate) const COL_MAXIMUM_WIND_SPEED: &str = "maximum_wind_speed";
pub(crate) const COL_AIR_PRESSURE: &str = "air_pressure";
pub(crate) const COL_WIND_DIRECTION: &str = "wind_direction";

/// Retrieves a column by name from a DataFrame.
fn get_column<'a>(df: &'a DataFrame, col: &str) -> Result<&'a Column, WeatherDataError> {
    df.column(col)
        .map_err(|e| WeatherDataError::ColumnNotFound(col.to_string(), e))
}

fn cast_column(
    df: &DataFrame,
    col: &str,
    dtype: &DataType,
    expected: &'static str,
) -> Result<Column, WeatherDataError> {
    get_column(df, col)?
        .cast(dtype)
        .map_err(|e| WeatherDataError::ColumnType {
            column: col.to_string(),
            expected,
            source: e,
        })
}

/// Reads every value of a numeric column as `f64`, failing on the first null.
pub(crate) fn float_values(df: &DataFrame, col: &str) -> Result<Vec<f64>, WeatherDataError> {
    let column = cast_column(df, col, &DataType::Float64, "a number")?;
    let values = column.f64().map_err(|e| WeatherDataError::ColumnType {
        column: col.to_string(),
        expected: "a number",
        source: e,
    })?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| match value {
            None => Err(WeatherDataError::MissingValue {
                column: col.to_string(),
                row,
            }),
            Some(value) if !value.is_finite() => Err(WeatherDataError::InvalidValue {
                column: col.to_string(),
                row,
                value,
            }),
            Some(value) => Ok(value),
        })
        .collect()
}

/// Reads a numeric column holding whole values within `0..=max`.
pub(crate) fn bounded_int_values(
    df: &DataFrame,
    col: &str,
    max: u8,
) -> Result<Vec<u8>, WeatherDataError> {
    float_values(df, col)?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            if (0.0..=f64::from(max)).contains(&value) {
                Ok(value.round() as u8)
            } else {
                Err(WeatherDataError::InvalidValue {
                    column: col.to_string(),
                    row,
                    value,
                })
            }
        })
        .collect()
}

/// Reads every value of a column as text, failing on the first null.
pub(crate) fn text_values(df: &DataFrame, col: &str) -> Result<Vec<String>, WeatherDataError> {
    let column = cast_column(df, col, &DataType::String, "text")?;
    let values = column.str().map_err(|e| WeatherDataError::ColumnType {
        column: col.to_string(),
        expected: "text",
        source: e,
    })?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value
                .map(str::to_string)
                .ok_or_else(|| WeatherDataError::MissingValue {
                    column: col.to_string(),
                    row,
                })
        })
        .collect()
}

/// Reads an optional text column. Returns `None` when the column is absent;
/// nulls inside a present column are kept as `None` cells.
pub(crate) fn optional_text_values(
    df: &DataFrame,
    col: &str,
) -> Result<Option<Vec<Option<String>>>, WeatherDataError> {
    if !df.get_column_names().iter().any(|name| name.as_str() == col) {
        return Ok(None);
    }
    let column = cast_column(df, col, &DataType::String, "text")?;
    let values = column.str().map_err(|e| WeatherDataError::ColumnType {
        column: col.to_string(),
        expected: "text",
        source: e,
    })?;
    Ok(Some(
        values
            .into_iter()
            .map(|value| value.map(str::to_string))
            .collect(),
    ))
}
