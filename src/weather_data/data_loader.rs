use crate::types::weather_record::WeatherRecord;
use crate::types::wind_direction::WindDirection;
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::extractor::*;
use crate::weather_data::series::WeatherSeries;
use chrono::NaiveDate;
use log::{debug, info, warn};
use polars::frame::DataFrame;
use polars::prelude::*;
use std::io::Cursor;
use std::path::{Path, PathBuf};

const DATE_FORMAT: &str = "%Y-%m-%d";
const MAX_HUMIDITY: u8 = 100;
const MAX_CLOUD_COVER: u8 = 9;

/// Loads a historic weather dataset from CSV into a [`WeatherSeries`].
///
/// The CSV must have a header row and one row per day, oldest first. Required
/// columns are `rainfall`, `high_temperature`, `low_temperature`, `humidity`,
/// `cloud_cover`, `average_wind_speed`, `maximum_wind_speed`, `air_pressure` and
/// `wind_direction`; a `date` column (`YYYY-MM-DD`) is optional.
pub struct WeatherDataLoader {
    data_path: PathBuf,
}

impl WeatherDataLoader {
    pub fn new(data_path: &Path) -> WeatherDataLoader {
        WeatherDataLoader {
            data_path: data_path.to_path_buf(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Reads and validates the whole dataset file.
    pub fn load(&self) -> Result<WeatherSeries, WeatherDataError> {
        debug!("Reading weather data from {:?}", self.data_path);
        std::fs::metadata(&self.data_path)
            .map_err(|e| WeatherDataError::FileOpen(self.data_path.clone(), e))?;

        let source_name = self.data_path.display().to_string();
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(self.data_path.clone()))
            .map_err(|e| WeatherDataError::CsvRead {
                source_name: source_name.clone(),
                source: e,
            })?
            .finish()
            .map_err(|e| WeatherDataError::CsvRead {
                source_name: source_name.clone(),
                source: e,
            })?;

        let series = Self::frame_to_series(&df)?;
        info!(
            "Loaded {} days of weather data from {}",
            series.size(),
            source_name
        );
        Ok(series)
    }

    /// Parses an in-memory CSV document (with header row) into a series.
    pub fn from_csv_bytes(bytes: Vec<u8>) -> Result<WeatherSeries, WeatherDataError> {
        let df = CsvReader::new(Cursor::new(bytes))
            .finish()
            .map_err(|e| WeatherDataError::CsvRead {
                source_name: "in-memory CSV".to_string(),
                source: e,
            })?;
        Self::frame_to_series(&df)
    }

    /// Converts a DataFrame with the dataset schema into validated records.
    fn frame_to_series(df: &DataFrame) -> Result<WeatherSeries, WeatherDataError> {
        let rainfall = float_values(df, COL_RAINFALL)?;
        let high_temperature = float_values(df, COL_HIGH_TEMPERATURE)?;
        let low_temperature = float_values(df, COL_LOW_TEMPERATURE)?;
        let humidity = bounded_int_values(df, COL_HUMIDITY, MAX_HUMIDITY)?;
        let cloud_cover = bounded_int_values(df, COL_CLOUD_COVER, MAX_CLOUD_COVER)?;
        let average_wind_speed = float_values(df, COL_AVERAGE_WIND_SPEED)?;
        let maximum_wind_speed = float_values(df, COL_MAXIMUM_WIND_SPEED)?;
        let air_pressure = float_values(df, COL_AIR_PRESSURE)?;
        let wind_direction = text_values(df, COL_WIND_DIRECTION)?;
        let dates = optional_text_values(df, COL_DATE)?;
        if dates.is_none() {
            debug!("No '{}' column present, records will be undated", COL_DATE);
        }

        let mut records = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            if rainfall[row] < 0.0 {
                return Err(WeatherDataError::InvalidValue {
                    column: COL_RAINFALL.to_string(),
                    row,
                    value: rainfall[row],
                });
            }
            let direction = WindDirection::from_abbreviation(&wind_direction[row])
                .ok_or_else(|| WeatherDataError::UnknownWindDirection {
                    row,
                    value: wind_direction[row].clone(),
                })?;
            let date = match dates.as_ref().and_then(|d| d[row].as_deref()) {
                Some(text) => Some(NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(
                    |e| WeatherDataError::DateParse {
                        row,
                        value: text.to_string(),
                        source: e,
                    },
                )?),
                None => None,
            };
            if high_temperature[row] < low_temperature[row] {
                warn!(
                    "Row {} has high temperature {} below low temperature {}",
                    row, high_temperature[row], low_temperature[row]
                );
            }

            records.push(
                WeatherRecord::builder()
                    .maybe_date(date)
                    .rainfall(rainfall[row])
                    .high_temperature(high_temperature[row])
                    .low_temperature(low_temperature[row])
                    .humidity(humidity[row])
                    .cloud_cover(cloud_cover[row])
                    .average_wind_speed(average_wind_speed[row])
                    .maximum_wind_speed(maximum_wind_speed[row])
                    .air_pressure(air_pressure[row])
                    .wind_direction(direction)
                    .build(),
            );
        }

        Ok(WeatherSeries::new(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "date,rainfall,high_temperature,low_temperature,humidity,cloud_cover,\
                          average_wind_speed,maximum_wind_speed,air_pressure,wind_direction";

    fn csv(rows: &[&str]) -> Vec<u8> {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.push('\n');
        text.into_bytes()
    }

    #[test]
    fn test_load_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        file.write_all(&csv(&[
            "2023-03-01,0.0,28.5,17.2,55,2,11.0,30.0,1016.2,NNE",
            "2023-03-02,4.2,24.1,16.8,82,7,14.5,41.0,1009.8,SW",
        ]))?;
        file.flush()?;

        let loader = WeatherDataLoader::new(file.path());
        let series = loader.load()?;
        assert_eq!(series.size(), 2);

        let newest = series.most_recent(1)?[0];
        assert_eq!(newest.date, NaiveDate::from_ymd_opt(2023, 3, 2));
        assert_eq!(newest.rainfall, 4.2);
        assert_eq!(newest.humidity, 82);
        assert_eq!(newest.cloud_cover, 7);
        assert_eq!(newest.wind_direction, WindDirection::SW);
        Ok(())
    }

    #[test]
    fn test_load_without_date_column() -> Result<(), Box<dyn std::error::Error>> {
        let header = HEADER.trim_start_matches("date,");
        let bytes = format!("{}\n1.5,20.0,10.0,60,4,9.0,25.0,1012.0,E\n", header).into_bytes();
        let series = WeatherDataLoader::from_csv_bytes(bytes)?;
        let record = series.most_recent(1)?[0];
        assert_eq!(record.date, None);
        assert_eq!(record.wind_direction, WindDirection::E);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_reported() {
        let loader = WeatherDataLoader::new(Path::new("/definitely/not/here.csv"));
        assert!(matches!(
            loader.load(),
            Err(WeatherDataError::FileOpen(_, _))
        ));
    }

    #[test]
    fn test_unknown_wind_direction_is_rejected() {
        let result = WeatherDataLoader::from_csv_bytes(csv(&[
            "2023-03-01,0.0,28.5,17.2,55,2,11.0,30.0,1016.2,NORTHISH",
        ]));
        assert!(matches!(
            result,
            Err(WeatherDataError::UnknownWindDirection { row: 0, .. })
        ));
    }

    #[test]
    fn test_cloud_cover_above_nine_is_rejected() {
        let result = WeatherDataLoader::from_csv_bytes(csv(&[
            "2023-03-01,0.0,28.5,17.2,55,12,11.0,30.0,1016.2,N",
        ]));
        assert!(matches!(
            result,
            Err(WeatherDataError::InvalidValue { ref column, .. }) if column == "cloud_cover"
        ));
    }

    #[test]
    fn test_negative_rainfall_is_rejected() {
        let result = WeatherDataLoader::from_csv_bytes(csv(&[
            "2023-03-01,-1.0,28.5,17.2,55,2,11.0,30.0,1016.2,N",
        ]));
        assert!(matches!(
            result,
            Err(WeatherDataError::InvalidValue { row: 0, .. })
        ));
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let result = WeatherDataLoader::from_csv_bytes(csv(&[
            "01/03/2023,0.0,28.5,17.2,55,2,11.0,30.0,1016.2,N",
        ]));
        assert!(matches!(
            result,
            Err(WeatherDataError::DateParse { row: 0, .. })
        ));
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let nan_high = WeatherDataLoader::from_csv_bytes(csv(&[
            "2023-03-01,0.0,NaN,17.2,55,2,11.0,30.0,1016.2,N",
            "2023-03-02,0.0,27.0,16.0,60,3,12.0,28.0,1015.0,N",
        ]));
        assert!(matches!(
            nan_high,
            Err(WeatherDataError::InvalidValue { ref column, row: 0, value })
                if column == "high_temperature" && value.is_nan()
        ));

        let inf_rain = WeatherDataLoader::from_csv_bytes(csv(&[
            "2023-03-01,0.0,28.5,17.2,55,2,11.0,30.0,1016.2,N",
            "2023-03-02,inf,27.0,16.0,60,3,12.0,28.0,1015.0,N",
        ]));
        assert!(matches!(
            inf_rain,
            Err(WeatherDataError::InvalidValue { ref column, row: 1, value })
                if column == "rainfall" && value.is_infinite()
        ));
    }
}
