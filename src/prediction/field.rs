//! The numeric fields of a [`WeatherRecord`] that a prediction can average over.

use crate::prediction::error::PredictionError;
use crate::types::weather_record::WeatherRecord;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherField {
    Rainfall,
    HighTemperature,
    LowTemperature,
    Humidity,
    CloudCover,
    AverageWindSpeed,
    MaximumWindSpeed,
    AirPressure,
}

impl WeatherField {
    pub const ALL: [WeatherField; 8] = [
        WeatherField::Rainfall,
        WeatherField::HighTemperature,
        WeatherField::LowTemperature,
        WeatherField::Humidity,
        WeatherField::CloudCover,
        WeatherField::AverageWindSpeed,
        WeatherField::MaximumWindSpeed,
        WeatherField::AirPressure,
    ];

    /// Accessor reading this field off a record.
    pub fn accessor(self) -> fn(&WeatherRecord) -> f64 {
        match self {
            WeatherField::Rainfall => |r: &WeatherRecord| r.rainfall,
            WeatherField::HighTemperature => |r: &WeatherRecord| r.high_temperature,
            WeatherField::LowTemperature => |r: &WeatherRecord| r.low_temperature,
            WeatherField::Humidity => |r: &WeatherRecord| f64::from(r.humidity),
            WeatherField::CloudCover => |r: &WeatherRecord| f64::from(r.cloud_cover),
            WeatherField::AverageWindSpeed => |r: &WeatherRecord| r.average_wind_speed,
            WeatherField::MaximumWindSpeed => |r: &WeatherRecord| r.maximum_wind_speed,
            WeatherField::AirPressure => |r: &WeatherRecord| r.air_pressure,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeatherField::Rainfall => "rainfall",
            WeatherField::HighTemperature => "high_temperature",
            WeatherField::LowTemperature => "low_temperature",
            WeatherField::Humidity => "humidity",
            WeatherField::CloudCover => "cloud_cover",
            WeatherField::AverageWindSpeed => "average_wind_speed",
            WeatherField::MaximumWindSpeed => "maximum_wind_speed",
            WeatherField::AirPressure => "air_pressure",
        }
    }
}

impl FromStr for WeatherField {
    type Err = PredictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeatherField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| PredictionError::InvalidField(s.to_string()))
    }
}

impl Display for WeatherField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arithmetic mean of `field` over the records of a window.
///
/// An empty window averages to `0.0`; prediction models never build one.
pub fn average_over_window(records: &[WeatherRecord], field: WeatherField) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let accessor = field.accessor();
    records.iter().map(accessor).sum::<f64>() / records.len() as f64
}
