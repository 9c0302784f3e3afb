use crate::types::wind_direction::WindDirection;
use bon::Builder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of observed weather, as read from a historic dataset.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize, Builder)]
pub struct WeatherRecord {
    pub date: Option<NaiveDate>,      // date
    pub rainfall: f64,                // total mm, >= 0
    pub high_temperature: f64,        // degrees C
    pub low_temperature: f64,         // degrees C
    pub humidity: u8,                 // percent, 0..=100
    pub cloud_cover: u8,              // oktas, 0..=9
    pub average_wind_speed: f64,      // km/h
    pub maximum_wind_speed: f64,      // km/h
    pub air_pressure: f64,            // hPa
    pub wind_direction: WindDirection,
}
