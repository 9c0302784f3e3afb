use crate::types::wind_direction::WindDirection;
use serde::{Deserialize, Serialize};

/// The weather a prediction model expects for the day of an event.
///
/// `air_pressure` and `wind_direction` are only populated by models that
/// take them into account.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Forecast {
    pub chance_of_rain: u8,
    pub high_temperature: f64,
    pub low_temperature: f64,
    pub humidity: u8,
    pub cloud_cover: u8,
    pub wind_speed: f64,
    pub air_pressure: Option<f64>,
    pub wind_direction: Option<WindDirection>,
}
