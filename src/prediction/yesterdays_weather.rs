use crate::prediction::error::PredictionError;
use crate::prediction::field::WeatherField;
use crate::prediction::window::Window;
use crate::types::forecast::Forecast;
use crate::types::weather_record::WeatherRecord;
use crate::weather_data::series::WeatherSeries;

// Rainfall (mm) below which the chance of rain steps up.
const NO_RAIN: f64 = 0.1;
const LITTLE_RAIN: f64 = 3.0;
const SOME_RAIN: f64 = 8.0;
// Chance of rain (%) for each step.
const NONE: u8 = 0;
const MILD: u8 = 40;
const PROBABLE: u8 = 75;
const LIKELY: u8 = 90;

/// Predicts the weather will be the same as yesterday's.
#[derive(Debug, Clone, PartialEq)]
pub struct YesterdaysWeather {
    yesterday: WeatherRecord,
}

impl YesterdaysWeather {
    /// # Errors
    ///
    /// Returns [`PredictionError::InsufficientData`] if `series` is empty.
    pub fn new(series: &WeatherSeries) -> Result<Self, PredictionError> {
        let window = Window::latest(series, 1)?;
        Ok(Self {
            yesterday: *window.yesterday(),
        })
    }

    pub fn number_days(&self) -> usize {
        1
    }

    /// Yesterday's value of `field`; the mean over a one day window.
    pub fn average(&self, field: WeatherField) -> f64 {
        field.accessor()(&self.yesterday)
    }

    /// Steps yesterday's rainfall into a chance of rain.
    pub fn chance_of_rain(&self) -> u8 {
        let rainfall = self.yesterday.rainfall;
        if rainfall < NO_RAIN {
            NONE
        } else if rainfall < LITTLE_RAIN {
            MILD
        } else if rainfall < SOME_RAIN {
            PROBABLE
        } else {
            LIKELY
        }
    }

    pub fn high_temperature(&self) -> f64 {
        self.yesterday.high_temperature
    }

    pub fn low_temperature(&self) -> f64 {
        self.yesterday.low_temperature
    }

    pub fn humidity(&self) -> u8 {
        self.yesterday.humidity
    }

    pub fn cloud_cover(&self) -> u8 {
        self.yesterday.cloud_cover
    }

    pub fn wind_speed(&self) -> f64 {
        self.yesterday.average_wind_speed
    }

    pub fn forecast(&self) -> Forecast {
        Forecast {
            chance_of_rain: self.chance_of_rain(),
            high_temperature: self.high_temperature(),
            low_temperature: self.low_temperature(),
            humidity: self.humidity(),
            cloud_cover: self.cloud_cover(),
            wind_speed: self.wind_speed(),
            air_pressure: None,
            wind_direction: None,
        }
    }
}
