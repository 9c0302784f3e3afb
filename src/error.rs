use crate::prediction::error::PredictionError;
use crate::weather_data::error::WeatherDataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error(transparent)]
    WeatherData(#[from] WeatherDataError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error("Event start hour {0} is outside 0..=23")]
    InvalidStartHour(u8),
}
