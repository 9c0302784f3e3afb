//! Decide how advisable it is to hold an event given the weather predicted from a
//! history of daily observations.
//!
//! Load a dataset into a [`WeatherSeries`], pick a prediction model with
//! [`ModelKind`] and score an [`Event`] with [`WeatherAdvisor`] or directly with
//! [`EventDecision`].

mod advisor;
mod decision;
mod error;
mod prediction;
mod types;
mod utils;
mod weather_data;

pub use advisor::*;
pub use decision::{EventDecision, MAX_ADVISABILITY, MIN_ADVISABILITY};
pub use error::AdvisorError;

pub use prediction::error::PredictionError;
pub use prediction::field::{average_over_window, WeatherField};
pub use prediction::simple::SimplePrediction;
pub use prediction::sophisticated::SophisticatedPrediction;
pub use prediction::yesterdays_weather::YesterdaysWeather;
pub use prediction::{ModelKind, PredictionModel};

pub use types::event::{Event, LAST_START_HOUR};
pub use types::forecast::Forecast;
pub use types::weather_record::WeatherRecord;
pub use types::wind_direction::WindDirection;

pub use weather_data::data_loader::WeatherDataLoader;
pub use weather_data::error::WeatherDataError;
pub use weather_data::series::WeatherSeries;
