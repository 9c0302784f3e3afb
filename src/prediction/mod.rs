//! Weather prediction models.
//!
//! Every model is built from a [`WeatherSeries`] and snapshots the days it needs at
//! construction, so a model is an immutable value that can be queried repeatedly.
//! [`PredictionModel`] wraps the individual models and dispatches to the selected
//! one; [`ModelKind`] names the models for selection by a user.

pub mod error;
pub mod field;
pub mod simple;
pub mod sophisticated;
mod window;
pub mod yesterdays_weather;

use crate::prediction::error::PredictionError;
use crate::prediction::field::WeatherField;
use crate::prediction::simple::SimplePrediction;
use crate::prediction::sophisticated::SophisticatedPrediction;
use crate::prediction::yesterdays_weather::YesterdaysWeather;
use crate::types::forecast::Forecast;
use crate::weather_data::series::WeatherSeries;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// The available prediction models, in the order they are offered to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    /// Tomorrow will be like yesterday.
    YesterdaysWeather,
    /// Plain average of the past `n` days.
    Simple,
    /// Average of the past `n` days adjusted by air pressure and wind.
    Sophisticated,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [
        ModelKind::YesterdaysWeather,
        ModelKind::Simple,
        ModelKind::Sophisticated,
    ];

    /// Menu text describing the model.
    pub fn label(self) -> &'static str {
        match self {
            ModelKind::YesterdaysWeather => "Yesterday's weather.",
            ModelKind::Simple => "Simple prediction.",
            ModelKind::Sophisticated => "Sophisticated prediction.",
        }
    }

    /// Name of the model type, as shown next to a result.
    pub fn model_name(self) -> &'static str {
        match self {
            ModelKind::YesterdaysWeather => "YesterdaysWeather",
            ModelKind::Simple => "SimplePrediction",
            ModelKind::Sophisticated => "SophisticatedPrediction",
        }
    }

    /// Whether the model averages over a window of `n` days.
    pub fn uses_window(self) -> bool {
        !matches!(self, ModelKind::YesterdaysWeather)
    }

    /// Maps a 1-based menu option onto a model.
    pub fn from_option(option: usize) -> Result<Self, PredictionError> {
        option
            .checked_sub(1)
            .and_then(|index| ModelKind::ALL.get(index).copied())
            .ok_or(PredictionError::InvalidArgument {
                argument: "model option",
                value: option,
                reason: "choose one of the listed models",
            })
    }

    /// Builds the model over `series`. `n_days` is ignored by models without a
    /// window.
    pub fn build(
        self,
        series: &WeatherSeries,
        n_days: usize,
    ) -> Result<PredictionModel, PredictionError> {
        Ok(match self {
            ModelKind::YesterdaysWeather => YesterdaysWeather::new(series)?.into(),
            ModelKind::Simple => SimplePrediction::new(series, n_days)?.into(),
            ModelKind::Sophisticated => SophisticatedPrediction::new(series, n_days)?.into(),
        })
    }
}

impl Display for ModelKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.model_name())
    }
}

/// A constructed prediction model of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionModel {
    YesterdaysWeather(YesterdaysWeather),
    Simple(SimplePrediction),
    Sophisticated(SophisticatedPrediction),
}

impl PredictionModel {
    pub fn kind(&self) -> ModelKind {
        match self {
            PredictionModel::YesterdaysWeather(_) => ModelKind::YesterdaysWeather,
            PredictionModel::Simple(_) => ModelKind::Simple,
            PredictionModel::Sophisticated(_) => ModelKind::Sophisticated,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().model_name()
    }

    /// Number of days of data the prediction is based on.
    pub fn number_days(&self) -> usize {
        match self {
            PredictionModel::YesterdaysWeather(m) => m.number_days(),
            PredictionModel::Simple(m) => m.number_days(),
            PredictionModel::Sophisticated(m) => m.number_days(),
        }
    }

    /// Percentage chance of rain, `0..=100`.
    pub fn chance_of_rain(&self) -> u8 {
        match self {
            PredictionModel::YesterdaysWeather(m) => m.chance_of_rain(),
            PredictionModel::Simple(m) => m.chance_of_rain(),
            PredictionModel::Sophisticated(m) => m.chance_of_rain(),
        }
    }

    pub fn high_temperature(&self) -> f64 {
        match self {
            PredictionModel::YesterdaysWeather(m) => m.high_temperature(),
            PredictionModel::Simple(m) => m.high_temperature(),
            PredictionModel::Sophisticated(m) => m.high_temperature(),
        }
    }

    pub fn low_temperature(&self) -> f64 {
        match self {
            PredictionModel::YesterdaysWeather(m) => m.low_temperature(),
            PredictionModel::Simple(m) => m.low_temperature(),
            PredictionModel::Sophisticated(m) => m.low_temperature(),
        }
    }

    pub fn humidity(&self) -> u8 {
        match self {
            PredictionModel::YesterdaysWeather(m) => m.humidity(),
            PredictionModel::Simple(m) => m.humidity(),
            PredictionModel::Sophisticated(m) => m.humidity(),
        }
    }

    pub fn cloud_cover(&self) -> u8 {
        match self {
            PredictionModel::YesterdaysWeather(m) => m.cloud_cover(),
            PredictionModel::Simple(m) => m.cloud_cover(),
            PredictionModel::Sophisticated(m) => m.cloud_cover(),
        }
    }

    pub fn wind_speed(&self) -> f64 {
        match self {
            PredictionModel::YesterdaysWeather(m) => m.wind_speed(),
            PredictionModel::Simple(m) => m.wind_speed(),
            PredictionModel::Sophisticated(m) => m.wind_speed(),
        }
    }

    /// Mean air pressure, only predicted by the sophisticated model.
    pub fn air_pressure(&self) -> Option<f64> {
        match self {
            PredictionModel::Sophisticated(m) => Some(m.air_pressure()),
            _ => None,
        }
    }

    /// Unadjusted mean of `field` over the model's days.
    pub fn average(&self, field: WeatherField) -> f64 {
        match self {
            PredictionModel::YesterdaysWeather(m) => m.average(field),
            PredictionModel::Simple(m) => m.average(field),
            PredictionModel::Sophisticated(m) => m.average(field),
        }
    }

    pub fn forecast(&self) -> Forecast {
        match self {
            PredictionModel::YesterdaysWeather(m) => m.forecast(),
            PredictionModel::Simple(m) => m.forecast(),
            PredictionModel::Sophisticated(m) => m.forecast(),
        }
    }
}

impl From<YesterdaysWeather> for PredictionModel {
    fn from(model: YesterdaysWeather) -> Self {
        PredictionModel::YesterdaysWeather(model)
    }
}

impl From<SimplePrediction> for PredictionModel {
    fn from(model: SimplePrediction) -> Self {
        PredictionModel::Simple(model)
    }
}

impl From<SophisticatedPrediction> for PredictionModel {
    fn from(model: SophisticatedPrediction) -> Self {
        PredictionModel::Sophisticated(model)
    }
}
