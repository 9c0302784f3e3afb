//! This module provides the main entry point: a [`WeatherAdvisor`] holding a
//! historic weather series, which assesses events against any prediction model.

use crate::decision::EventDecision;
use crate::error::AdvisorError;
use crate::prediction::{ModelKind, PredictionModel};
use crate::types::event::Event;
use crate::types::forecast::Forecast;
use crate::weather_data::data_loader::WeatherDataLoader;
use crate::weather_data::series::WeatherSeries;
use bon::bon;
use log::debug;
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Days of history windowed models use unless told otherwise.
pub const DEFAULT_WINDOW_DAYS: usize = 7;

/// The outcome of assessing one event with one prediction model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub model: ModelKind,
    pub number_days: usize,
    pub event: Event,
    pub forecast: Forecast,
    pub temperature_factor: f64,
    pub rain_factor: f64,
    /// Final score in `-5.0..=5.0`.
    pub advisability: f64,
}

impl Display for Assessment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Based on {} model, the advisability of holding {} is {:.2}.",
            self.model.model_name(),
            self.event,
            self.advisability
        )
    }
}

/// Assesses events against weather predicted from a historic series.
///
/// # Examples
///
/// ```no_run
/// use weather_advisor::{Event, ModelKind, WeatherAdvisor};
///
/// # fn main() -> Result<(), weather_advisor::AdvisorError> {
/// let advisor = WeatherAdvisor::from_csv("data/weather_data.csv")?;
/// let wedding = Event::builder()
///     .name("Wedding")
///     .outdoors(true)
///     .cover_available(true)
///     .start_hour(15)
///     .build()?;
///
/// let assessment = advisor
///     .assess()
///     .event(&wedding)
///     .model(ModelKind::Sophisticated)
///     .window_days(14)
///     .call()?;
/// println!("{}", assessment);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WeatherAdvisor {
    series: WeatherSeries,
    window_days: usize,
}

#[bon]
impl WeatherAdvisor {
    /// Creates an advisor over `series`.
    ///
    /// `window_days` is the number of days windowed models average over when an
    /// assessment does not override it (default [`DEFAULT_WINDOW_DAYS`]).
    #[builder]
    pub fn new(
        series: WeatherSeries,
        #[builder(default = DEFAULT_WINDOW_DAYS)] window_days: usize,
    ) -> Self {
        Self {
            series,
            window_days,
        }
    }

    /// Creates an advisor from a CSV dataset with the default window.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::WeatherData`] if the file cannot be read or holds
    /// invalid rows.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, AdvisorError> {
        let series = WeatherDataLoader::new(path.as_ref()).load()?;
        Ok(Self::builder().series(series).build())
    }

    pub fn series(&self) -> &WeatherSeries {
        &self.series
    }

    pub fn window_days(&self) -> usize {
        self.window_days
    }

    /// Builds a prediction model of `kind`, over `window_days` if given.
    pub fn predict(
        &self,
        kind: ModelKind,
        window_days: Option<usize>,
    ) -> Result<PredictionModel, AdvisorError> {
        let n_days = window_days.unwrap_or(self.window_days);
        Ok(kind.build(&self.series, n_days)?)
    }

    /// Scores how advisable it is to hold `event` under the weather `model`
    /// predicts.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::Prediction`] if the series is empty or the window
    /// is zero days long.
    #[builder]
    pub fn assess(
        &self,
        event: &Event,
        model: ModelKind,
        window_days: Option<usize>,
    ) -> Result<Assessment, AdvisorError> {
        let prediction = self.predict(model, window_days)?;
        let decision = EventDecision::new(event, &prediction);
        let assessment = Assessment {
            model,
            number_days: prediction.number_days(),
            event: event.clone(),
            forecast: *decision.forecast(),
            temperature_factor: decision.temperature_factor(),
            rain_factor: decision.rain_factor(),
            advisability: decision.advisability(),
        };
        debug!(
            "{} over {} days: temperature factor {}, rain factor {}",
            model, assessment.number_days, assessment.temperature_factor, assessment.rain_factor
        );
        Ok(assessment)
    }
}
