use crate::prediction::error::PredictionError;
use crate::prediction::field::{average_over_window, WeatherField};
use crate::types::weather_record::WeatherRecord;
use crate::weather_data::series::WeatherSeries;
use log::debug;
use ordered_float::OrderedFloat;

/// A snapshot of the most recent days of a series, newest first. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Window {
    records: Vec<WeatherRecord>,
}

impl Window {
    /// Takes the latest `n_days` of `series`, clamped to the series length.
    pub(crate) fn latest(series: &WeatherSeries, n_days: usize) -> Result<Self, PredictionError> {
        if n_days == 0 {
            return Err(PredictionError::InvalidArgument {
                argument: "n_days",
                value: n_days,
                reason: "a prediction needs at least one day of data",
            });
        }
        let records = series.most_recent(n_days)?;
        if records.len() < n_days {
            debug!(
                "Requested {} days of data but the series holds {}, using {}",
                n_days,
                series.size(),
                records.len()
            );
        }
        Ok(Self { records })
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    /// The newest record of the window.
    pub(crate) fn yesterday(&self) -> &WeatherRecord {
        &self.records[0]
    }

    pub(crate) fn average(&self, field: WeatherField) -> f64 {
        average_over_window(&self.records, field)
    }

    pub(crate) fn max(&self, field: WeatherField) -> f64 {
        let accessor = field.accessor();
        self.records
            .iter()
            .map(|r| OrderedFloat(accessor(r)))
            .max()
            .map_or(f64::NAN, OrderedFloat::into_inner)
    }

    pub(crate) fn min(&self, field: WeatherField) -> f64 {
        let accessor = field.accessor();
        self.records
            .iter()
            .map(|r| OrderedFloat(accessor(r)))
            .min()
            .map_or(f64::NAN, OrderedFloat::into_inner)
    }
}
