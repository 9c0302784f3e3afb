//! Contains `WeatherSeries`, the chronological collection of daily observations
//! every prediction model is built from.

use crate::prediction::error::PredictionError;
use crate::types::weather_record::WeatherRecord;

/// An ordered history of daily weather records.
///
/// Records are held oldest first, the way a dataset file lists them. Consumers
/// should not rely on that order and use [`WeatherSeries::most_recent`] instead,
/// which always returns the newest record first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherSeries {
    records: Vec<WeatherRecord>,
}

impl WeatherSeries {
    /// Creates a series from records listed oldest first.
    pub fn new(records: Vec<WeatherRecord>) -> Self {
        Self { records }
    }

    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns up to `n` of the chronologically latest records, newest first.
    ///
    /// `n` is clamped to [`WeatherSeries::size`]; asking for more days than the
    /// series holds is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`PredictionError::InsufficientData`] if the series is empty.
    pub fn most_recent(&self, n: usize) -> Result<Vec<WeatherRecord>, PredictionError> {
        if self.records.is_empty() {
            return Err(PredictionError::InsufficientData);
        }
        Ok(self.records.iter().rev().take(n).copied().collect())
    }

    /// Iterates over the records oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &WeatherRecord> {
        self.records.iter()
    }
}

impl FromIterator<WeatherRecord> for WeatherSeries {
    fn from_iter<T: IntoIterator<Item = WeatherRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
