use crate::prediction::error::PredictionError;
use crate::prediction::field::WeatherField;
use crate::prediction::window::Window;
use crate::types::forecast::Forecast;
use crate::utils::{clamp_round_u8, round_half_even};
use crate::weather_data::series::WeatherSeries;

// Scales average rainfall (mm) into a chance of rain (%).
const RAINFALL_TO_CHANCE: f64 = 9.0;
const MAX_CHANCE_OF_RAIN: u8 = 100;
const MAX_HUMIDITY: u8 = 100;
const MAX_CLOUD_COVER: u8 = 9;

/// Predicts the weather from the plain average of the past `n` days.
///
/// Temperatures are the extremes seen over the window; everything else is a
/// rounded mean.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplePrediction {
    window: Window,
}

impl SimplePrediction {
    /// Snapshots the latest `n_days` of `series`. Asking for more days than the
    /// series holds uses the whole series.
    ///
    /// # Errors
    ///
    /// Returns [`PredictionError::InvalidArgument`] if `n_days` is zero and
    /// [`PredictionError::InsufficientData`] if `series` is empty.
    pub fn new(series: &WeatherSeries, n_days: usize) -> Result<Self, PredictionError> {
        Ok(Self {
            window: Window::latest(series, n_days)?,
        })
    }

    pub fn number_days(&self) -> usize {
        self.window.len()
    }

    pub fn average(&self, field: WeatherField) -> f64 {
        self.window.average(field)
    }

    pub fn chance_of_rain(&self) -> u8 {
        let chance = self.average(WeatherField::Rainfall) * RAINFALL_TO_CHANCE;
        clamp_round_u8(chance, MAX_CHANCE_OF_RAIN)
    }

    /// Highest temperature seen over the window.
    pub fn high_temperature(&self) -> f64 {
        self.window.max(WeatherField::HighTemperature)
    }

    /// Lowest temperature seen over the window.
    pub fn low_temperature(&self) -> f64 {
        self.window.min(WeatherField::LowTemperature)
    }

    pub fn humidity(&self) -> u8 {
        clamp_round_u8(self.average(WeatherField::Humidity), MAX_HUMIDITY)
    }

    pub fn cloud_cover(&self) -> u8 {
        clamp_round_u8(self.average(WeatherField::CloudCover), MAX_CLOUD_COVER)
    }

    pub fn wind_speed(&self) -> f64 {
        round_half_even(self.average(WeatherField::AverageWindSpeed))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::weather_record::WeatherRecord;
    use crate::types::wind_direction::WindDirection;

    fn day(
        rainfall: f64,
        high: f64,
        low: f64,
        humidity: u8,
        cloud: u8,
        wind: f64,
    ) -> WeatherRecord {
        WeatherRecord::builder()
            .rainfall(rainfall)
            .high_temperature(high)
            .low_temperature(low)
            .humidity(humidity)
            .cloud_cover(cloud)
            .average_wind_speed(wind)
            .maximum_wind_speed(wind * 2.0)
            .air_pressure(1013.0)
            .wind_direction(WindDirection::W)
            .build()
    }

    fn sample_series() -> WeatherSeries {
        WeatherSeries::new(vec![
            day(40.0, 35.0, 2.0, 10, 0, 50.0), // oldest, outside a 3 day window
            day(1.0, 22.0, 9.5, 70, 2, 10.0),
            day(2.0, 27.5, 12.0, 80, 3, 11.0),
            day(0.0, 24.0, 11.0, 61, 8, 14.0),
        ])
    }

    #[test]
    fn test_window_forecast() -> Result<(), PredictionError> {
        let model = SimplePrediction::new(&sample_series(), 3)?;
        assert_eq!(model.number_days(), 3);
        // mean rainfall 1.0 mm * 9
        assert_eq!(model.chance_of_rain(), 9);
        assert_eq!(model.high_temperature(), 27.5);
        assert_eq!(model.low_temperature(), 9.5);
        // (70 + 80 + 61) / 3 = 70.33
        assert_eq!(model.humidity(), 70);
        // (2 + 3 + 8) / 3 = 4.33
        assert_eq!(model.cloud_cover(), 4);
        // (10 + 11 + 14) / 3 = 11.67
        assert_eq!(model.wind_speed(), 12.0);
        Ok(())
    }

    #[test]
    fn test_chance_of_rain_is_capped() -> Result<(), PredictionError> {
        let model = SimplePrediction::new(&sample_series(), 4)?;
        // mean rainfall 10.75 mm * 9 = 96.75
        assert_eq!(model.chance_of_rain(), 97);

        let soaked = WeatherSeries::new(vec![day(60.0, 20.0, 10.0, 90, 9, 5.0)]);
        assert_eq!(SimplePrediction::new(&soaked, 1)?.chance_of_rain(), 100);
        Ok(())
    }

    #[test]
    fn test_number_days_is_clamped_to_series() -> Result<(), PredictionError> {
        let series = sample_series();
        for requested in 1..10 {
            let model = SimplePrediction::new(&series, requested)?;
            assert_eq!(model.number_days(), requested.min(series.size()));
        }
        Ok(())
    }

    #[test]
    fn test_zero_days_is_invalid() {
        assert!(matches!(
            SimplePrediction::new(&sample_series(), 0),
            Err(PredictionError::InvalidArgument { argument: "n_days", .. })
        ));
    }

    #[test]
    fn test_identical_inputs_give_identical_forecasts() -> Result<(), PredictionError> {
        let series = sample_series();
        let a = SimplePrediction::new(&series, 3)?;
        let b = SimplePrediction::new(&series, 3)?;
        assert_eq!(a.forecast(), b.forecast());
        Ok(())
    }
}
