use crate::prediction::error::PredictionError;
use crate::prediction::field::WeatherField;
use crate::prediction::window::Window;
use crate::types::forecast::Forecast;
use crate::types::wind_direction::WindDirection;
use crate::utils::{clamp_round_u8, round_half_even};
use crate::weather_data::series::WeatherSeries;
use std::cmp::Ordering;

// Rainfall (mm) to chance of rain (%), by pressure trend.
const FALLING_PRESSURE_RAIN_SCALE: f64 = 10.0;
const STEADY_PRESSURE_RAIN_SCALE: f64 = 7.0;
const EASTERLY_RAIN_SCALE: f64 = 1.2;
const MAX_CHANCE_OF_RAIN: u8 = 100;

const TEMPERATURE_SHIFT: f64 = 2.0;
const HUMIDITY_SHIFT: f64 = 15.0;
const MAX_HUMIDITY: u8 = 100;
const CLOUD_COVER_SHIFT: f64 = 2.0;
const MAX_CLOUD_COVER: u8 = 9;

// A maximum wind speed this many times the average marks a gusty window.
const GUST_RATIO: f64 = 4.0;
const GUSTY_WIND_SCALE: f64 = 1.2;

/// Predicts the weather from the average of the past `n` days, adjusted by how
/// yesterday's air pressure compares with the window's mean pressure and by
/// yesterday's wind.
#[derive(Debug, Clone, PartialEq)]
pub struct SophisticatedPrediction {
    window: Window,
}

impl SophisticatedPrediction {
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

    /// Yesterday's air pressure compared with the window mean. `Less` means
    /// pressure is below average.
    fn pressure_trend(&self) -> Ordering {
        self.window
            .yesterday()
            .air_pressure
            .partial_cmp(&self.average(WeatherField::AirPressure))
            .unwrap_or(Ordering::Equal)
    }

    fn wind_direction(&self) -> WindDirection {
        self.window.yesterday().wind_direction
    }

    pub fn chance_of_rain(&self) -> u8 {
        let mut chance = self.average(WeatherField::Rainfall);
        chance *= match self.pressure_trend() {
            Ordering::Less => FALLING_PRESSURE_RAIN_SCALE,
            Ordering::Equal | Ordering::Greater => STEADY_PRESSURE_RAIN_SCALE,
        };
        if self.wind_direction().is_easterly() {
            chance *= EASTERLY_RAIN_SCALE;
        }
        clamp_round_u8(chance, MAX_CHANCE_OF_RAIN)
    }

    pub fn high_temperature(&self) -> f64 {
        let high = self.average(WeatherField::HighTemperature);
        match self.pressure_trend() {
            Ordering::Less => high + TEMPERATURE_SHIFT,
            _ => high,
        }
    }

    pub fn low_temperature(&self) -> f64 {
        let low = self.average(WeatherField::LowTemperature);
        match self.pressure_trend() {
            Ordering::Greater => low - TEMPERATURE_SHIFT,
            _ => low,
        }
    }

    pub fn humidity(&self) -> u8 {
        let humidity = self.average(WeatherField::Humidity);
        let adjusted = match self.pressure_trend() {
            Ordering::Less => humidity + HUMIDITY_SHIFT,
            Ordering::Greater => humidity - HUMIDITY_SHIFT,
            Ordering::Equal => humidity,
        };
        clamp_round_u8(adjusted, MAX_HUMIDITY)
    }

    pub fn cloud_cover(&self) -> u8 {
        let cloud_cover = self.average(WeatherField::CloudCover);
        let adjusted = match self.pressure_trend() {
            Ordering::Less => cloud_cover + CLOUD_COVER_SHIFT,
            _ => cloud_cover,
        };
        clamp_round_u8(adjusted, MAX_CLOUD_COVER)
    }

    pub fn wind_speed(&self) -> f64 {
        let mut wind_speed = self.average(WeatherField::AverageWindSpeed);
        if self.window.yesterday().maximum_wind_speed > wind_speed * GUST_RATIO {
            wind_speed *= GUSTY_WIND_SCALE;
        }
        round_half_even(wind_speed)
    }

    /// Mean air pressure over the window, rounded.
    pub fn air_pressure(&self) -> f64 {
        round_half_even(self.average(WeatherField::AirPressure))
    }

    pub fn forecast(&self) -> Forecast {
        Forecast {
            chance_of_rain: self.chance_of_rain(),
            high_temperature: self.high_temperature(),
            low_temperature: self.low_temperature(),
            humidity: self.humidity(),
            cloud_cover: self.cloud_cover(),
            wind_speed: self.wind_speed(),
            air_pressure: Some(self.air_pressure()),
            wind_direction: Some(self.wind_direction()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::weather_record::WeatherRecord;

    struct Day {
        rainfall: f64,
        high: f64,
        low: f64,
        humidity: u8,
        cloud: u8,
        wind: f64,
        max_wind: f64,
        pressure: f64,
        direction: WindDirection,
    }

    impl Day {
        fn calm(pressure: f64) -> Self {
            Day {
                rainfall: 2.0,
                high: 24.0,
                low: 14.0,
                humidity: 60,
                cloud: 4,
                wind: 10.0,
                max_wind: 20.0,
                pressure,
                direction: WindDirection::W,
            }
        }

        fn record(&self) -> WeatherRecord {
            WeatherRecord::builder()
                .rainfall(self.rainfall)
                .high_temperature(self.high)
                .low_temperature(self.low)
                .humidity(self.humidity)
                .cloud_cover(self.cloud)
                .average_wind_speed(self.wind)
                .maximum_wind_speed(self.max_wind)
                .air_pressure(self.pressure)
                .wind_direction(self.direction)
                .build()
        }
    }

    /// Days listed oldest first; the last one is yesterday.
    fn build_model(days: &[Day]) -> Result<SophisticatedPrediction, PredictionError> {
        let series = WeatherSeries::new(days.iter().map(Day::record).collect());
        SophisticatedPrediction::new(&series, days.len())
    }

    #[test]
    fn test_low_pressure_yesterday() -> Result<(), PredictionError> {
        let model = build_model(&[Day::calm(1020.0), Day::calm(1020.0), Day::calm(1005.0)])?;
        assert_eq!(model.number_days(), 3);
        // 2.0 mm * 10
        assert_eq!(model.chance_of_rain(), 20);
        assert_eq!(model.high_temperature(), 26.0);
        assert_eq!(model.low_temperature(), 14.0);
        assert_eq!(model.humidity(), 75);
        assert_eq!(model.cloud_cover(), 6);
        assert_eq!(model.air_pressure(), 1015.0);
        Ok(())
    }

    #[test]
    fn test_high_pressure_yesterday() -> Result<(), PredictionError> {
        let model = build_model(&[Day::calm(1005.0), Day::calm(1005.0), Day::calm(1020.0)])?;
        // 2.0 mm * 7
        assert_eq!(model.chance_of_rain(), 14);
        assert_eq!(model.high_temperature(), 24.0);
        assert_eq!(model.low_temperature(), 12.0);
        assert_eq!(model.humidity(), 45);
        assert_eq!(model.cloud_cover(), 4);
        Ok(())
    }

    #[test]
    fn test_steady_pressure_leaves_averages() -> Result<(), PredictionError> {
        let model = build_model(&[Day::calm(1012.0), Day::calm(1012.0)])?;
        assert_eq!(model.chance_of_rain(), 14);
        assert_eq!(model.high_temperature(), 24.0);
        assert_eq!(model.low_temperature(), 14.0);
        assert_eq!(model.humidity(), 60);
        assert_eq!(model.cloud_cover(), 4);
        Ok(())
    }

    #[test]
    fn test_easterly_wind_raises_chance_of_rain() -> Result<(), PredictionError> {
        let mut yesterday = Day::calm(1005.0);
        yesterday.direction = WindDirection::ESE;
        let model = build_model(&[Day::calm(1020.0), yesterday])?;
        // 2.0 mm * 10 * 1.2
        assert_eq!(model.chance_of_rain(), 24);
        assert_eq!(model.forecast().wind_direction, Some(WindDirection::ESE));
        Ok(())
    }

    #[test]
    fn test_only_yesterdays_direction_counts() -> Result<(), PredictionError> {
        let mut older = Day::calm(1020.0);
        older.direction = WindDirection::E;
        let model = build_model(&[older, Day::calm(1005.0)])?;
        assert_eq!(model.chance_of_rain(), 20);
        Ok(())
    }

    #[test]
    fn test_clamps_saturated_values() -> Result<(), PredictionError> {
        let mut muggy = Day::calm(1020.0);
        muggy.humidity = 95;
        muggy.cloud = 9;
        let mut wet = Day::calm(990.0);
        wet.rainfall = 30.0;
        wet.humidity = 98;
        wet.cloud = 9;
        let model = build_model(&[muggy, wet])?;
        assert_eq!(model.chance_of_rain(), 100);
        assert_eq!(model.humidity(), 100);
        assert_eq!(model.cloud_cover(), 9);
        Ok(())
    }

    #[test]
    fn test_gusty_yesterday_raises_wind_speed() -> Result<(), PredictionError> {
        let mut gusty = Day::calm(1012.0);
        gusty.max_wind = 41.0;
        let model = build_model(&[Day::calm(1012.0), gusty])?;
        // 10 * 1.2
        assert_eq!(model.wind_speed(), 12.0);

        let mut breezy = Day::calm(1012.0);
        breezy.max_wind = 40.0;
        let model = build_model(&[Day::calm(1012.0), breezy])?;
        assert_eq!(model.wind_speed(), 10.0);
        Ok(())
    }

    #[test]
    fn test_number_days_is_clamped_to_series() -> Result<(), PredictionError> {
        let series = WeatherSeries::new(vec![Day::calm(1010.0).record(); 5]);
        for requested in 1..12 {
            let model = SophisticatedPrediction::new(&series, requested)?;
            assert_eq!(model.number_days(), requested.min(5));
        }
        Ok(())
    }
}
