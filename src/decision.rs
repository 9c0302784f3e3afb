//! Scores how advisable it is to hold an [`Event`] under the weather a
//! prediction model expects.
//!
//! The score combines a temperature factor and a rain factor and always lies in
//! `-5.0..=5.0`: -5 is very bad, 0 neutral, 5 ideal.

use crate::prediction::PredictionModel;
use crate::types::event::Event;
use crate::types::forecast::Forecast;

/// Bounds of the final advisability score.
pub const MIN_ADVISABILITY: f64 = -5.0;
pub const MAX_ADVISABILITY: f64 = 5.0;

// Humidity above this makes temperatures feel more extreme.
const HUMID_THRESHOLD: f64 = 70.0;
const HUMIDITY_DIVISOR: f64 = 20.0;

// Heat rules: daytime outdoors from HOT, any time from SCORCHING.
const DAYTIME_START: u8 = 6;
const DAYTIME_END: u8 = 19;
const HOT: f64 = 30.0;
const SCORCHING: f64 = 45.0;
const HEAT_DIVISOR: f64 = -5.0;
const HEAT_OFFSET: f64 = 6.0;

// Cold rule: night time with a low below CHILLY.
const EARLY_MORNING_END: u8 = 5;
const EVENING_START: u8 = 20;
const CHILLY: f64 = 5.0;
const COLD_DIVISOR: f64 = 5.0;
const COLD_OFFSET: f64 = 1.1;

// Mild rule: warm nights without heat.
const WARM_LOW: f64 = 15.0;
const MILD_SPREAD_DIVISOR: f64 = 5.0;

// A negative temperature factor is eased by shelter, a breeze or cloud.
const MITIGATION: f64 = 1.0;
const BREEZE_MIN: f64 = 3.0;
const BREEZE_MAX: f64 = 10.0;
const SHADING_CLOUD_COVER: u8 = 4;

// Rain rules.
const DRY_CHANCE: f64 = 20.0;
const DRY_DIVISOR: f64 = -5.0;
const DRY_OFFSET: f64 = 4.0;
const WET_CHANCE: f64 = 50.0;
const WET_DIVISOR: f64 = -20.0;
const WET_OFFSET: f64 = 1.0;
const SHELTERED_WIND_MAX: f64 = 5.0;
const SHELTER_BONUS: f64 = 1.0;
const WINDY_RAIN_FACTOR_MAX: f64 = 2.0;
const WINDY: f64 = 15.0;
const WIND_DIVISOR: f64 = -15.0;
const MIN_RAIN_FACTOR: f64 = -9.0;

/// Decides whether the predicted weather suits an event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDecision<'a> {
    event: &'a Event,
    forecast: Forecast,
}

impl<'a> EventDecision<'a> {
    /// Snapshots the forecast of `model` for `event`.
    pub fn new(event: &'a Event, model: &PredictionModel) -> Self {
        Self::from_forecast(event, model.forecast())
    }

    pub fn from_forecast(event: &'a Event, forecast: Forecast) -> Self {
        Self { event, forecast }
    }

    pub fn event(&self) -> &Event {
        self.event
    }

    pub fn forecast(&self) -> &Forecast {
        &self.forecast
    }

    /// High and low temperatures as they feel once humidity is accounted for.
    fn humidity_adjusted_temperatures(&self) -> (f64, f64) {
        let high = self.forecast.high_temperature;
        let low = self.forecast.low_temperature;
        let humidity = f64::from(self.forecast.humidity);
        if humidity <= HUMID_THRESHOLD {
            return (high, low);
        }
        let humidity_factor = humidity / HUMIDITY_DIVISOR;
        if high >= 0.0 || low >= 0.0 {
            (high + humidity_factor, low + humidity_factor)
        } else {
            (high - humidity_factor, low - humidity_factor)
        }
    }

    /// How the predicted temperature affects the event.
    pub fn temperature_factor(&self) -> f64 {
        let (high, low) = self.humidity_adjusted_temperatures();
        let hour = self.event.start_hour();
        let daytime = (DAYTIME_START..=DAYTIME_END).contains(&hour);
        let night = hour <= EARLY_MORNING_END || hour >= EVENING_START;

        let mut factor = if (daytime && self.event.outdoors() && high >= HOT) || high >= SCORCHING {
            high / HEAT_DIVISOR + HEAT_OFFSET
        } else if night && low < CHILLY && high < SCORCHING {
            low / COLD_DIVISOR - COLD_OFFSET
        } else if low > WARM_LOW && high < HOT {
            (high - low) / MILD_SPREAD_DIVISOR
        } else {
            0.0
        };

        if factor < 0.0 {
            let wind_speed = self.forecast.wind_speed;
            if self.event.cover_available()
                || (wind_speed > BREEZE_MIN && wind_speed < BREEZE_MAX)
                || self.forecast.cloud_cover > SHADING_CLOUD_COVER
            {
                factor += MITIGATION;
            }
        }
        factor
    }

    /// How the predicted chance of rain and wind affect the event.
    pub fn rain_factor(&self) -> f64 {
        let chance_of_rain = f64::from(self.forecast.chance_of_rain);
        let wind_speed = self.forecast.wind_speed;

        let mut factor = if chance_of_rain < DRY_CHANCE {
            chance_of_rain / DRY_DIVISOR + DRY_OFFSET
        } else if chance_of_rain > WET_CHANCE {
            chance_of_rain / WET_DIVISOR + WET_OFFSET
        } else {
            0.0
        };

        if self.event.outdoors() && self.event.cover_available() && wind_speed < SHELTERED_WIND_MAX
        {
            factor += SHELTER_BONUS;
        } else if factor < WINDY_RAIN_FACTOR_MAX && wind_speed > WINDY {
            factor = (factor + wind_speed / WIND_DIVISOR).max(MIN_RAIN_FACTOR);
        }
        factor
    }

    /// Overall advisability of going ahead with the event, within `-5.0..=5.0`.
    pub fn advisability(&self) -> f64 {
        (self.rain_factor() + self.temperature_factor())
            .clamp(MIN_ADVISABILITY, MAX_ADVISABILITY)
    }
}
