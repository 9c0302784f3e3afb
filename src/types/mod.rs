pub mod event;
pub mod forecast;
pub mod weather_record;
pub mod wind_direction;
