pub mod daily_observation;
pub mod month;
pub mod source_config;
pub mod weather_category;
