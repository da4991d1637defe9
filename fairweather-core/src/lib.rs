//! Core domain types for the fairweather recommendation engine.
//!
//! The crate models hobbies, forecasts, filters, and recommendation
//! results, together with the `HobbyStore` and `ForecastProvider` trait
//! seams the engine consumes its inputs through. Everything here is plain
//! data: scoring lives in `fairweather-scorer`.
//!
//! # Examples
//!
//! ```
//! use fairweather_core::{Hobby, TemperatureBounds, WeatherType};
//!
//! let hobby = Hobby::new(1, "cycling")
//!     .with_weather_weight(WeatherType::Clear, 10)
//!     .with_temperature_bounds(TemperatureBounds::new(Some(15.0), Some(28.0)))
//!     .with_outdoor(true);
//! assert_eq!(hobby.preferred_weather.weight(&WeatherType::Clear), Some(10));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod filters;
pub mod forecast;
pub mod hobby;
pub mod provider;
pub mod recommendation;
pub mod store;
pub mod time_of_day;
pub mod weather;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use filters::{DateRange, RecommendationFilters};
pub use forecast::{Forecast, ForecastDay, TemperatureRange};
pub use hobby::{
    Hobby, MAX_WEATHER_WEIGHT, MIN_WEATHER_WEIGHT, TemperatureBounds, WeatherPreferences,
    WeatherPreferencesError,
};
pub use provider::{ForecastError, ForecastProvider};
pub use recommendation::{DayScore, HobbyRecommendation};
pub use store::HobbyStore;
pub use time_of_day::TimeOfDay;
pub use weather::WeatherType;
