//! Facade crate for the fairweather recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the scoring
//! engine behind a feature flag.

#![forbid(unsafe_code)]

pub use fairweather_core::{
    DateRange, DayScore, Forecast, ForecastDay, ForecastError, ForecastProvider, Hobby,
    HobbyRecommendation, HobbyStore, RecommendationFilters, TemperatureBounds, TemperatureRange,
    TimeOfDay, WeatherPreferences, WeatherPreferencesError, WeatherType,
};

#[cfg(feature = "scorer")]
pub use fairweather_scorer::{
    RecommendError, Recommender, ScoreWeights, WeatherThresholds, recommend, score_day,
};
