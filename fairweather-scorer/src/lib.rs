//! Recommendation scoring for the fairweather engine.
//!
//! The crate turns (hobby preferences × forecast days × user filters) into
//! a ranked, explainable set of [`HobbyRecommendation`] values. Three
//! evaluators score each (hobby, day) pair — weather match, temperature
//! fit, and time-of-day alignment — and a weighted blend produces one
//! 0–100 score per day together with human-readable matching and warning
//! factors. Per hobby, eligible days are sorted best-first; hobbies are
//! then ranked by their best day's score.
//!
//! The engine is a pure function: no I/O, no caching, no mutation of its
//! inputs. Invoking it twice with identical arguments yields identical
//! output.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use fairweather_core::{
//!     ForecastDay, Hobby, RecommendationFilters, TemperatureBounds, TemperatureRange,
//!     WeatherType,
//! };
//! use fairweather_scorer::recommend;
//!
//! let hobby = Hobby::new(1, "cycling")
//!     .with_weather_weight(WeatherType::Clear, 10)
//!     .with_temperature_bounds(TemperatureBounds::new(Some(15.0), Some(28.0)))
//!     .with_outdoor(true);
//! let day = ForecastDay {
//!     date: NaiveDate::from_ymd_opt(2024, 6, 3).expect("valid date"),
//!     weather: WeatherType::Clear,
//!     description: String::from("sunny"),
//!     temperature: TemperatureRange::new(18.0, 24.0),
//!     pop: 0.1,
//!     humidity: 50,
//!     wind_speed: 2.0,
//!     uv_index: None,
//! };
//!
//! let recommendations = recommend(&[hobby], &[day], &RecommendationFilters::new());
//! assert_eq!(recommendations.len(), 1);
//! assert!(recommendations[0].overall_score >= 90);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use fairweather_core::{ForecastDay, Hobby, HobbyRecommendation, RecommendationFilters};

mod aggregate;
mod day;
mod error;
pub(crate) mod factor;
mod temperature;
mod time_of_day;
mod types;
mod weather_match;

pub use day::score_day;
pub use error::RecommendError;
pub use types::{ScoreWeights, WeatherThresholds};

use aggregate::recommend_for_hobby;

/// The recommendation engine with its validated configuration.
///
/// The default configuration weights weather 0.5, temperature 0.35, and
/// time-of-day 0.15. All fields are `Copy`, so the recommender is freely
/// shareable across call sites and threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Recommender {
    weights: ScoreWeights,
    thresholds: WeatherThresholds,
}

impl Recommender {
    /// Construct a recommender from custom weights and thresholds.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidWeights`] when the weights are not
    /// finite, are negative, or sum to zero.
    pub fn new(
        weights: ScoreWeights,
        thresholds: WeatherThresholds,
    ) -> Result<Self, RecommendError> {
        let validated = weights.validate()?;
        Ok(Self {
            weights: validated,
            thresholds,
        })
    }

    /// Produce ranked recommendations for the given hobbies and forecast.
    ///
    /// Inactive hobbies are skipped; hobbies with zero eligible days are
    /// dropped. Survivors are ordered by best-day score descending, ties
    /// broken by hobby name, so identical inputs always produce identical
    /// output.
    #[must_use]
    pub fn recommend(
        &self,
        hobbies: &[Hobby],
        forecast: &[ForecastDay],
        filters: &RecommendationFilters,
    ) -> Vec<HobbyRecommendation> {
        let mut recommendations: Vec<_> = hobbies
            .iter()
            .filter(|hobby| hobby.is_active)
            .filter_map(|hobby| {
                recommend_for_hobby(hobby, forecast, filters, self.weights, &self.thresholds)
            })
            .filter(|recommendation| {
                filters
                    .min_score
                    .is_none_or(|min| recommendation.overall_score >= min)
            })
            .collect();

        recommendations.sort_by(|a, b| {
            b.overall_score
                .cmp(&a.overall_score)
                .then_with(|| a.hobby.name.cmp(&b.hobby.name))
        });
        recommendations
    }
}

/// Produce ranked recommendations with the default configuration.
///
/// Convenience wrapper over [`Recommender::recommend`].
#[must_use]
pub fn recommend(
    hobbies: &[Hobby],
    forecast: &[ForecastDay],
    filters: &RecommendationFilters,
) -> Vec<HobbyRecommendation> {
    Recommender::default().recommend(hobbies, forecast, filters)
}

#[cfg(test)]
mod tests;
