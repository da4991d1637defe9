//! Public configuration types for the recommendation engine.
#![forbid(unsafe_code)]

use crate::error::RecommendError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Relative weighting between the three evaluators.
///
/// Weather dominates because conditions are the primary forecast signal;
/// temperature differentiates; time-of-day is advisory only. Blending
/// divides by the total, so custom weights need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreWeights {
    /// Multiplier applied to the weather match sub-score.
    pub weather: f32,
    /// Multiplier applied to the temperature fit sub-score.
    pub temperature: f32,
    /// Multiplier applied to the time-of-day sub-score.
    pub time_of_day: f32,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidWeights`] when any value is not
    /// finite, any value is negative, or the total weight is zero.
    pub fn validate(self) -> Result<Self, RecommendError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(RecommendError::InvalidWeights)
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.has_non_zero_total()
    }

    const fn has_finite_values(self) -> bool {
        self.weather.is_finite() && self.temperature.is_finite() && self.time_of_day.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.weather >= 0.0_f32 && self.temperature >= 0.0_f32 && self.time_of_day >= 0.0_f32
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    const fn has_non_zero_total(self) -> bool {
        (self.weather + self.temperature + self.time_of_day) != 0.0_f32
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "score blending requires weighted averages"
    )]
    pub(crate) fn blend(self, weather: f32, temperature: f32, time_of_day: f32) -> f32 {
        let total = self.weather + self.temperature + self.time_of_day;
        if total == 0.0_f32 {
            return 0.0;
        }
        (weather * self.weather + temperature * self.temperature + time_of_day * self.time_of_day)
            / total
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            weather: 0.5_f32,
            temperature: 0.35_f32,
            time_of_day: 0.15_f32,
        }
    }
}

/// Tunable thresholds applied while evaluating one forecast day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherThresholds {
    /// Precipitation probability at which an outdoor hobby is warned.
    pub rain_pop_threshold: f32,
    /// Multiplier applied to the weather sub-score past the pop threshold.
    pub rain_penalty: f32,
    /// Width in degrees Celsius of the linear decay band outside the
    /// comfort bounds.
    pub temperature_band: f32,
    /// Wind speed in metres per second at which an outdoor hobby is warned.
    pub strong_wind_speed: f32,
}

impl Default for WeatherThresholds {
    fn default() -> Self {
        Self {
            rain_pop_threshold: 0.5_f32,
            rain_penalty: 0.7_f32,
            temperature_band: 10.0_f32,
            strong_wind_speed: 10.0_f32,
        }
    }
}
