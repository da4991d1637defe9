//! Hobby records and the preference types attached to them.
//!
//! Hobbies are owned by the hobby store and read-only to the engine. The
//! preference types here favour structural optionality: an absent bound is
//! `None`, never a sentinel value.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::{TimeOfDay, WeatherType};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest accepted weather preference weight.
pub const MIN_WEATHER_WEIGHT: u8 = 1;

/// Largest accepted weather preference weight.
pub const MAX_WEATHER_WEIGHT: u8 = 10;

/// Per-condition weather preference weights in `1..=10`.
///
/// An empty set is valid and means the hobby has no weather preference, which
/// the engine scores neutrally.
///
/// # Examples
/// ```
/// use fairweather_core::{WeatherPreferences, WeatherType};
///
/// let preferences = WeatherPreferences::new()
///     .with_weight(WeatherType::Clear, 9)
///     .with_weight(WeatherType::Clouds, 6);
/// assert_eq!(preferences.weight(&WeatherType::Clear), Some(9));
/// assert!(preferences.weight(&WeatherType::Rain).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherPreferences {
    weights: HashMap<WeatherType, u8>,
}

/// Errors returned by [`WeatherPreferences::try_set_weight`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeatherPreferencesError {
    /// A weight fell outside `1..=10`.
    #[error("weather weight must be between {MIN_WEATHER_WEIGHT} and {MAX_WEATHER_WEIGHT}, got {weight}")]
    WeightOutOfRange {
        /// The rejected weight.
        weight: u8,
    },
}

impl WeatherPreferences {
    /// Construct an empty preference set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the weight for a condition, if present.
    #[must_use]
    pub fn weight(&self, condition: &WeatherType) -> Option<u8> {
        self.weights.get(condition).copied()
    }

    /// Insert or update a condition weight.
    ///
    /// Values are clamped into `1..=10`.
    pub fn set_weight(&mut self, condition: WeatherType, weight: u8) {
        let clamped = weight.clamp(MIN_WEATHER_WEIGHT, MAX_WEATHER_WEIGHT);
        self.weights.insert(condition, clamped);
    }

    /// Insert a condition weight, rejecting out-of-range values.
    ///
    /// # Errors
    /// Returns [`WeatherPreferencesError::WeightOutOfRange`] when `weight`
    /// falls outside `1..=10`; the preference set is left unchanged.
    pub fn try_set_weight(
        &mut self,
        condition: WeatherType,
        weight: u8,
    ) -> Result<(), WeatherPreferencesError> {
        if !(MIN_WEATHER_WEIGHT..=MAX_WEATHER_WEIGHT).contains(&weight) {
            return Err(WeatherPreferencesError::WeightOutOfRange { weight });
        }
        self.weights.insert(condition, weight);
        Ok(())
    }

    /// Add a condition weight while returning `self` for chaining.
    #[must_use]
    pub fn with_weight(mut self, condition: WeatherType, weight: u8) -> Self {
        self.set_weight(condition, weight);
        self
    }

    /// Report whether the hobby declares no weather preference.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Return the number of declared condition preferences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }
}

/// Inclusive comfort bounds in degrees Celsius.
///
/// `None` means unbounded on that side, structurally distinct from a bound
/// of zero.
///
/// # Examples
/// ```
/// use fairweather_core::TemperatureBounds;
///
/// let bounds = TemperatureBounds::new(Some(15.0), Some(28.0));
/// assert!(bounds.contains(21.0));
/// assert!(!bounds.contains(30.0));
///
/// let open = TemperatureBounds::new(Some(5.0), None);
/// assert!(open.contains(40.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemperatureBounds {
    /// Lower comfort bound, inclusive.
    pub min: Option<f32>,
    /// Upper comfort bound, inclusive.
    pub max: Option<f32>,
}

impl TemperatureBounds {
    /// Construct bounds from optional endpoints.
    #[must_use]
    pub const fn new(min: Option<f32>, max: Option<f32>) -> Self {
        Self { min, max }
    }

    /// Bounds that accept every temperature.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Report whether both endpoints are absent.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Report whether the bounds are malformed (`min > max`).
    ///
    /// Inverted bounds are handled defensively by the engine: they fail the
    /// temperature fit for every day instead of aborting scoring.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }

    /// Report whether a temperature satisfies both bounds.
    ///
    /// Open bounds are treated as negative/positive infinity.
    #[must_use]
    pub fn contains(&self, temperature: f32) -> bool {
        self.min.is_none_or(|min| temperature >= min)
            && self.max.is_none_or(|max| temperature <= max)
    }
}

/// A user-registered hobby with its weather and scheduling preferences.
///
/// # Examples
/// ```
/// use fairweather_core::{Hobby, TemperatureBounds, TimeOfDay, WeatherType};
///
/// let hobby = Hobby::new(1, "cycling")
///     .with_weather_weight(WeatherType::Clear, 10)
///     .with_time_of_day(TimeOfDay::Morning)
///     .with_temperature_bounds(TemperatureBounds::new(Some(15.0), Some(28.0)))
///     .with_outdoor(true);
/// assert!(hobby.is_active);
/// assert!(hobby.is_outdoor);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hobby {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Per-condition weather preference weights.
    pub preferred_weather: WeatherPreferences,
    /// Preferred activity windows; empty means no preference.
    pub preferred_time_of_day: HashSet<TimeOfDay>,
    /// Only active hobbies are eligible for recommendation.
    pub is_active: bool,
    /// Outdoor hobbies are more sensitive to precipitation and wind.
    pub is_outdoor: bool,
    /// Inclusive comfort bounds in degrees Celsius.
    pub temperature_bounds: TemperatureBounds,
}

impl Hobby {
    /// Construct an active indoor hobby with no preferences.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            preferred_weather: WeatherPreferences::new(),
            preferred_time_of_day: HashSet::new(),
            is_active: true,
            is_outdoor: false,
            temperature_bounds: TemperatureBounds::unbounded(),
        }
    }

    /// Set the display description while returning `self` for chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a weather preference weight while returning `self` for chaining.
    #[must_use]
    pub fn with_weather_weight(mut self, condition: WeatherType, weight: u8) -> Self {
        self.preferred_weather.set_weight(condition, weight);
        self
    }

    /// Add a preferred activity window while returning `self` for chaining.
    #[must_use]
    pub fn with_time_of_day(mut self, window: TimeOfDay) -> Self {
        self.preferred_time_of_day.insert(window);
        self
    }

    /// Set the comfort bounds while returning `self` for chaining.
    #[must_use]
    pub fn with_temperature_bounds(mut self, bounds: TemperatureBounds) -> Self {
        self.temperature_bounds = bounds;
        self
    }

    /// Flag the hobby as outdoor or indoor.
    #[must_use]
    pub fn with_outdoor(mut self, outdoor: bool) -> Self {
        self.is_outdoor = outdoor;
        self
    }

    /// Flag the hobby as active or dormant.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(11, 10)]
    #[case(255, 10)]
    fn set_weight_clamps_out_of_range(#[case] weight: u8, #[case] expected: u8) {
        let mut preferences = WeatherPreferences::new();
        preferences.set_weight(WeatherType::Clear, weight);
        assert_eq!(preferences.weight(&WeatherType::Clear), Some(expected));
    }

    #[rstest]
    #[case(1)]
    #[case(10)]
    fn try_set_weight_accepts_boundary_weights(#[case] weight: u8) {
        let mut preferences = WeatherPreferences::new();
        assert!(
            preferences
                .try_set_weight(WeatherType::Rain, weight)
                .is_ok()
        );
    }

    #[rstest]
    #[case(0)]
    #[case(11)]
    fn try_set_weight_rejects_out_of_range(#[case] weight: u8) {
        let mut preferences = WeatherPreferences::new();
        let err = preferences
            .try_set_weight(WeatherType::Rain, weight)
            .unwrap_err();
        assert_eq!(err, WeatherPreferencesError::WeightOutOfRange { weight });
        assert!(preferences.is_empty());
    }

    #[rstest]
    fn bounds_treat_open_sides_as_infinite() {
        let lower_only = TemperatureBounds::new(Some(0.0), None);
        assert!(lower_only.contains(45.0));
        assert!(!lower_only.contains(-5.0));

        let upper_only = TemperatureBounds::new(None, Some(20.0));
        assert!(upper_only.contains(-40.0));
        assert!(!upper_only.contains(25.0));
    }

    #[rstest]
    fn bounds_detect_inversion() {
        assert!(TemperatureBounds::new(Some(20.0), Some(10.0)).is_inverted());
        assert!(!TemperatureBounds::new(Some(10.0), Some(20.0)).is_inverted());
        assert!(!TemperatureBounds::unbounded().is_inverted());
    }

    #[rstest]
    fn new_hobby_is_active_and_indoor() {
        let hobby = Hobby::new(7, "reading");
        assert!(hobby.is_active);
        assert!(!hobby.is_outdoor);
        assert!(hobby.preferred_weather.is_empty());
        assert!(hobby.temperature_bounds.is_unbounded());
    }
}
