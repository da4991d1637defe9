//! Forecast values supplied by a forecast provider.
//!
//! Days are local calendar dates at day granularity; the provider is
//! responsible for timezone resolution before the engine sees the data.

use chrono::NaiveDate;

use crate::WeatherType;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Forecast minimum and maximum temperature for one day, in degrees Celsius.
///
/// # Examples
/// ```
/// use fairweather_core::TemperatureRange;
///
/// let range = TemperatureRange::new(18.0, 24.0);
/// assert_eq!(range.midpoint(), 21.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemperatureRange {
    /// Daily minimum.
    pub min: f32,
    /// Daily maximum.
    pub max: f32,
}

impl TemperatureRange {
    /// Construct a range from daily minimum and maximum.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// The representative temperature for the day.
    #[must_use]
    pub fn midpoint(&self) -> f32 {
        f32::midpoint(self.min, self.max)
    }
}

/// One day of a multi-day forecast.
///
/// All fields mirror what daily forecast feeds report; only `date`,
/// `weather`, `temperature`, and `pop` drive scoring. Humidity, wind speed,
/// and UV index are carried for display and for outdoor advisory factors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForecastDay {
    /// Local calendar date.
    pub date: NaiveDate,
    /// Categorical condition for the day.
    pub weather: WeatherType,
    /// Free-text condition label from the provider.
    pub description: String,
    /// Daily temperature range in degrees Celsius.
    pub temperature: TemperatureRange,
    /// Probability of precipitation, `0.0..=1.0`.
    pub pop: f32,
    /// Relative humidity percentage, `0..=100`.
    pub humidity: u8,
    /// Wind speed in metres per second, non-negative.
    pub wind_speed: f32,
    /// UV index; `None` when the provider does not report one.
    pub uv_index: Option<f32>,
}

/// An ordered multi-day forecast for one location.
///
/// # Examples
/// ```
/// use fairweather_core::Forecast;
///
/// let forecast = Forecast::new(Vec::new());
/// assert!(forecast.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Forecast {
    days: Vec<ForecastDay>,
}

impl Forecast {
    /// Construct a forecast from an ordered sequence of days.
    #[must_use]
    pub fn new(days: Vec<ForecastDay>) -> Self {
        Self { days }
    }

    /// Return the forecast days in provider order.
    #[must_use]
    pub fn days(&self) -> &[ForecastDay] {
        &self.days
    }

    /// Return the number of forecast days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Report whether the forecast contains no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Consume the wrapper and return the underlying days.
    #[must_use]
    pub fn into_days(self) -> Vec<ForecastDay> {
        self.days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_symmetric() {
        assert_eq!(TemperatureRange::new(-4.0, 10.0).midpoint(), 3.0);
        assert_eq!(TemperatureRange::new(10.0, -4.0).midpoint(), 3.0);
    }

    #[test]
    fn forecast_preserves_provider_order() {
        let first = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        let second = NaiveDate::from_ymd_opt(2024, 6, 2).expect("valid date");
        let days = vec![
            ForecastDay {
                date: second,
                weather: WeatherType::Clouds,
                description: String::from("overcast"),
                temperature: TemperatureRange::new(10.0, 16.0),
                pop: 0.2,
                humidity: 70,
                wind_speed: 3.0,
                uv_index: None,
            },
            ForecastDay {
                date: first,
                weather: WeatherType::Clear,
                description: String::from("sunny"),
                temperature: TemperatureRange::new(12.0, 20.0),
                pop: 0.0,
                humidity: 55,
                wind_speed: 2.0,
                uv_index: Some(5.0),
            },
        ];
        let forecast = Forecast::new(days);
        assert_eq!(forecast.len(), 2);
        let dates: Vec<_> = forecast.days().iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![second, first]);
    }
}
