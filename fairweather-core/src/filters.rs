//! User-supplied recommendation filters.
//!
//! Filters are a sparse partial record: absent fields mean "no constraint".
//! Filters that exclude every day are valid input and simply yield an empty
//! result.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::WeatherType;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An inclusive calendar date window.
///
/// The constructor normalises swapped endpoints so that `start <= end`
/// always holds.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use fairweather_core::DateRange;
///
/// let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
/// let range = DateRange::new(end, start);
/// assert_eq!(range.start(), start);
/// assert!(range.contains(NaiveDate::from_ymd_opt(2024, 6, 7).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Construct a range, normalising swapped endpoints.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// First date of the window, inclusive.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the window, inclusive.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Report whether a date falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// User-supplied constraints applied by the recommendation pipeline.
///
/// # Examples
/// ```
/// use fairweather_core::{RecommendationFilters, WeatherType};
///
/// let filters = RecommendationFilters::new()
///     .with_min_score(70)
///     .with_weather_types([WeatherType::Clear, WeatherType::Clouds])
///     .without_weekends();
/// assert!(filters.allows_weather(&WeatherType::Clear));
/// assert!(!filters.allows_weather(&WeatherType::Rain));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecommendationFilters {
    /// Hobbies whose best-day score falls below this are dropped.
    pub min_score: Option<u8>,
    /// Only days inside this window are considered.
    pub date_range: Option<DateRange>,
    /// Allow-list of eligible conditions; days outside it are discarded.
    pub weather_types: Option<HashSet<WeatherType>>,
    /// Discard Saturdays and Sundays.
    pub exclude_weekends: bool,
    /// Discard Monday through Friday.
    pub exclude_weekdays: bool,
}

impl RecommendationFilters {
    /// Construct an unconstrained filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum best-day score while returning `self` for chaining.
    #[must_use]
    pub const fn with_min_score(mut self, score: u8) -> Self {
        self.min_score = Some(score);
        self
    }

    /// Set the date window while returning `self` for chaining.
    #[must_use]
    pub const fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Set the weather allow-list while returning `self` for chaining.
    #[must_use]
    pub fn with_weather_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = WeatherType>,
    {
        self.weather_types = Some(types.into_iter().collect());
        self
    }

    /// Discard weekend days while returning `self` for chaining.
    #[must_use]
    pub const fn without_weekends(mut self) -> Self {
        self.exclude_weekends = true;
        self
    }

    /// Discard weekdays while returning `self` for chaining.
    #[must_use]
    pub const fn without_weekdays(mut self) -> Self {
        self.exclude_weekdays = true;
        self
    }

    /// Report whether a date survives the window and day-of-week rules.
    ///
    /// Both exclusions may be set at once; no date survives then, which is
    /// valid input rather than an error.
    #[must_use]
    pub fn allows_date(&self, date: NaiveDate) -> bool {
        if self
            .date_range
            .is_some_and(|range| !range.contains(date))
        {
            return false;
        }
        let weekend = is_weekend(date);
        if self.exclude_weekends && weekend {
            return false;
        }
        if self.exclude_weekdays && !weekend {
            return false;
        }
        true
    }

    /// Report whether a condition survives the allow-list.
    #[must_use]
    pub fn allows_weather(&self, condition: &WeatherType) -> bool {
        self.weather_types
            .as_ref()
            .is_none_or(|allowed| allowed.contains(condition))
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
