//! Engine output records.
//!
//! Both types are immutable once produced and are rebuilt from scratch on
//! every engine invocation; nothing here is cached or mutated in place.

use chrono::NaiveDate;

use crate::{ForecastDay, Hobby};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The scored outcome for one (hobby, day) pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayScore {
    /// Local calendar date of the scored day.
    pub date: NaiveDate,
    /// Overall day score, `0..=100`.
    pub score: u8,
    /// The forecast the score was derived from.
    pub forecast: ForecastDay,
    /// Human-readable reasons the day suits the hobby, in evaluator order.
    pub matching_factors: Vec<String>,
    /// Human-readable caveats, in evaluator order.
    pub warning_factors: Vec<String>,
}

/// A ranked recommendation for one hobby.
///
/// `recommended_days` is sorted best-first and is never empty: hobbies with
/// zero eligible days are dropped from the output instead of appearing with
/// an empty list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HobbyRecommendation {
    /// The hobby the recommendation is for.
    pub hobby: Hobby,
    /// Eligible days, best-first.
    pub recommended_days: Vec<DayScore>,
    /// Score of the best day, `0..=100`.
    pub overall_score: u8,
    /// Index of the best day within `recommended_days`.
    ///
    /// Always `0` by construction; retained as an explicit field for
    /// forward compatibility with alternative selection strategies.
    pub best_day_index: usize,
}

impl HobbyRecommendation {
    /// Return the best-scoring day, if any.
    #[must_use]
    pub fn best_day(&self) -> Option<&DayScore> {
        self.recommended_days.get(self.best_day_index)
    }
}
