//! Per-hobby aggregation: eligibility filtering, scoring, and best-day
//! selection.

use fairweather_core::{ForecastDay, Hobby, HobbyRecommendation, RecommendationFilters};
use log::debug;

use crate::day::score_day;
use crate::types::{ScoreWeights, WeatherThresholds};

/// Score every eligible forecast day for one hobby.
///
/// Date-range, day-of-week, and weather allow-list rules are hard filters:
/// excluded days are discarded, not down-scored. Returns `None` when no day
/// survives, so the hobby is dropped from the output rather than emitted
/// with an empty list.
pub(crate) fn recommend_for_hobby(
    hobby: &Hobby,
    forecast: &[ForecastDay],
    filters: &RecommendationFilters,
    weights: ScoreWeights,
    thresholds: &WeatherThresholds,
) -> Option<HobbyRecommendation> {
    if hobby.temperature_bounds.is_inverted() {
        debug!(
            "hobby '{}' has inverted temperature bounds; temperature fit scores zero",
            hobby.name
        );
    }

    let mut days: Vec<_> = forecast
        .iter()
        .filter(|day| filters.allows_date(day.date) && filters.allows_weather(&day.weather))
        .map(|day| score_day(hobby, day, weights, thresholds))
        .collect();

    if days.is_empty() {
        debug!("hobby '{}' has no eligible forecast days", hobby.name);
        return None;
    }

    // Best first; ties go to the earliest date so reruns are deterministic.
    days.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.date.cmp(&b.date)));
    let overall_score = days.first().map(|day| day.score)?;

    Some(HobbyRecommendation {
        hobby: hobby.clone(),
        recommended_days: days,
        overall_score,
        best_day_index: 0,
    })
}
