//! Combines the three evaluators into one 0–100 day score.

use fairweather_core::{DayScore, ForecastDay, Hobby};
use log::trace;

use crate::factor::{Factor, FactorKind};
use crate::temperature::evaluate_temperature;
use crate::time_of_day::evaluate_time_of_day;
use crate::types::{ScoreWeights, WeatherThresholds};
use crate::weather_match::evaluate_weather;

/// Score one forecast day for one hobby.
///
/// The weather, temperature, and time-of-day sub-scores are blended with
/// `weights`, scaled to `0..=100`, and the evaluators' factors are split
/// into the matching/warning lists in fixed evaluator order. Duplicate
/// factor strings are preserved so detail views keep evaluator provenance.
#[must_use]
pub fn score_day(
    hobby: &Hobby,
    day: &ForecastDay,
    weights: ScoreWeights,
    thresholds: &WeatherThresholds,
) -> DayScore {
    let weather = evaluate_weather(hobby, day, thresholds);
    let temperature = evaluate_temperature(hobby.temperature_bounds, day.temperature, thresholds);
    let time_of_day = evaluate_time_of_day(hobby);

    let blended = weights.blend(weather.subscore, temperature.subscore, time_of_day.subscore);
    let score = to_percentage(blended);
    trace!(
        "hobby '{}' scored {score} on {} ({})",
        hobby.name, day.date, day.weather
    );

    let (matching_factors, warning_factors) =
        split_factors([weather.factors, temperature.factors, time_of_day.factors]);

    DayScore {
        date: day.date,
        score,
        forecast: day.clone(),
        matching_factors,
        warning_factors,
    }
}

fn split_factors(groups: [Vec<Factor>; 3]) -> (Vec<String>, Vec<String>) {
    let mut matching = Vec::new();
    let mut warnings = Vec::new();
    for factor in groups.into_iter().flatten() {
        match factor.kind {
            FactorKind::Matching => matching.push(factor.text),
            FactorKind::Warning => warnings.push(factor.text),
        }
    }
    (matching, warnings)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "scaling a clamped 0..=1 blend onto 0..=100 is bounded"
)]
fn to_percentage(blended: f32) -> u8 {
    if !blended.is_finite() {
        return 0;
    }
    (blended * 100.0).round().clamp(0.0, 100.0) as u8
}
