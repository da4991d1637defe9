//! Scores how well one forecast day's conditions satisfy one hobby's
//! weather preferences.

use fairweather_core::{ForecastDay, Hobby};

use crate::factor::{Evaluation, Factor, NEUTRAL_SUBSCORE};
use crate::types::WeatherThresholds;

/// Weight at or above which a declared preference earns a matching factor.
const FAVOURABLE_WEIGHT: u8 = 7;

/// Weight at or below which a declared preference earns a warning factor.
const UNFAVOURABLE_WEIGHT: u8 = 3;

/// Effective weight for a condition the hobby declares no preference for.
const MISMATCH_WEIGHT: u8 = 1;

#[expect(
    clippy::float_arithmetic,
    reason = "weather matching normalises weights and applies penalties"
)]
pub(crate) fn evaluate_weather(
    hobby: &Hobby,
    day: &ForecastDay,
    thresholds: &WeatherThresholds,
) -> Evaluation {
    let mut factors = Vec::new();
    let mut subscore = if hobby.preferred_weather.is_empty() {
        NEUTRAL_SUBSCORE
    } else {
        let weight = match hobby.preferred_weather.weight(&day.weather) {
            Some(weight) => {
                if weight >= FAVOURABLE_WEIGHT {
                    factors.push(Factor::matching(format!(
                        "favourable {} conditions",
                        day.weather
                    )));
                } else if weight <= UNFAVOURABLE_WEIGHT {
                    factors.push(Factor::warning(format!(
                        "unfavourable {} conditions",
                        day.weather
                    )));
                }
                weight
            }
            None => {
                factors.push(Factor::warning(format!(
                    "no preference for {} conditions",
                    day.weather
                )));
                MISMATCH_WEIGHT
            }
        };
        f32::from(weight) / 10.0
    };

    // Outdoor hobbies are penalised for likely rain regardless of declared
    // preference; indoor hobbies are immune.
    if hobby.is_outdoor {
        if day.pop >= thresholds.rain_pop_threshold {
            factors.push(Factor::warning(format!(
                "high chance of rain ({:.0}%)",
                day.pop * 100.0
            )));
            subscore *= thresholds.rain_penalty;
        }
        if day.wind_speed >= thresholds.strong_wind_speed {
            factors.push(Factor::warning(format!(
                "strong wind ({:.1} m/s)",
                day.wind_speed
            )));
        }
    }

    Evaluation::new(subscore, factors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fairweather_core::WeatherType;
    use fairweather_core::test_support::sample_day;
    use rstest::{fixture, rstest};

    use crate::factor::FactorKind;

    #[fixture]
    fn day() -> ForecastDay {
        sample_day(
            NaiveDate::from_ymd_opt(2024, 6, 3).expect("valid date"),
            WeatherType::Clear,
        )
    }

    #[rstest]
    fn no_preferences_score_neutrally(day: ForecastDay) {
        let hobby = Hobby::new(1, "reading");
        let evaluation = evaluate_weather(&hobby, &day, &WeatherThresholds::default());
        assert_eq!(evaluation.subscore, 0.5);
        assert!(evaluation.factors.is_empty());
    }

    #[rstest]
    fn favourite_condition_scores_full(day: ForecastDay) {
        let hobby = Hobby::new(1, "cycling").with_weather_weight(WeatherType::Clear, 10);
        let evaluation = evaluate_weather(&hobby, &day, &WeatherThresholds::default());
        assert_eq!(evaluation.subscore, 1.0);
        assert!(
            evaluation
                .factors
                .iter()
                .any(|f| f.kind == FactorKind::Matching && f.text.contains("clear"))
        );
    }

    #[rstest]
    fn disliked_condition_warns(day: ForecastDay) {
        let hobby = Hobby::new(1, "cycling").with_weather_weight(WeatherType::Clear, 2);
        let evaluation = evaluate_weather(&hobby, &day, &WeatherThresholds::default());
        assert!(
            evaluation
                .factors
                .iter()
                .any(|f| f.kind == FactorKind::Warning)
        );
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test compares floating point values"
    )]
    fn undeclared_condition_is_a_mild_mismatch(day: ForecastDay) {
        let hobby = Hobby::new(1, "cycling").with_weather_weight(WeatherType::Snow, 9);
        let evaluation = evaluate_weather(&hobby, &day, &WeatherThresholds::default());
        assert!((evaluation.subscore - 0.1_f32).abs() < 0.000_1_f32);
        assert!(
            evaluation
                .factors
                .iter()
                .any(|f| f.kind == FactorKind::Warning && f.text.contains("clear"))
        );
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test compares floating point values"
    )]
    fn outdoor_hobby_is_penalised_for_likely_rain(day: ForecastDay) {
        let wet = ForecastDay { pop: 0.8, ..day };
        let hobby = Hobby::new(1, "cycling")
            .with_weather_weight(WeatherType::Clear, 10)
            .with_outdoor(true);
        let evaluation = evaluate_weather(&hobby, &wet, &WeatherThresholds::default());
        assert!((evaluation.subscore - 0.7_f32).abs() < 0.000_1_f32);
        assert!(
            evaluation
                .factors
                .iter()
                .any(|f| f.text.contains("high chance of rain"))
        );
    }

    #[rstest]
    fn penalty_applies_even_without_declared_preferences(day: ForecastDay) {
        let wet = ForecastDay { pop: 0.6, ..day };
        let hobby = Hobby::new(1, "birdwatching").with_outdoor(true);
        let evaluation = evaluate_weather(&hobby, &wet, &WeatherThresholds::default());
        assert!(evaluation.subscore < 0.5);
        assert!(
            evaluation
                .factors
                .iter()
                .any(|f| f.text.contains("high chance of rain"))
        );
    }

    #[rstest]
    fn indoor_hobby_is_immune_to_rain_penalty(day: ForecastDay) {
        let wet = ForecastDay { pop: 0.8, ..day };
        let hobby = Hobby::new(1, "board games").with_weather_weight(WeatherType::Clear, 10);
        let evaluation = evaluate_weather(&hobby, &wet, &WeatherThresholds::default());
        assert_eq!(evaluation.subscore, 1.0);
        assert!(!evaluation.factors.iter().any(|f| f.text.contains("rain")));
    }

    #[rstest]
    fn outdoor_hobby_is_warned_about_strong_wind(day: ForecastDay) {
        let windy = ForecastDay {
            wind_speed: 14.0,
            ..day
        };
        let hobby = Hobby::new(1, "cycling")
            .with_weather_weight(WeatherType::Clear, 10)
            .with_outdoor(true);
        let evaluation = evaluate_weather(&hobby, &windy, &WeatherThresholds::default());
        // Advisory only: the sub-score is untouched.
        assert_eq!(evaluation.subscore, 1.0);
        assert!(
            evaluation
                .factors
                .iter()
                .any(|f| f.kind == FactorKind::Warning && f.text.contains("strong wind"))
        );
    }
}
