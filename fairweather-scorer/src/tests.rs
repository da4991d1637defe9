//! End-to-end coverage for the recommendation pipeline.
#![forbid(unsafe_code)]
#![expect(
    clippy::indexing_slicing,
    reason = "tests index into results they have just asserted non-empty"
)]

use chrono::NaiveDate;
use fairweather_core::test_support::sample_day;
use fairweather_core::{
    ForecastDay, Hobby, RecommendationFilters, TemperatureBounds, TemperatureRange, WeatherType,
};
use rstest::{fixture, rstest};

use crate::{Recommender, ScoreWeights, WeatherThresholds, recommend};

fn date(day: u32) -> NaiveDate {
    // June 2024: the 1st is a Saturday.
    NaiveDate::from_ymd_opt(2024, 6, day).expect("valid date")
}

#[fixture]
fn cycling() -> Hobby {
    Hobby::new(1, "cycling")
        .with_weather_weight(WeatherType::Clear, 10)
        .with_temperature_bounds(TemperatureBounds::new(Some(15.0), Some(28.0)))
        .with_outdoor(true)
}

#[fixture]
fn ideal_day() -> ForecastDay {
    ForecastDay {
        temperature: TemperatureRange::new(18.0, 24.0),
        pop: 0.1,
        ..sample_day(date(3), WeatherType::Clear)
    }
}

#[fixture]
fn dreadful_day() -> ForecastDay {
    ForecastDay {
        temperature: TemperatureRange::new(5.0, 10.0),
        pop: 0.8,
        ..sample_day(date(4), WeatherType::Rain)
    }
}

#[rstest]
fn ideal_day_is_recommended_highly(cycling: Hobby, ideal_day: ForecastDay) {
    let recommendations = recommend(&[cycling], &[ideal_day], &RecommendationFilters::new());

    assert_eq!(recommendations.len(), 1);
    let recommendation = &recommendations[0];
    assert!(recommendation.overall_score >= 90);
    let best = recommendation.best_day().expect("non-empty days");
    assert!(best.matching_factors.iter().any(|f| f.contains("clear")));
    assert!(!best.matching_factors.iter().any(|f| f.contains("rain")));
    assert!(best.warning_factors.is_empty());
}

#[rstest]
fn dreadful_day_scores_near_zero(cycling: Hobby, dreadful_day: ForecastDay) {
    let recommendations = recommend(&[cycling], &[dreadful_day], &RecommendationFilters::new());

    assert_eq!(recommendations.len(), 1);
    let best = recommendations[0].best_day().expect("non-empty days");
    assert!(best.score <= 25);
    assert!(
        best.warning_factors
            .iter()
            .any(|f| f.contains("rain") || f.contains("conditions"))
    );
    assert!(best.warning_factors.iter().any(|f| f.contains("too cold")));
    assert!(
        best.warning_factors
            .iter()
            .any(|f| f.contains("high chance of rain"))
    );
}

#[rstest]
fn min_score_drops_weak_hobbies(cycling: Hobby, ideal_day: ForecastDay) {
    // A hobby with no preferences scores 50 everywhere.
    let indifferent = Hobby::new(2, "reading");
    let filters = RecommendationFilters::new().with_min_score(70);

    let recommendations = recommend(&[cycling, indifferent], &[ideal_day], &filters);

    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].hobby.name, "cycling");
}

#[rstest]
fn allow_list_never_admits_excluded_weather(ideal_day: ForecastDay, dreadful_day: ForecastDay) {
    // The rain lover would score rainy days highest, yet the allow-list
    // still keeps them out of the recommended set.
    let rain_lover = Hobby::new(3, "puddle photography").with_weather_weight(WeatherType::Rain, 10);
    let filters = RecommendationFilters::new().with_weather_types([WeatherType::Clear]);

    let recommendations = recommend(&[rain_lover], &[ideal_day, dreadful_day], &filters);

    assert_eq!(recommendations.len(), 1);
    assert!(
        recommendations[0]
            .recommended_days
            .iter()
            .all(|day| day.forecast.weather == WeatherType::Clear)
    );
}

#[rstest]
fn inactive_hobbies_are_skipped(cycling: Hobby, ideal_day: ForecastDay) {
    let dormant = cycling.with_active(false);
    assert!(recommend(&[dormant], &[ideal_day], &RecommendationFilters::new()).is_empty());
}

#[rstest]
fn empty_inputs_yield_empty_output(ideal_day: ForecastDay, cycling: Hobby) {
    assert!(recommend(&[], &[ideal_day], &RecommendationFilters::new()).is_empty());
    assert!(recommend(&[cycling], &[], &RecommendationFilters::new()).is_empty());
}

#[rstest]
fn ranking_is_deterministic_and_non_increasing(ideal_day: ForecastDay) {
    let hobbies = vec![
        Hobby::new(1, "cycling").with_weather_weight(WeatherType::Clear, 10),
        Hobby::new(2, "archery").with_weather_weight(WeatherType::Clear, 10),
        Hobby::new(3, "reading"),
    ];
    let forecast = vec![ideal_day];
    let filters = RecommendationFilters::new();

    let first = recommend(&hobbies, &forecast, &filters);
    let second = recommend(&hobbies, &forecast, &filters);
    assert_eq!(first, second);

    let scores: Vec<_> = first.iter().map(|r| r.overall_score).collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));

    // Equal scores fall back to name order.
    assert_eq!(first[0].hobby.name, "archery");
    assert_eq!(first[1].hobby.name, "cycling");
}

#[rstest]
fn custom_weights_are_validated() {
    let invalid = ScoreWeights {
        weather: f32::NAN,
        temperature: 0.35,
        time_of_day: 0.15,
    };
    assert!(Recommender::new(invalid, WeatherThresholds::default()).is_err());

    let valid = ScoreWeights {
        weather: 1.0,
        temperature: 1.0,
        time_of_day: 1.0,
    };
    assert!(Recommender::new(valid, WeatherThresholds::default()).is_ok());
}

#[rstest]
fn raising_the_matching_weight_never_lowers_the_score(ideal_day: ForecastDay) {
    let mut previous = 0;
    for weight in 1..=10 {
        let hobby = Hobby::new(1, "cycling").with_weather_weight(WeatherType::Clear, weight);
        let recommendations = recommend(&[hobby], &[ideal_day.clone()], &RecommendationFilters::new());
        let score = recommendations[0].overall_score;
        assert!(score >= previous, "weight {weight} lowered the score");
        previous = score;
    }
}
