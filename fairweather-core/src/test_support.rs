//! Test-only, in-memory collaborator implementations used by unit and
//! behaviour tests.

use chrono::NaiveDate;

use crate::{
    Forecast, ForecastDay, ForecastError, ForecastProvider, Hobby, HobbyStore, TemperatureRange,
    WeatherType,
};

/// In-memory `HobbyStore` implementation used in tests.
///
/// The store performs a linear scan and is intended only for small fixtures.
#[derive(Default, Debug)]
pub struct MemoryHobbyStore {
    hobbies: Vec<Hobby>,
}

impl MemoryHobbyStore {
    /// Create a store containing a single hobby.
    #[must_use]
    pub fn with_hobby(hobby: Hobby) -> Self {
        Self::with_hobbies(std::iter::once(hobby))
    }

    /// Create a store from a collection of hobbies.
    pub fn with_hobbies<I>(hobbies: I) -> Self
    where
        I: IntoIterator<Item = Hobby>,
    {
        Self {
            hobbies: hobbies.into_iter().collect(),
        }
    }
}

impl HobbyStore for MemoryHobbyStore {
    fn active_hobbies(&self) -> Box<dyn Iterator<Item = Hobby> + Send + '_> {
        Box::new(
            self.hobbies
                .iter()
                .filter(|hobby| hobby.is_active)
                .cloned(),
        )
    }
}

/// Deterministic `ForecastProvider` returning a canned forecast.
#[derive(Default, Debug, Clone)]
pub struct StaticForecastProvider {
    forecast: Forecast,
}

impl StaticForecastProvider {
    /// Create a provider that always returns `forecast`.
    #[must_use]
    pub fn new(forecast: Forecast) -> Self {
        Self { forecast }
    }
}

impl ForecastProvider for StaticForecastProvider {
    fn daily_forecast(&self) -> Result<Forecast, ForecastError> {
        Ok(self.forecast.clone())
    }
}

/// Build a calm, dry forecast day for fixtures.
///
/// Tests override individual fields through struct update syntax.
#[must_use]
pub fn sample_day(date: NaiveDate, weather: WeatherType) -> ForecastDay {
    ForecastDay {
        date,
        weather,
        description: weather.as_str().to_owned(),
        temperature: TemperatureRange::new(12.0, 20.0),
        pop: 0.0,
        humidity: 50,
        wind_speed: 2.0,
        uv_index: None,
    }
}
