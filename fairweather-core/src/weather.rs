//! Categorical weather conditions reported by forecast providers.
//!
//! The enum offers compile-time safety for preference lookups and filter
//! allow-lists.
//!
//! # Examples
//! ```
//! use fairweather_core::WeatherType;
//!
//! assert_eq!(WeatherType::Clear.as_str(), "clear");
//! assert_eq!(WeatherType::Thunderstorm.to_string(), "thunderstorm");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Categorical condition a forecast day is summarised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WeatherType {
    /// Clear skies.
    Clear,
    /// Overcast or partly cloudy.
    Clouds,
    /// Rain showers.
    Rain,
    /// Light drizzle.
    Drizzle,
    /// Thunderstorms.
    Thunderstorm,
    /// Snowfall.
    Snow,
    /// Mist.
    Mist,
    /// Fog.
    Fog,
    /// Haze.
    Haze,
    /// Airborne dust or sand.
    Dust,
}

impl WeatherType {
    /// Return the condition as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use fairweather_core::WeatherType;
    ///
    /// assert_eq!(WeatherType::Drizzle.as_str(), "drizzle");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Clouds => "clouds",
            Self::Rain => "rain",
            Self::Drizzle => "drizzle",
            Self::Thunderstorm => "thunderstorm",
            Self::Snow => "snow",
            Self::Mist => "mist",
            Self::Fog => "fog",
            Self::Haze => "haze",
            Self::Dust => "dust",
        }
    }
}

impl std::fmt::Display for WeatherType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WeatherType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clear" => Ok(Self::Clear),
            "clouds" => Ok(Self::Clouds),
            "rain" => Ok(Self::Rain),
            "drizzle" => Ok(Self::Drizzle),
            "thunderstorm" => Ok(Self::Thunderstorm),
            "snow" => Ok(Self::Snow),
            "mist" => Ok(Self::Mist),
            "fog" => Ok(Self::Fog),
            "haze" => Ok(Self::Haze),
            "dust" => Ok(Self::Dust),
            _ => Err(format!("unknown weather type '{s}'")),
        }
    }
}
