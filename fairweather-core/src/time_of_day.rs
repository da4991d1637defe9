//! Qualitative day segments a hobby can prefer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A qualitative window within a day.
///
/// Forecasts are day-granular, so these windows are advisory: they shape
/// factor strings rather than eligibility.
///
/// # Examples
/// ```
/// use fairweather_core::TimeOfDay;
///
/// assert_eq!(TimeOfDay::Morning.as_str(), "morning");
/// assert_eq!(TimeOfDay::Night.to_string(), "night");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeOfDay {
    /// Early hours until midday.
    Morning,
    /// Midday until early evening.
    Afternoon,
    /// Early evening until nightfall.
    Evening,
    /// After nightfall.
    Night,
}

impl TimeOfDay {
    /// Return the window as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "evening" => Ok(Self::Evening),
            "night" => Ok(Self::Night),
            _ => Err(format!("unknown time of day '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(TimeOfDay::Evening.to_string(), TimeOfDay::Evening.as_str());
    }

    #[test]
    fn parsing_rejects_unknown() {
        assert!(TimeOfDay::from_str("dusk").is_err());
    }
}
