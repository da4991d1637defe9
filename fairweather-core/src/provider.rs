//! Forecast provider trait seam.
//!
//! Real providers perform network I/O, so the trait is fallible even though
//! the engine itself never produces a [`ForecastError`].

use thiserror::Error;

use crate::Forecast;

/// Errors surfaced through the forecast provider seam.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    /// The provider has no forecast for the requested location.
    #[error("no forecast is available for the requested location")]
    Unavailable,
    /// The provider failed while producing a forecast.
    #[error("forecast provider failed: {reason}")]
    Provider {
        /// Provider-reported failure description.
        reason: String,
    },
}

/// Supply a multi-day forecast for one location.
///
/// Implementations must resolve observations to local calendar dates before
/// returning them, and must be `Send + Sync` so providers can be shared
/// across call sites.
///
/// # Examples
///
/// ```rust
/// use fairweather_core::{Forecast, ForecastError, ForecastProvider};
///
/// struct CannedProvider {
///     forecast: Forecast,
/// }
///
/// impl ForecastProvider for CannedProvider {
///     fn daily_forecast(&self) -> Result<Forecast, ForecastError> {
///         Ok(self.forecast.clone())
///     }
/// }
///
/// let provider = CannedProvider {
///     forecast: Forecast::new(Vec::new()),
/// };
/// assert!(provider.daily_forecast().expect("canned forecast").is_empty());
/// ```
pub trait ForecastProvider: Send + Sync {
    /// Return the forecast for the provider's location.
    ///
    /// # Errors
    /// Returns [`ForecastError`] when the provider cannot produce a
    /// forecast; callers decide whether to retry or surface the failure.
    fn daily_forecast(&self) -> Result<Forecast, ForecastError>;
}
