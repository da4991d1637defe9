//! Scores how well a day's temperature range satisfies a hobby's comfort
//! bounds.

use fairweather_core::{TemperatureBounds, TemperatureRange};

use crate::factor::{Evaluation, Factor};
use crate::types::WeatherThresholds;

#[expect(
    clippy::float_arithmetic,
    reason = "temperature fit decays linearly with distance from the bounds"
)]
pub(crate) fn evaluate_temperature(
    bounds: TemperatureBounds,
    temperature: TemperatureRange,
    thresholds: &WeatherThresholds,
) -> Evaluation {
    if bounds.is_unbounded() {
        return Evaluation::neutral();
    }
    // Malformed bounds fail the fit for every day instead of erroring; the
    // aggregator logs the record once.
    if bounds.is_inverted() {
        return Evaluation::new(0.0, Vec::new());
    }

    let midpoint = temperature.midpoint();
    if let Some(min) = bounds.min {
        if midpoint < min {
            let distance = min - midpoint;
            return Evaluation::new(
                decayed(distance, thresholds),
                vec![Factor::warning(format!(
                    "too cold ({distance:.0}\u{b0}C below preferred)"
                ))],
            );
        }
    }
    if let Some(max) = bounds.max {
        if midpoint > max {
            let distance = midpoint - max;
            return Evaluation::new(
                decayed(distance, thresholds),
                vec![Factor::warning(format!(
                    "too hot ({distance:.0}\u{b0}C above preferred)"
                ))],
            );
        }
    }

    Evaluation::new(
        1.0,
        vec![Factor::matching(format!(
            "comfortable temperature ({midpoint:.0}\u{b0}C)"
        ))],
    )
}

#[expect(
    clippy::float_arithmetic,
    reason = "linear decay over the configured band"
)]
fn decayed(distance: f32, thresholds: &WeatherThresholds) -> f32 {
    (1.0 - distance / thresholds.temperature_band).max(0.0)
}
