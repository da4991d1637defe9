//! Advisory alignment between preferred activity windows and day-granular
//! forecasts.
//!
//! Forecasts carry no intraday signal, so this evaluator cannot reject a
//! day: it suggests a window when the hobby declares exactly one, and never
//! produces a warning.

use fairweather_core::Hobby;

use crate::factor::{Evaluation, Factor};

pub(crate) fn evaluate_time_of_day(hobby: &Hobby) -> Evaluation {
    if hobby.preferred_time_of_day.is_empty() {
        return Evaluation::neutral();
    }

    let mut factors = Vec::new();
    if hobby.preferred_time_of_day.len() == 1 {
        if let Some(window) = hobby.preferred_time_of_day.iter().next() {
            factors.push(Factor::matching(format!("ideal during the {window}")));
        }
    }
    Evaluation::new(1.0, factors)
}
