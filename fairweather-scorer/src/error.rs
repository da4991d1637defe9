//! Error types raised while configuring the recommendation engine.
//!
//! Scoring itself is total: every input shape degrades to "no eligible
//! days" rather than an error.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when constructing a [`Recommender`](crate::Recommender).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// Provided score weights were unusable.
    #[error("score weights must be finite, non-negative, and sum to a positive value")]
    InvalidWeights,
}
