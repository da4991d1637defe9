//! Structured evaluator results.
//!
//! Evaluators return sub-scores paired with typed factors; the strings are
//! only split into the matching/warning lists at the day-scorer boundary,
//! keeping the evaluators testable without string matching.

/// Whether a factor recommends or cautions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FactorKind {
    /// The day suits the hobby in this respect.
    Matching,
    /// A caveat the user should know about.
    Warning,
}

/// One human-readable reason attached to a sub-score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Factor {
    pub(crate) kind: FactorKind,
    pub(crate) text: String,
}

impl Factor {
    pub(crate) fn matching(text: impl Into<String>) -> Self {
        Self {
            kind: FactorKind::Matching,
            text: text.into(),
        }
    }

    pub(crate) fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: FactorKind::Warning,
            text: text.into(),
        }
    }
}

/// Sub-score for when an evaluator has no opinion.
pub(crate) const NEUTRAL_SUBSCORE: f32 = 0.5;

/// An evaluator's contribution to one (hobby, day) pair.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Evaluation {
    /// Sub-score in `0.0..=1.0`.
    pub(crate) subscore: f32,
    /// Factors explaining the sub-score.
    pub(crate) factors: Vec<Factor>,
}

impl Evaluation {
    pub(crate) fn new(subscore: f32, factors: Vec<Factor>) -> Self {
        Self { subscore, factors }
    }

    /// A neutral evaluation: no opinion, no factors.
    pub(crate) fn neutral() -> Self {
        Self::new(NEUTRAL_SUBSCORE, Vec::new())
    }
}
