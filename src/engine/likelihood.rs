//! Likelihood update rule
//!
//! Pure and deterministic: one answered question adds a delta in
//! {0, 0.25, 0.5, 0.75, 1.0} to each active candidate's score. Scores
//! never decrease; a candidate only leaves the race by being guessed and
//! rejected.

use super::answer::{normalize, AnswerClass};

/// Applies one answer's evidence to a candidate's score.
///
/// `feature_value` is the candidate's value (0 or 1) for the feature that
/// was asked. The answer text is normalized and classified here, so
/// callers may pass raw user input.
pub fn update(feature_value: u8, current: f64, answer: &str) -> f64 {
    current + AnswerClass::classify(&normalize(answer)).delta(feature_value)
}
