//! Guessing engine core
//!
//! Pure decision logic with no I/O and no shared state: the answer
//! vocabulary, the likelihood update rule and the question-selection
//! heuristic. The orchestrator drives these against a session's state.

mod answer;
mod likelihood;
mod selector;

pub use answer::{confirms_guess, normalize, AnswerClass};
pub use likelihood::update;
pub use selector::{leading_subset, select};
