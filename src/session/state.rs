//! Per-session game state
//!
//! `SessionState` is a fixed-shape record. Question mode and guess mode
//! are both carried by the single `Pending` field, which makes their
//! mutual exclusion hold by construction instead of by discipline.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::dataset::Dataset;
use crate::engine;

/// What the session is waiting on, if anything.
#[derive(Debug, Clone, PartialEq)]
pub enum Pending {
    /// Nothing outstanding; the next turn decides a fresh move
    None,

    /// A feature question was asked and awaits an answer
    Question(String),

    /// A guess was made and awaits yes/no confirmation
    Guess {
        /// Candidate row index, used to eliminate on rejection
        index: usize,
        /// Display label, used in the guess message
        label: String,
    },
}

/// Mutable per-session record.
///
/// `likelihoods` is ordered by candidate index so that "first leader in
/// index order" is deterministic across runs of the same dataset.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Accumulated evidence per active candidate; a candidate's entry is
    /// removed permanently when its guess is rejected
    pub likelihoods: BTreeMap<usize, f64>,

    /// Feature names already consumed, in ask order; grows monotonically
    pub asked_features: Vec<String>,

    /// Answered (non-guess) questions so far
    pub turn_count: u32,

    /// Outstanding question or guess
    pub pending: Pending,

    /// When this state was initialized
    pub created_at: DateTime<Utc>,
}

impl SessionState {
    /// Fresh state: every candidate active at score 0.0, nothing pending.
    pub fn fresh(dataset: &Dataset) -> Self {
        Self {
            likelihoods: (0..dataset.candidate_count()).map(|i| (i, 0.0)).collect(),
            asked_features: Vec::new(),
            turn_count: 0,
            pending: Pending::None,
            created_at: Utc::now(),
        }
    }

    /// Removes a rejected candidate permanently.
    pub fn eliminate(&mut self, index: usize) {
        self.likelihoods.remove(&index);
    }

    /// Candidates currently holding the maximum score, in index order.
    pub fn leaders(&self) -> Vec<usize> {
        engine::leading_subset(&self.likelihoods)
    }

    /// Number of candidates still in the race.
    pub fn active_count(&self) -> usize {
        self.likelihoods.len()
    }
}
