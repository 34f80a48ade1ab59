//! Metrics registry
//!
//! Counters only: monotonic `AtomicU64`s reset on process start.
//! Relaxed ordering is enough; metrics tolerate eventual consistency.

use std::sync::atomic::{AtomicU64, Ordering};

/// Operational counters for the guessing engine
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Sessions initialized (first contact or reset)
    sessions_started: AtomicU64,
    /// Turns processed, any outcome
    turns_processed: AtomicU64,
    /// Feature questions asked
    questions_asked: AtomicU64,
    /// Guesses offered for confirmation
    guesses_made: AtomicU64,
    /// Guesses the user confirmed
    guesses_confirmed: AtomicU64,
    /// Guesses the user rejected
    guesses_rejected: AtomicU64,
    /// Turns that ended with no candidates left
    sessions_exhausted: AtomicU64,
    /// Explicit "reset" answers
    resets: AtomicU64,
}

impl MetricsRegistry {
    /// Creates a registry with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_sessions_started(&self) {
        self.sessions_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_turns(&self) {
        self.turns_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_questions_asked(&self) {
        self.questions_asked.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_guesses_made(&self) {
        self.guesses_made.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_guesses_confirmed(&self) {
        self.guesses_confirmed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_guesses_rejected(&self) {
        self.guesses_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_sessions_exhausted(&self) {
        self.sessions_exhausted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_resets(&self) {
        self.resets.fetch_add(1, Ordering::Relaxed);
    }

    pub fn sessions_started(&self) -> u64 {
        self.sessions_started.load(Ordering::Relaxed)
    }

    pub fn turns_processed(&self) -> u64 {
        self.turns_processed.load(Ordering::Relaxed)
    }

    pub fn questions_asked(&self) -> u64 {
        self.questions_asked.load(Ordering::Relaxed)
    }

    pub fn guesses_made(&self) -> u64 {
        self.guesses_made.load(Ordering::Relaxed)
    }

    pub fn guesses_confirmed(&self) -> u64 {
        self.guesses_confirmed.load(Ordering::Relaxed)
    }

    pub fn guesses_rejected(&self) -> u64 {
        self.guesses_rejected.load(Ordering::Relaxed)
    }

    pub fn sessions_exhausted(&self) -> u64 {
        self.sessions_exhausted.load(Ordering::Relaxed)
    }

    pub fn resets(&self) -> u64 {
        self.resets.load(Ordering::Relaxed)
    }

    /// Renders all counters as a JSON object with alphabetical keys.
    pub fn to_json(&self) -> String {
        format!(
            "{{\"guesses_confirmed\":{},\"guesses_made\":{},\"guesses_rejected\":{},\
             \"questions_asked\":{},\"resets\":{},\"sessions_exhausted\":{},\
             \"sessions_started\":{},\"turns_processed\":{}}}",
            self.guesses_confirmed(),
            self.guesses_made(),
            self.guesses_rejected(),
            self.questions_asked(),
            self.resets(),
            self.sessions_exhausted(),
            self.sessions_started(),
            self.turns_processed(),
        )
    }
}
