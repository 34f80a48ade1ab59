//! Turn state machine
//!
//! One call per inbound turn. The orchestrator applies whatever the
//! session was waiting on (a question answer or a guess confirmation),
//! then decides the next move in the same call: ask another question,
//! offer a guess, or report exhaustion.
//!
//! ## Invariants
//! - TURN-1: `turn_count` increments exactly once per answered question
//! - TURN-2: a rejected guess eliminates its candidate permanently
//! - TURN-3: every branch returns a well-formed reply; nothing is retried

use std::sync::Arc;

use crate::dataset::Dataset;
use crate::engine;
use crate::observability::MetricsRegistry;
use crate::session::{Pending, SessionError, SessionKey, SessionState, SessionStore};

use super::errors::{TurnError, TurnResult};
use super::messages;

/// Opening-round question budget before the engine starts guessing.
pub const QUESTION_LIMIT: u32 = 6;

/// Where the session's state machine landed after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A feature question is outstanding
    AwaitingAnswer,
    /// A guess is outstanding
    AwaitingConfirmation,
    /// The guess was confirmed; the session is gone
    Success,
    /// No candidates remain; only "reset" recovers
    Exhausted,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::AwaitingAnswer => "awaiting_answer",
            Phase::AwaitingConfirmation => "awaiting_confirmation",
            Phase::Success => "success",
            Phase::Exhausted => "exhausted",
        }
    }
}

/// One turn's outcome: the reply text and the resulting phase.
#[derive(Debug, Clone)]
pub struct TurnReply {
    pub message: String,
    pub phase: Phase,
}

/// Per-turn driver of the guessing state machine.
pub struct TurnOrchestrator<S: SessionStore> {
    dataset: Arc<Dataset>,
    store: S,
    metrics: Arc<MetricsRegistry>,
    question_limit: u32,
}

impl<S: SessionStore> TurnOrchestrator<S> {
    pub fn new(dataset: Arc<Dataset>, store: S, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            dataset,
            store,
            metrics,
            question_limit: QUESTION_LIMIT,
        }
    }

    /// Overrides the opening-round question budget. Intended for tests
    /// with small datasets.
    pub fn with_question_limit(mut self, limit: u32) -> Self {
        self.question_limit = limit;
        self
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Processes one (session key, answer) pair.
    ///
    /// An unknown key, or an answer of "reset", initializes fresh state
    /// and treats the turn as having no answer to apply.
    pub fn handle_turn(&self, key: &SessionKey, raw_answer: &str) -> TurnResult<TurnReply> {
        self.metrics.increment_turns();

        let answer = engine::normalize(raw_answer);
        let is_reset = answer == "reset";
        // An empty answer means "nothing to apply": the pending question
        // is left unanswered and gets re-selected below.
        let mut supplied: Option<&str> = if answer.is_empty() {
            None
        } else {
            Some(answer.as_str())
        };

        let handle = match self.store.fetch(key)? {
            Some(handle) if !is_reset => handle,
            _ => {
                if is_reset {
                    self.metrics.increment_resets();
                }
                self.metrics.increment_sessions_started();
                supplied = None;
                self.store.create(key, SessionState::fresh(&self.dataset))?
            }
        };
        let mut state = handle.lock().map_err(|_| SessionError::LockPoisoned)?;
        let mut message = String::new();

        match state.pending.clone() {
            Pending::Guess { index, .. } => {
                if supplied.is_some_and(engine::confirms_guess) {
                    drop(state);
                    self.store.remove(key)?;
                    self.metrics.increment_guesses_confirmed();
                    return Ok(TurnReply {
                        message: messages::SUCCESS.to_string(),
                        phase: Phase::Success,
                    });
                }
                state.eliminate(index);
                state.pending = Pending::None;
                self.metrics.increment_guesses_rejected();
                message.push_str(messages::GUESS_REJECTED_ACK);
            }
            Pending::Question(feature) => {
                if let Some(answer) = supplied {
                    let column = self
                        .dataset
                        .feature_index(&feature)
                        .ok_or_else(|| TurnError::UnknownFeature(feature.clone()))?;
                    for (&candidate, score) in state.likelihoods.iter_mut() {
                        *score =
                            engine::update(self.dataset.value(candidate, column), *score, answer);
                    }
                    state.asked_features.push(feature);
                    state.turn_count += 1;
                    state.pending = Pending::None;
                }
            }
            Pending::None => {}
        }

        self.decide(&mut state, message)
    }

    /// Decides the next move for a session whose pending update has been
    /// applied. `message` may already carry a rejection acknowledgement.
    fn decide(&self, state: &mut SessionState, mut message: String) -> TurnResult<TurnReply> {
        if state.likelihoods.is_empty() {
            self.metrics.increment_sessions_exhausted();
            return Ok(TurnReply {
                message: messages::EXHAUSTED.to_string(),
                phase: Phase::Exhausted,
            });
        }

        if state.turn_count < self.question_limit {
            match engine::select(&state.likelihoods, &self.dataset, &state.asked_features) {
                Some(feature) => return Ok(self.ask(state, feature, message)),
                // Opening round over early: no feature left anywhere
                None => state.turn_count = self.question_limit,
            }
        }

        let leaders = state.leaders();
        if leaders.len() > 1 {
            // Tied leaders: one more question can still separate them
            if let Some(feature) =
                engine::select(&state.likelihoods, &self.dataset, &state.asked_features)
            {
                return Ok(self.ask(state, feature, message));
            }
        }

        match leaders.first().copied() {
            Some(index) => {
                let label = self.dataset.label(index).to_string();
                message.push_str(&messages::guess(&label));
                state.pending = Pending::Guess {
                    index,
                    label,
                };
                self.metrics.increment_guesses_made();
                Ok(TurnReply {
                    message,
                    phase: Phase::AwaitingConfirmation,
                })
            }
            // Unreachable while likelihoods is non-empty; kept total
            None => {
                self.metrics.increment_sessions_exhausted();
                Ok(TurnReply {
                    message: messages::EXHAUSTED.to_string(),
                    phase: Phase::Exhausted,
                })
            }
        }
    }

    fn ask(&self, state: &mut SessionState, feature: usize, mut message: String) -> TurnReply {
        let name = self.dataset.feature_name(feature);
        state.pending = Pending::Question(name.to_string());
        message.push_str(&messages::question(name));
        self.metrics.increment_questions_asked();
        TurnReply {
            message,
            phase: Phase::AwaitingAnswer,
        }
    }
}
