//! Turn state-machine invariant tests
//!
//! Drives whole games through the orchestrator and checks the properties
//! the engine promises: per-answer score deltas, monotonic asked
//! features, reset idempotence and bounded termination.

use std::collections::BTreeMap;
use std::sync::Arc;

use mindreader::dataset::{Candidate, Dataset};
use mindreader::observability::MetricsRegistry;
use mindreader::orchestrator::{Phase, TurnOrchestrator, GUESS_REJECTED_ACK, SUCCESS};
use mindreader::session::{
    InMemorySessionStore, Pending, SessionKey, SessionState, SessionStore,
};

fn zoo() -> Arc<Dataset> {
    Arc::new(
        Dataset::new(
            vec!["furry".into(), "barks".into()],
            vec![
                Candidate::new("cat", vec![1, 0]),
                Candidate::new("dog", vec![1, 1]),
                Candidate::new("fish", vec![0, 0]),
            ],
        )
        .unwrap(),
    )
}

fn orchestrator(limit: u32) -> TurnOrchestrator<InMemorySessionStore> {
    TurnOrchestrator::new(
        zoo(),
        InMemorySessionStore::new(),
        Arc::new(MetricsRegistry::new()),
    )
    .with_question_limit(limit)
}

fn snapshot(
    orchestrator: &TurnOrchestrator<InMemorySessionStore>,
    key: &SessionKey,
) -> Option<SessionState> {
    let handle = orchestrator.store().fetch(key).unwrap()?;
    let state = handle.lock().unwrap().clone();
    Some(state)
}

#[test]
fn test_worked_scenario_end_to_end() {
    let orchestrator = orchestrator(2);
    let key = SessionKey::new("game");

    // Fresh session: furry and barks tie on split quality, first column
    // wins the opening question.
    let reply = orchestrator.handle_turn(&key, "start").unwrap();
    assert_eq!(reply.message, "furry?");
    assert_eq!(reply.phase, Phase::AwaitingAnswer);

    // "yes" to furry: cat and dog at 1.0, fish at 0.0.
    let reply = orchestrator.handle_turn(&key, "yes").unwrap();
    assert_eq!(reply.message, "barks?");
    let state = snapshot(&orchestrator, &key).unwrap();
    assert_eq!(
        state.likelihoods,
        BTreeMap::from([(0, 1.0), (1, 1.0), (2, 0.0)])
    );
    assert_eq!(state.turn_count, 1);

    // "no" to barks: cat pulls ahead at 2.0; limit reached, single
    // leader, guess it.
    let reply = orchestrator.handle_turn(&key, "no").unwrap();
    assert_eq!(reply.message, "I think your animal is a cat?");
    assert_eq!(reply.phase, Phase::AwaitingConfirmation);
    let state = snapshot(&orchestrator, &key).unwrap();
    assert_eq!(
        state.likelihoods,
        BTreeMap::from([(0, 2.0), (1, 1.0), (2, 1.0)])
    );

    // Confirmation deletes the session.
    let reply = orchestrator.handle_turn(&key, "yes").unwrap();
    assert_eq!(reply.message, SUCCESS);
    assert_eq!(reply.phase, Phase::Success);
    assert!(snapshot(&orchestrator, &key).is_none());
}

#[test]
fn test_rejected_guess_eliminates_and_continues() {
    let orchestrator = orchestrator(2);
    let key = SessionKey::new("game");

    orchestrator.handle_turn(&key, "start").unwrap();
    orchestrator.handle_turn(&key, "yes").unwrap();
    orchestrator.handle_turn(&key, "no").unwrap(); // guesses cat

    let reply = orchestrator.handle_turn(&key, "no").unwrap();
    assert!(reply.message.starts_with(GUESS_REJECTED_ACK));
    let state = snapshot(&orchestrator, &key).unwrap();
    assert!(!state.likelihoods.contains_key(&0), "cat must be gone");
    // dog and fish tie at 1.0, no feature left: first by index guessed
    assert_eq!(reply.message, format!("{}I think your animal is a dog?", GUESS_REJECTED_ACK));
}

#[test]
fn test_score_deltas_are_quarter_steps() {
    let answers = ["yes", "probably", "idk", "probably not", "no", "banana"];
    let allowed = [0.0, 0.25, 0.5, 0.75, 1.0];

    for answer in answers {
        let orchestrator = orchestrator(2);
        let key = SessionKey::new("game");
        orchestrator.handle_turn(&key, "start").unwrap();
        let before = snapshot(&orchestrator, &key).unwrap();

        orchestrator.handle_turn(&key, answer).unwrap();
        let after = snapshot(&orchestrator, &key).unwrap();

        for (index, old) in before.likelihoods {
            let new = after.likelihoods[&index];
            let delta = new - old;
            assert!(
                allowed.contains(&delta),
                "answer {:?} produced delta {} for candidate {}",
                answer,
                delta,
                index
            );
        }
    }
}

#[test]
fn test_asked_features_monotonic_and_unique() {
    let orchestrator = orchestrator(2);
    let key = SessionKey::new("game");
    let answers = ["start", "idk", "maybe", "no", "no", "no", "no"];

    let mut previous_len = 0;
    for answer in answers {
        orchestrator.handle_turn(&key, answer).unwrap();
        let Some(state) = snapshot(&orchestrator, &key) else {
            break;
        };
        assert!(state.asked_features.len() >= previous_len);
        previous_len = state.asked_features.len();

        let mut unique = state.asked_features.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), state.asked_features.len(), "duplicate asked feature");

        // The pending question is never already in asked_features
        if let Pending::Question(feature) = &state.pending {
            assert!(!state.asked_features.contains(feature));
        }
    }
}

#[test]
fn test_reset_is_idempotent_from_any_state() {
    let orchestrator = orchestrator(2);
    let key = SessionKey::new("game");

    // Reach guess mode, then reset; reset again from question mode.
    let scripts: [&[&str]; 3] = [
        &["start", "yes", "no"],
        &["start", "idk"],
        &["start"],
    ];
    for script in scripts {
        for answer in script {
            orchestrator.handle_turn(&key, answer).unwrap();
        }
        let reply = orchestrator.handle_turn(&key, "reset").unwrap();
        assert_eq!(reply.message, "furry?");

        let state = snapshot(&orchestrator, &key).unwrap();
        assert_eq!(state.turn_count, 0);
        assert!(state.asked_features.is_empty());
        assert!(state.likelihoods.values().all(|&score| score == 0.0));
        assert_eq!(state.likelihoods.len(), 3);
        assert_eq!(state.pending, Pending::Question("furry".into()));
    }
}

#[test]
fn test_tie_break_asks_past_question_limit() {
    let orchestrator = orchestrator(1);
    let key = SessionKey::new("game");

    orchestrator.handle_turn(&key, "start").unwrap();
    // "yes" to furry exhausts the budget with cat and dog tied; the tie
    // break asks another question instead of guessing arbitrarily.
    let reply = orchestrator.handle_turn(&key, "yes").unwrap();
    assert_eq!(reply.message, "barks?");
    assert_eq!(reply.phase, Phase::AwaitingAnswer);

    let reply = orchestrator.handle_turn(&key, "yes").unwrap();
    assert_eq!(reply.message, "I think your animal is a dog?");
}

#[test]
fn test_termination_is_bounded() {
    // Uninformative answers everywhere: every turn must still make
    // forward progress and the game must end within the candidate +
    // feature budget.
    let orchestrator = orchestrator(2);
    let key = SessionKey::new("game");
    let bound = 3 + 2 + 2; // candidates + features + slack

    let mut reply = orchestrator.handle_turn(&key, "start").unwrap();
    let mut turns = 1;
    while !matches!(reply.phase, Phase::Success | Phase::Exhausted) {
        reply = orchestrator.handle_turn(&key, "idk").unwrap();
        turns += 1;
        assert!(turns <= bound, "no terminal state after {} turns", turns);
    }
    assert_eq!(reply.phase, Phase::Exhausted);
}

#[test]
fn test_exhausted_session_recovers_via_reset() {
    let orchestrator = orchestrator(0);
    let key = SessionKey::new("game");

    let mut reply = orchestrator.handle_turn(&key, "start").unwrap();
    while reply.phase != Phase::Exhausted {
        reply = orchestrator.handle_turn(&key, "no").unwrap();
    }

    // Still exhausted on further contact, until an explicit reset.
    let reply = orchestrator.handle_turn(&key, "hello").unwrap();
    assert_eq!(reply.phase, Phase::Exhausted);

    let reply = orchestrator.handle_turn(&key, "reset").unwrap();
    assert_eq!(reply.phase, Phase::AwaitingAnswer);
}

#[test]
fn test_sessions_are_independent() {
    let orchestrator = orchestrator(2);
    let alice = SessionKey::new("alice");
    let bob = SessionKey::new("bob");

    orchestrator.handle_turn(&alice, "start").unwrap();
    orchestrator.handle_turn(&alice, "yes").unwrap();
    orchestrator.handle_turn(&bob, "start").unwrap();

    let alice_state = snapshot(&orchestrator, &alice).unwrap();
    let bob_state = snapshot(&orchestrator, &bob).unwrap();
    assert_eq!(alice_state.turn_count, 1);
    assert_eq!(bob_state.turn_count, 0);
}
