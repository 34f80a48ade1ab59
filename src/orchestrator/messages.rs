//! User-facing reply text

/// Emitted when the user confirms a guess.
pub const SUCCESS: &str = "yipie, I got it correct! Say 'reset' to play again.";

/// Prepended when a guess is rejected and the game continues.
pub const GUESS_REJECTED_ACK: &str = "Okay, not that. Let me think... ";

/// Emitted when no candidates remain.
pub const EXHAUSTED: &str = "I have run out of animals! Say 'reset' to try again.";

/// The next feature question.
pub fn question(feature: &str) -> String {
    format!("{}?", feature)
}

/// A guess offered for confirmation.
pub fn guess(label: &str) -> String {
    format!("I think your animal is a {}?", label)
}
