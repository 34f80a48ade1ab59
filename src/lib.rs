//! mindreader - an adaptive twenty-questions guessing engine
//!
//! Candidates are rows of a binary feature table; the engine asks the
//! most discriminating unasked question each turn, accumulates evidence
//! per candidate, and commits to a guess once its question budget is
//! spent.

pub mod cli;
pub mod dataset;
pub mod engine;
pub mod http_server;
pub mod observability;
pub mod orchestrator;
pub mod session;
