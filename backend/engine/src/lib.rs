//! Standfast Scenario Engine
//!
//! Owns per-session conversation state and decides, after each counterpart
//! reply, whether a scenario continues, ends in success, or ends in failure.

pub mod classifier;
pub mod debrief;
pub mod outcome;
pub mod score;
pub mod session;

pub use classifier::{KeywordClassifier, TurnClassifier};
pub use debrief::{closing_line, Debrief};
pub use outcome::{FailureReason, Outcome, OutcomeReport, Phase, TurnReport};
pub use session::ScenarioSession;
