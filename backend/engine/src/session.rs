//! The per-session scenario state machine.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};
use uuid::Uuid;

use standfast_core::{
    ChatRelay, ConversationTurn, EngineError, RelayRequest, ScenarioId, WireMessage,
};

use crate::classifier::{KeywordClassifier, TurnClassifier};
use crate::debrief::closing_line;
use crate::outcome::{FailureReason, Outcome, OutcomeReport, Phase, TurnReport};
use crate::score;

const STARTING_HEALTH: u8 = 100;
/// Evaluation only runs once the transcript holds more turns than this.
const EVALUATION_THRESHOLD: usize = 5;
const TOXIC_PENALTY: u8 = 15;
const NEUTRAL_PENALTY: u8 = 5;

/// A single user's active scenario.
///
/// Exclusively owned by its session handle: all mutation goes through
/// `&mut self`, and at most one relay exchange is in flight at a time. Once
/// the phase is terminal the transcript and health are frozen against user
/// input; only `change_scenario` revives the session.
pub struct ScenarioSession {
    id: Uuid,
    scenario: ScenarioId,
    transcript: Vec<ConversationTurn>,
    health: u8,
    phase: Phase,
    started_at: Instant,
    exchanges: u32,
    awaiting_reply: bool,
    classifier: Box<dyn TurnClassifier>,
    relay: Arc<dyn ChatRelay>,
}

impl ScenarioSession {
    pub fn new(scenario: ScenarioId, relay: Arc<dyn ChatRelay>) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            scenario,
            transcript: Vec::new(),
            health: STARTING_HEALTH,
            phase: Phase::InProgress,
            started_at: Instant::now(),
            exchanges: 0,
            awaiting_reply: false,
            classifier: Box::new(KeywordClassifier::default()),
            relay,
        };
        session.seed_transcript();
        session
    }

    /// Swap the stock keyword classifier for another implementation.
    pub fn with_classifier(mut self, classifier: Box<dyn TurnClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn scenario(&self) -> ScenarioId {
        self.scenario
    }

    pub fn transcript(&self) -> &[ConversationTurn] {
        &self.transcript
    }

    pub fn health(&self) -> u8 {
        self.health
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase, Phase::Complete(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Complete(outcome) => Some(outcome),
            Phase::InProgress => None,
        }
    }

    /// Submit one user message and exchange it for a counterpart reply.
    ///
    /// Rejected without any state change when the text is blank, the
    /// scenario is already terminal, or a reply is still pending. A relay
    /// failure also leaves the session untouched: the attempted turn is not
    /// committed and the user may simply resend.
    pub async fn submit_user_message(&mut self, text: &str) -> Result<TurnReport, EngineError> {
        let content = text.trim();
        if content.is_empty() {
            return Err(EngineError::EmptyMessage);
        }
        if self.is_complete() {
            return Err(EngineError::SessionComplete);
        }
        if self.awaiting_reply {
            return Err(EngineError::ReplyPending);
        }

        let user_turn = ConversationTurn::user(content);
        let mut messages: Vec<WireMessage> =
            self.transcript.iter().map(WireMessage::from).collect();
        messages.push(WireMessage::from(&user_turn));

        let request = RelayRequest {
            messages,
            scenario: self.scenario.as_str().to_string(),
            character: self.scenario.definition().character.to_string(),
            concise: false,
        };

        self.awaiting_reply = true;
        let result = self.relay.exchange(request).await;
        self.awaiting_reply = false;
        let reply = result?;

        // Exchange succeeded; commit both turns before evaluating.
        self.transcript.push(user_turn);
        self.transcript.push(ConversationTurn::counterpart(&reply));
        self.exchanges += 1;

        let outcome = self.evaluate(content, &reply);
        if let Some(outcome) = outcome {
            info!(
                session = %self.id,
                scenario = %self.scenario,
                success = outcome.is_success(),
                "scenario completed"
            );
            self.phase = Phase::Complete(outcome);
            self.transcript
                .push(ConversationTurn::counterpart(closing_line(&outcome)));
        }

        Ok(TurnReport {
            reply,
            health: self.health,
            outcome,
        })
    }

    /// Switch to another scenario. Valid from any phase; always resets
    /// health, phase, and the transcript to the new scenario's opening line.
    pub fn change_scenario(&mut self, scenario: ScenarioId) {
        debug!(session = %self.id, from = %self.scenario, to = %scenario, "scenario switch");
        self.scenario = scenario;
        self.health = STARTING_HEALTH;
        self.phase = Phase::InProgress;
        self.started_at = Instant::now();
        self.exchanges = 0;
        self.awaiting_reply = false;
        self.seed_transcript();
    }

    /// Completion signal for the stats collaborator; `None` while the
    /// scenario is still in progress.
    pub fn report(&self) -> Option<OutcomeReport> {
        let outcome = self.outcome()?;
        let (reason, score) = match outcome {
            Outcome::Success { score } => (None, Some(score)),
            Outcome::Failure { reason } => (Some(reason), None),
        };
        Some(OutcomeReport {
            session_id: self.id,
            scenario: self.scenario,
            success: outcome.is_success(),
            reason,
            score,
            exchanges: self.exchanges,
            duration_secs: self.started_at.elapsed().as_secs(),
        })
    }

    fn seed_transcript(&mut self) {
        self.transcript = vec![ConversationTurn::counterpart(
            self.scenario.definition().opening_message,
        )];
    }

    /// Ordering rule: concession beats submission, both beat the deduction
    /// path, and a terminal condition short-circuits everything after it.
    /// Nothing runs until the transcript is past the turn threshold.
    fn evaluate(&mut self, user_text: &str, reply: &str) -> Option<Outcome> {
        if self.transcript.len() <= EVALUATION_THRESHOLD {
            return None;
        }

        if self.classifier.is_concession(reply) {
            let score = score::compute(self.started_at.elapsed().as_secs(), self.exchanges);
            return Some(Outcome::Success { score });
        }

        if self.classifier.is_submissive(user_text) {
            return Some(Outcome::Failure {
                reason: FailureReason::TooSubmissive,
            });
        }

        let penalty = if self.classifier.is_toxic(reply) {
            TOXIC_PENALTY
        } else {
            NEUTRAL_PENALTY
        };
        self.health = self.health.saturating_sub(penalty);
        debug!(session = %self.id, penalty, health = self.health, "health deduction");

        if self.health == 0 {
            return Some(Outcome::Failure {
                reason: FailureReason::HealthDepleted,
            });
        }
        None
    }
}
