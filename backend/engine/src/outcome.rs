use serde::{Deserialize, Serialize};
use uuid::Uuid;

use standfast_core::ScenarioId;

/// Why a scenario ended in failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The user gave in to the counterpart instead of holding a boundary.
    TooSubmissive,
    /// Emotional health reached zero.
    HealthDepleted,
}

impl FailureReason {
    pub fn message(&self) -> &'static str {
        match self {
            FailureReason::TooSubmissive => {
                "You were too submissive, allowing the other person to control the situation."
            }
            FailureReason::HealthDepleted => {
                "Your emotional health has been depleted. Reflect on what went wrong."
            }
        }
    }
}

/// Terminal result of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// The counterpart conceded. `score` is display-only.
    Success { score: u32 },
    Failure { reason: FailureReason },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

/// Lifecycle of a session. Transitions only from `InProgress`, and only as a
/// result of outcome evaluation after a counterpart reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Complete(Outcome),
}

/// What a successful `submit_user_message` hands back to the caller.
#[derive(Debug, Clone)]
pub struct TurnReport {
    /// The counterpart's reply for this exchange.
    pub reply: String,
    /// Health after this turn's evaluation.
    pub health: u8,
    /// Set iff this turn ended the scenario.
    pub outcome: Option<Outcome>,
}

/// Completion signal for the stats collaborator to record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeReport {
    pub session_id: Uuid,
    pub scenario: ScenarioId,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    /// Completed user/counterpart exchanges.
    pub exchanges: u32,
    pub duration_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serde_shape() {
        let json = serde_json::to_value(Outcome::Failure {
            reason: FailureReason::TooSubmissive,
        })
        .unwrap();
        assert_eq!(json["result"], "failure");
        assert_eq!(json["reason"], "too_submissive");

        let json = serde_json::to_value(Outcome::Success { score: 940 }).unwrap();
        assert_eq!(json["result"], "success");
        assert_eq!(json["score"], 940);
    }

    #[test]
    fn test_report_omits_unset_fields() {
        let report = OutcomeReport {
            session_id: Uuid::new_v4(),
            scenario: ScenarioId::ParentLevel1,
            success: true,
            reason: None,
            score: Some(1000),
            exchanges: 3,
            duration_secs: 12,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("reason").is_none());
        assert_eq!(json["scenario"], "parent-level-1");
    }
}
