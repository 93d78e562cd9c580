//! Post-scenario debrief text.
//!
//! Fixed copy keyed off the outcome, shown to the user once a scenario ends.

use crate::outcome::{FailureReason, Outcome};
use crate::session::ScenarioSession;

/// The counterpart line appended to the transcript when a scenario ends.
pub fn closing_line(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Success { .. } => {
            "You handled the situation well. Great job maintaining boundaries!"
        }
        Outcome::Failure { reason } => reason.message(),
    }
}

/// Reflection text for a completed scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debrief {
    pub verdict: &'static str,
    pub analysis: &'static str,
    pub critique: &'static str,
    pub suggestion: &'static str,
}

impl Debrief {
    /// Built from a session's terminal outcome; `None` while in progress.
    pub fn for_session(session: &ScenarioSession) -> Option<Self> {
        session.outcome().map(|outcome| match outcome {
            Outcome::Success { .. } => Debrief {
                verdict: "You Win!",
                analysis: "You demonstrated resilience and effective communication. You stood up for yourself and maintained boundaries, which is key to healthy relationships.",
                critique: "You communicated clearly and held your ground without escalating the conflict.",
                suggestion: "Keep practicing the same calm, firm responses in real conversations.",
            },
            Outcome::Failure {
                reason: FailureReason::TooSubmissive,
            } => Debrief {
                verdict: "You Lose!",
                analysis: "You were too submissive in this scenario. Submissive behavior can reinforce controlling tendencies in others. It's important to assert your needs and boundaries.",
                critique: "You agreed too easily or avoided conflict, which allowed the other person to maintain control. This can lead to unhealthy dynamics where your needs are ignored.",
                suggestion: "Practice assertiveness by calmly expressing your needs and standing firm when faced with controlling behavior. Use 'I' statements to communicate how you feel without escalating the situation.",
            },
            Outcome::Failure {
                reason: FailureReason::HealthDepleted,
            } => Debrief {
                verdict: "You Lose!",
                analysis: "The scenario highlighted areas for growth. Consider practicing assertiveness and self-care to navigate similar situations in the future.",
                critique: "You may have struggled to communicate effectively or maintain boundaries. Reflect on how you could have responded differently to achieve a better outcome.",
                suggestion: "Continue reflecting on your responses and consider seeking support from a therapist or trusted individual to build confidence in handling similar scenarios.",
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closing_lines() {
        assert!(closing_line(&Outcome::Success { score: 900 }).contains("Great job"));
        assert_eq!(
            closing_line(&Outcome::Failure {
                reason: FailureReason::HealthDepleted
            }),
            FailureReason::HealthDepleted.message()
        );
    }
}
