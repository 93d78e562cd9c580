use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which party produced a turn in a scenario transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    /// The simulated other party (boyfriend, coworker, parent, ...).
    Counterpart,
}

/// A single entry in a scenario transcript.
///
/// Transcripts are append-only while a scenario is active; insertion order
/// is the conversation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn counterpart(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::Counterpart,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_serde_form() {
        let json = serde_json::to_string(&Sender::Counterpart).unwrap();
        assert_eq!(json, "\"counterpart\"");
    }

    #[test]
    fn test_constructors_set_sender() {
        assert_eq!(ConversationTurn::user("hi").sender, Sender::User);
        assert_eq!(
            ConversationTurn::counterpart("hello").sender,
            Sender::Counterpart
        );
    }
}
