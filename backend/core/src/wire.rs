//! Wire contract between the scenario engine and the chat relay.
//!
//! The relay accepts a transcript in OpenAI chat-completions role form plus
//! a scenario string; it answers with the upstream completion envelope
//! verbatim on success, or `{ "error": ... }` with a failure status.

use serde::{Deserialize, Serialize};

use crate::turn::{ConversationTurn, Sender};

/// Chat-completions role of a wire message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireRole {
    System,
    User,
    Assistant,
}

/// One transcript entry as it travels over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: WireRole,
    pub content: String,
}

impl WireMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: WireRole::System,
            content: content.into(),
        }
    }
}

impl From<&ConversationTurn> for WireMessage {
    fn from(turn: &ConversationTurn) -> Self {
        let role = match turn.sender {
            Sender::User => WireRole::User,
            Sender::Counterpart => WireRole::Assistant,
        };
        Self {
            role,
            content: turn.content.clone(),
        }
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayRequest {
    pub messages: Vec<WireMessage>,
    pub scenario: String,
    /// Persona label for the counterpart; informational only.
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub concise: bool,
}

/// Failure body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_form() {
        assert_eq!(
            serde_json::to_string(&WireRole::Assistant).unwrap(),
            "\"assistant\""
        );
        assert_eq!(serde_json::to_string(&WireRole::User).unwrap(), "\"user\"");
    }

    #[test]
    fn test_turn_role_mapping() {
        let msg = WireMessage::from(&ConversationTurn::counterpart("hey"));
        assert_eq!(msg.role, WireRole::Assistant);
        let msg = WireMessage::from(&ConversationTurn::user("hi"));
        assert_eq!(msg.role, WireRole::User);
    }

    #[test]
    fn test_request_optional_fields_default() {
        let req: RelayRequest = serde_json::from_str(
            r#"{"messages":[{"role":"user","content":"hi"}],"scenario":"therapist"}"#,
        )
        .unwrap();
        assert_eq!(req.character, "");
        assert!(!req.concise);
    }
}
