//! Engine-facing relay client.
//!
//! Implements the `ChatRelay` seam over HTTP against a running relay
//! server, turning the passthrough completion envelope into plain reply
//! text for the session state machine.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use standfast_core::{ChatRelay, RelayError, RelayRequest};

pub struct HttpChatRelay {
    http: Client,
    base_url: String,
}

impl HttpChatRelay {
    /// `base_url` is the relay server root, e.g. `http://localhost:8787`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ChatRelay for HttpChatRelay {
    async fn exchange(&self, request: RelayRequest) -> Result<String, RelayError> {
        let response = self
            .http
            .post(format!("{}/chat", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| RelayError::MalformedResponse(e.to_string()))?;

        extract_reply(&body)
    }
}

/// Pull the reply text out of a relay response body.
///
/// Any explicit `error` field wins; after that the body must carry
/// `choices[0].message.content`, anything else is malformed. Passthrough
/// means upstream API errors arrive here with HTTP 200, so the shape of the
/// body is the only signal.
pub fn extract_reply(body: &Value) -> Result<String, RelayError> {
    if let Some(error) = body.get("error") {
        let message = match error {
            Value::String(s) => s.clone(),
            other => other
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| other.to_string()),
        };
        return Err(RelayError::Upstream(message));
    }

    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            RelayError::MalformedResponse("missing choices[0].message.content".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_first_choice_content() {
        let body = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "Who said you could go?" } },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        });
        assert_eq!(extract_reply(&body).unwrap(), "Who said you could go?");
    }

    #[test]
    fn test_error_envelope_wins_over_choices() {
        let body = json!({ "error": "OpenRouter API key not found", "choices": [] });
        assert_eq!(
            extract_reply(&body).unwrap_err(),
            RelayError::Upstream("OpenRouter API key not found".into())
        );
    }

    #[test]
    fn test_structured_upstream_error() {
        let body = json!({ "error": { "code": 429, "message": "rate limited" } });
        assert_eq!(
            extract_reply(&body).unwrap_err(),
            RelayError::Upstream("rate limited".into())
        );
    }

    #[test]
    fn test_missing_content_is_malformed() {
        for body in [
            json!({ "choices": [] }),
            json!({ "choices": [{ "message": {} }] }),
            json!({}),
        ] {
            assert!(matches!(
                extract_reply(&body),
                Err(RelayError::MalformedResponse(_))
            ));
        }
    }
}
