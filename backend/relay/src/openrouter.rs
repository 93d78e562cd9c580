//! Upstream OpenRouter call.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use standfast_core::{persona_for, RelayError, RelayRequest, WireMessage};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 400;

/// Body forwarded to `POST {base_url}/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Map a relay request onto the upstream completion request: resolve the
/// persona from the scenario string (therapist fallback for anything
/// unknown) and prepend its system instruction ahead of the transcript.
pub fn build_upstream_request(request: &RelayRequest) -> UpstreamRequest {
    let persona = persona_for(&request.scenario);
    let mut messages = Vec::with_capacity(request.messages.len() + 1);
    messages.push(WireMessage::system(persona.system_prompt));
    messages.extend(request.messages.iter().cloned());
    UpstreamRequest {
        model: persona.model.to_string(),
        messages,
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    }
}

/// Thin client around the OpenRouter completions endpoint.
pub struct OpenRouterClient {
    client: Client,
    base_url: String,
}

impl OpenRouterClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Single best-effort forward. The body is returned as parsed JSON
    /// whatever the upstream HTTP status was; the caller passes it through
    /// without reinterpretation. Only transport failures and non-JSON
    /// bodies become errors.
    pub async fn forward(
        &self,
        api_key: &str,
        request: &UpstreamRequest,
    ) -> Result<Value, RelayError> {
        debug!(model = %request.model, messages = request.messages.len(), "forwarding to OpenRouter");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {api_key}"))
            .header("HTTP-Referer", "https://standfast.app")
            .header("X-Title", "Standfast")
            .json(request)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| RelayError::MalformedResponse(e.to_string()))
    }
}

impl Default for OpenRouterClient {
    fn default() -> Self {
        Self::new()
    }
}
