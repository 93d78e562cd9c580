//! The relay HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use standfast_core::{persona_for, ErrorEnvelope, RelayError, RelayRequest};
use standfast_logging::redact_credentials;

use crate::openrouter::{build_upstream_request, OpenRouterClient};

/// Default environment variable holding the upstream credential.
pub const DEFAULT_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Shared state for relay handlers. Nothing here is mutated per call; the
/// relay is stateless and trivially concurrent across requests.
#[derive(Clone)]
pub struct RelayState {
    pub upstream: Arc<OpenRouterClient>,
    /// Name of the env var the credential is resolved from, at call time.
    pub key_env: String,
}

impl Default for RelayState {
    fn default() -> Self {
        Self {
            upstream: Arc::new(OpenRouterClient::new()),
            key_env: DEFAULT_KEY_ENV.to_string(),
        }
    }
}

/// Build the relay router: the chat endpoint, a health probe, and an
/// allow-all CORS layer that also answers preflight requests.
pub fn build_router(state: RelayState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat))
        .route("/api/health", get(health))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until the process exits.
pub async fn serve(addr: SocketAddr, state: RelayState) -> Result<()> {
    let app = build_router(state);
    info!("chat relay listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "standfast-relay",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `POST /chat`: resolve credential, pick persona, forward once, pass the
/// upstream body through verbatim. Every failure mode becomes an error
/// envelope with a 500; nothing panics across this boundary.
async fn chat(State(state): State<RelayState>, Json(request): Json<RelayRequest>) -> Response {
    let persona = persona_for(&request.scenario);
    info!(
        scenario = %request.scenario,
        model = persona.model,
        character = %request.character,
        concise = request.concise,
        "relaying chat request"
    );

    // Resolved per call so a fixed deployment recovers as soon as the
    // credential appears.
    let api_key = match std::env::var(&state.key_env) {
        Ok(key) if !key.trim().is_empty() => key,
        _ => return relay_failure(RelayError::MissingCredential),
    };

    let upstream_request = build_upstream_request(&request);
    match state.upstream.forward(&api_key, &upstream_request).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => relay_failure(err),
    }
}

fn relay_failure(err: RelayError) -> Response {
    warn!(error = %redact_credentials(&err.to_string()), "relay call failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorEnvelope {
            error: err.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use standfast_core::{WireMessage, WireRole};

    fn state_without_credential() -> RelayState {
        RelayState {
            upstream: Arc::new(OpenRouterClient::new()),
            // Deliberately points at an env var no test environment sets.
            key_env: "STANDFAST_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
        }
    }

    fn request(scenario: &str) -> RelayRequest {
        RelayRequest {
            messages: vec![WireMessage {
                role: WireRole::User,
                content: "hello".into(),
            }],
            scenario: scenario.into(),
            character: String::new(),
            concise: false,
        }
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_credential_yields_error_envelope_for_every_scenario() {
        let state = state_without_credential();
        for scenario in [
            "therapist",
            "boyfriend-level-1",
            "boyfriend-level-2",
            "coworker-level-1",
            "parent-level-1",
            "not-a-scenario",
        ] {
            let response = chat(State(state.clone()), Json(request(scenario))).await;
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let body = body_json(response).await;
            assert_eq!(body["error"], "OpenRouter API key not found");
        }
    }

    #[tokio::test]
    async fn test_health_probe() {
        let body = health().await.0;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_relay_failure_envelope_carries_message() {
        let response = relay_failure(RelayError::Transport("connection refused".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "relay transport failure: connection refused"
        );
    }
}
