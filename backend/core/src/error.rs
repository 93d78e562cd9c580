use thiserror::Error;

/// Failures crossing the relay boundary, from either side of the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RelayError {
    /// The upstream credential could not be resolved from the environment.
    /// The message doubles as the wire error envelope text.
    #[error("OpenRouter API key not found")]
    MissingCredential,

    #[error("relay transport failure: {0}")]
    Transport(String),

    /// The completion envelope did not carry the expected reply field, or
    /// the body was not JSON at all.
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),

    /// The relay answered with an explicit `{ "error": ... }` envelope.
    #[error("relay error: {0}")]
    Upstream(String),
}

/// Errors surfaced by the scenario engine at its input boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("scenario already completed")]
    SessionComplete,

    /// A relay exchange is already in flight; at most one per session.
    #[error("a reply is already pending")]
    ReplyPending,

    #[error(transparent)]
    Relay(#[from] RelayError),
}

/// A scenario string outside the fixed catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown scenario id: {0}")]
pub struct UnknownScenario(pub String);
