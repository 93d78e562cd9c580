//! Standfast Chat Relay
//!
//! A stateless HTTP proxy between scenario sessions and the OpenRouter
//! completion API: picks a persona and model per scenario, prepends the
//! system instruction, forwards once (no retries, no timeouts), and passes
//! the upstream body back verbatim.

pub mod client;
pub mod openrouter;
pub mod server;

pub use client::HttpChatRelay;
pub use openrouter::{build_upstream_request, OpenRouterClient, UpstreamRequest};
pub use server::{build_router, serve, RelayState};
