//! Standfast logging
//!
//! Tracing initialization (console + rolling NDJSON file) and credential
//! redaction for anything that might echo the upstream API key.

pub mod logger;
pub mod redact;

pub use logger::init_logger;
pub use redact::redact_credentials;
