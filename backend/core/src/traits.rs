use async_trait::async_trait;

use crate::error::RelayError;
use crate::wire::RelayRequest;

/// The seam between the scenario engine and whatever produces counterpart
/// replies.
///
/// Production code talks to the HTTP chat relay; tests script replies
/// directly. Implementations are stateless per call and hold no ordering
/// guarantees across calls.
#[async_trait]
pub trait ChatRelay: Send + Sync {
    /// Exchange a transcript for the counterpart's next reply text
    /// (`choices[0].message.content` of the completion envelope).
    async fn exchange(&self, request: RelayRequest) -> Result<String, RelayError>;
}
