pub mod error;
pub mod scenario;
pub mod traits;
pub mod turn;
pub mod wire;

pub use error::{EngineError, RelayError, UnknownScenario};
pub use scenario::{persona_for, Persona, ScenarioDefinition, ScenarioId, THERAPIST};
pub use traits::ChatRelay;
pub use turn::{ConversationTurn, Sender};
pub use wire::{ErrorEnvelope, RelayRequest, WireMessage, WireRole};
