//! Client side of the chat: transcript, submit state machine, and the HTTP
//! transport that talks to `/api/chat`.
pub mod controller;
pub mod transcript;
pub mod transport;

pub use controller::{ChatController, Phase};
pub use transcript::{Message, Role, Transcript};
pub use transport::{HttpRelayTransport, RelayFailure, RelayTransport};
