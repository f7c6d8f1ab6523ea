//! Shared wire types for the unidir chat relay.
//!
//! Everything that crosses the HTTP boundary between the relay, its callers
//! and the upstream gateway lives here so that the server and the client
//! agree on one definition.

pub mod chat;
pub mod chunk;
mod de;
pub mod mode;
pub mod profile;

pub use chat::{ChatRole, ChatTurn, ErrorBody, RelayRequest};
pub use chunk::{ChatCompletionChunk, ChunkChoice, ChunkDelta, DONE_SENTINEL};
pub use mode::{InteractionMode, Locale};
pub use profile::CallerProfile;
