//! Client side of the unidir chat relay: incremental event-stream decoding,
//! the conversation store and an HTTP client that ties them together.

pub mod client;
pub mod consumer;
pub mod conversation;
pub mod error;
pub mod modes;
pub mod sse;

pub use client::{DEFAULT_RELAY_URL, RelayClient};
pub use consumer::{StreamConsumer, consume};
pub use conversation::{ChatMessage, Conversation, ConversationAction};
pub use error::ChatError;
pub use sse::{Phase, SseDecoder, SseEvent};
