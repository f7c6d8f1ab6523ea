//! Partial schema of one streamed chat-completion chunk.
//!
//! Only the fields the consumer reads are modeled; everything else in the
//! gateway payload is ignored. Missing `choices`, an empty `choices` array,
//! a missing `delta` and a missing or empty `content` all mean "this chunk
//! carries no text".

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// Payload that terminates an event stream: `data: [DONE]`.
pub const DONE_SENTINEL: &str = "[DONE]";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionChunk {
    #[serde(default, deserialize_with = "null_as_default")]
    pub choices: Vec<ChunkChoice>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkChoice {
    #[serde(default, deserialize_with = "null_as_default")]
    pub delta: ChunkDelta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ChatCompletionChunk {
    /// Chunk carrying a single text delta, as the gateway would emit it.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            choices: vec![ChunkChoice {
                delta: ChunkDelta { role: None, content: Some(content.into()) },
                finish_reason: None,
            }],
        }
    }

    /// Text delta of the first choice, `None` when absent or empty.
    pub fn content_delta(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.delta.content.as_deref())
            .filter(|s| !s.is_empty())
    }
}
