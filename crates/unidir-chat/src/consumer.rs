//! Drives an [`SseDecoder`] over a byte stream and folds the text deltas
//! into a [`Conversation`].

use bytes::Bytes;
use futures::{Stream, StreamExt};
use tracing::debug;

use crate::conversation::{Conversation, ConversationAction};
use crate::sse::{SseDecoder, SseEvent};

/// Accumulates the assistant reply for one stream.
#[derive(Debug, Default)]
pub struct StreamConsumer {
    decoder: SseDecoder,
    reply: String,
}

impl StreamConsumer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text received so far.
    pub fn reply(&self) -> &str {
        &self.reply
    }

    pub fn is_done(&self) -> bool {
        self.decoder.is_finished()
    }

    /// Feed one read. Returns the deltas it completed, in order.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        let events = self.decoder.feed(bytes);
        self.absorb(events)
    }

    /// Flush after the transport closed.
    pub fn finish(&mut self) -> Vec<String> {
        let events = self.decoder.finish();
        self.absorb(events)
    }

    fn absorb(&mut self, events: Vec<SseEvent>) -> Vec<String> {
        let mut deltas = Vec::new();
        for event in events {
            match event {
                SseEvent::Delta(text) => {
                    self.reply.push_str(&text);
                    deltas.push(text);
                }
                SseEvent::Done => debug!(chars = self.reply.chars().count(), "stream complete"),
            }
        }
        deltas
    }
}

/// Read `stream` to the end, merging every delta into the conversation's
/// streaming reply and calling `on_delta` with each fragment.
///
/// Returns the full reply. A transport error stops consumption; whatever
/// was merged before it stays in the conversation.
pub async fn consume<S, E, F>(
    stream: S,
    conversation: &mut Conversation,
    mut on_delta: F,
) -> Result<String, E>
where
    S: Stream<Item = Result<Bytes, E>>,
    F: FnMut(&str),
{
    let mut consumer = StreamConsumer::new();
    let mut merge = |consumer: &StreamConsumer, deltas: Vec<String>, conv: &mut Conversation| {
        if deltas.is_empty() {
            return;
        }
        for delta in &deltas {
            on_delta(delta);
        }
        conv.apply(ConversationAction::AssistantContent(consumer.reply().to_owned()));
    };

    futures::pin_mut!(stream);
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        let deltas = consumer.push(&chunk);
        merge(&consumer, deltas, conversation);
        if consumer.is_done() {
            return Ok(consumer.reply);
        }
    }

    let deltas = consumer.finish();
    merge(&consumer, deltas, conversation);
    Ok(consumer.reply)
}
