//! Incremental decoder for the relay's `data: <json>` event stream.
//!
//! Bytes arrive in arbitrary chunks. The decoder keeps an undecoded UTF-8
//! tail (a multi-byte character may be split across reads) and a line
//! buffer, and turns complete lines into [`SseEvent`]s.
//!
//! Line handling:
//! - a trailing `\r` is stripped;
//! - empty lines, `:` comments and lines without the `data: ` prefix are skipped;
//! - the payload `[DONE]` finishes the stream; nothing after it is looked at;
//! - a payload that is not valid JSON is treated as incomplete: the line
//!   stays at the front of the buffer and is retried once more bytes arrive.
//!
//! [`SseDecoder::finish`] flushes whatever is left when the transport closes;
//! lines that still do not parse at that point are dropped.

use tracing::{debug, trace};
use unidir_types::{ChatCompletionChunk, DONE_SENTINEL};

const DATA_PREFIX: &str = "data: ";

/// Something the consumer has to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseEvent {
    /// A non-empty text fragment of the assistant reply.
    Delta(String),
    /// The `[DONE]` sentinel was reached.
    Done,
}

/// Where the line assembler stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No processable line is buffered; waiting for the next read.
    AwaitingMoreBytes,
    /// At least one newline-terminated line is ready.
    HaveCompleteLine,
    /// The sentinel was seen; further input is ignored.
    Finished,
}

enum LineOutcome {
    Skip,
    Delta(String),
    Done,
    Incomplete,
}

#[derive(Debug)]
pub struct SseDecoder {
    utf8_tail: Vec<u8>,
    buffer: String,
    phase: Phase,
}

impl Default for SseDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SseDecoder {
    pub fn new() -> Self {
        Self { utf8_tail: Vec::new(), buffer: String::new(), phase: Phase::AwaitingMoreBytes }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Feed one network read and return the events it completes.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<SseEvent> {
        if self.is_finished() {
            return Vec::new();
        }
        self.decode(bytes);
        self.phase = self.line_phase();

        let mut events = Vec::new();
        while self.phase == Phase::HaveCompleteLine {
            self.step(&mut events);
        }
        events
    }

    /// Flush the buffer after the transport closed.
    ///
    /// The last line does not need a trailing newline. Payloads that still
    /// fail to parse can never be completed and are dropped.
    pub fn finish(&mut self) -> Vec<SseEvent> {
        let mut events = Vec::new();
        if self.is_finished() {
            return events;
        }

        if !self.utf8_tail.is_empty() {
            let tail = std::mem::take(&mut self.utf8_tail);
            self.buffer.push_str(&String::from_utf8_lossy(&tail));
        }

        let rest = std::mem::take(&mut self.buffer);
        for line in rest.split('\n') {
            match classify(line) {
                LineOutcome::Skip => {}
                LineOutcome::Delta(text) => events.push(SseEvent::Delta(text)),
                LineOutcome::Done => {
                    self.phase = Phase::Finished;
                    events.push(SseEvent::Done);
                    return events;
                }
                LineOutcome::Incomplete => {
                    debug!(line = %line, "dropping unparseable line after stream close");
                }
            }
        }
        self.phase = Phase::AwaitingMoreBytes;
        events
    }

    /// Process the first buffered line and move to the next phase.
    fn step(&mut self, events: &mut Vec<SseEvent>) {
        let Some(end) = self.buffer.find('\n') else {
            self.phase = Phase::AwaitingMoreBytes;
            return;
        };

        match classify(&self.buffer[..end]) {
            LineOutcome::Incomplete => {
                // Keep the line where it is; the next read retries it.
                trace!("payload incomplete, waiting for more bytes");
                self.phase = Phase::AwaitingMoreBytes;
                return;
            }
            LineOutcome::Done => {
                self.buffer.clear();
                self.utf8_tail.clear();
                self.phase = Phase::Finished;
                events.push(SseEvent::Done);
                return;
            }
            LineOutcome::Delta(text) => events.push(SseEvent::Delta(text)),
            LineOutcome::Skip => {}
        }

        self.buffer.drain(..=end);
        self.phase = self.line_phase();
    }

    fn line_phase(&self) -> Phase {
        if self.buffer.contains('\n') {
            Phase::HaveCompleteLine
        } else {
            Phase::AwaitingMoreBytes
        }
    }

    /// Append `bytes` to the text buffer, holding back an incomplete
    /// multi-byte sequence at the end. Invalid sequences become U+FFFD.
    fn decode(&mut self, bytes: &[u8]) {
        let mut pending = std::mem::take(&mut self.utf8_tail);
        pending.extend_from_slice(bytes);

        let mut rest: &[u8] = &pending;
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    self.buffer.push_str(valid);
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    if let Ok(valid) = std::str::from_utf8(valid) {
                        self.buffer.push_str(valid);
                    }
                    match e.error_len() {
                        Some(bad) => {
                            self.buffer.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[bad..];
                        }
                        None => {
                            self.utf8_tail = after.to_vec();
                            break;
                        }
                    }
                }
            }
        }
    }
}

fn classify(raw: &str) -> LineOutcome {
    let line = raw.strip_suffix('\r').unwrap_or(raw);
    if line.is_empty() || line.starts_with(':') {
        return LineOutcome::Skip;
    }
    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return LineOutcome::Skip;
    };

    let payload = payload.trim();
    if payload == DONE_SENTINEL {
        return LineOutcome::Done;
    }

    match serde_json::from_str::<ChatCompletionChunk>(payload) {
        Ok(chunk) => match chunk.content_delta() {
            Some(text) => LineOutcome::Delta(text.to_owned()),
            None => LineOutcome::Skip,
        },
        Err(_) => LineOutcome::Incomplete,
    }
}
