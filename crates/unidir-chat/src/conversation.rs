//! Client-side conversation store.
//!
//! State changes go through [`Conversation::apply`] with a
//! [`ConversationAction`]; nothing else mutates the message list. While a
//! reply is streaming, the store remembers which message belongs to that
//! stream, so deltas never land in an older assistant message.

use unidir_types::{ChatRole, ChatTurn, InteractionMode, Locale};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), role, content: content.into() }
    }

    pub fn to_turn(&self) -> ChatTurn {
        ChatTurn::new(self.role, self.content.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationAction {
    /// The user submitted a message; a new reply stream starts.
    UserSent(String),
    /// Running total of the streamed reply so far.
    AssistantContent(String),
    /// The reply stream ended, successfully or not.
    StreamEnded,
    /// Switching modes starts a fresh conversation.
    ModeChanged(InteractionMode),
    Reset,
}

#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    mode: InteractionMode,
    locale: Locale,
    streaming: bool,
}

impl Conversation {
    pub fn new(locale: Locale, mode: InteractionMode) -> Self {
        Self { messages: Vec::new(), mode, locale, streaming: false }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Turns sent to the relay: every message in order, system prompt excluded.
    pub fn history(&self) -> Vec<ChatTurn> {
        self.messages.iter().map(ChatMessage::to_turn).collect()
    }

    /// Text of the last assistant message, if the last message is one.
    pub fn last_reply(&self) -> Option<&str> {
        self.messages
            .last()
            .filter(|m| m.role == ChatRole::Assistant)
            .map(|m| m.content.as_str())
    }

    pub fn apply(&mut self, action: ConversationAction) {
        match action {
            ConversationAction::UserSent(text) => {
                self.messages.push(ChatMessage::new(ChatRole::User, text));
                self.streaming = true;
            }
            ConversationAction::AssistantContent(total) => self.merge_reply(total),
            ConversationAction::StreamEnded => self.streaming = false,
            ConversationAction::ModeChanged(mode) => {
                self.mode = mode;
                self.messages.clear();
                self.streaming = false;
            }
            ConversationAction::Reset => {
                self.messages.clear();
                self.streaming = false;
            }
        }
    }

    /// Overwrite the streaming reply if it already exists, else append it.
    fn merge_reply(&mut self, total: String) {
        if !self.streaming {
            return;
        }
        match self.messages.last_mut() {
            Some(last) if last.role == ChatRole::Assistant => last.content = total,
            _ => self.messages.push(ChatMessage::new(ChatRole::Assistant, total)),
        }
    }
}
