//! Turn and Conversation domain types.
//!
//! These are the value objects that flow through the pipeline:
//! the user submits input → a `Turn` is appended to the `Conversation` →
//! the assembled request goes to the backend → the reply comes back as
//! another `Turn`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a conversation (session).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub String);

impl ConversationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The role of a turn's author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user
    User,
    /// The AI mentor
    Assistant,
    /// System instructions (persona, curriculum framing)
    System,
}

/// A single turn. Immutable once created; its position in the conversation
/// is the append order — the timestamp is informational only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Unique turn ID
    pub id: String,

    /// Who authored this turn
    pub role: Role,

    /// The text content
    pub content: String,

    /// Timestamp
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a new user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a new assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Create a new system turn (request framing — never stored in a
    /// `Conversation`).
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

/// An ordered, append-only log of turns scoped to one interactive session.
///
/// Holds user and assistant turns only; system framing lives in the request
/// the assembler builds, not in the transcript. Grows only by `append`; the
/// sole other mutation is a full `clear` on explicit user action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation ID
    pub id: ConversationId,

    /// Ordered turns
    turns: Vec<Turn>,

    /// When this conversation was created
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a new empty conversation.
    pub fn new() -> Self {
        Self {
            id: ConversationId::new(),
            turns: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Append a turn, preserving order.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Reset to the empty sequence.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// The full ordered sequence, for rendering.
    pub fn read(&self) -> &[Turn] {
        &self.turns
    }

    /// The most recently appended turn, if any.
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_turn() {
        let turn = Turn::user("Hello, mentor!");
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.content, "Hello, mentor!");
        assert!(!turn.id.is_empty());
    }

    #[test]
    fn append_preserves_order() {
        let mut conv = Conversation::new();
        conv.append(Turn::user("first"));
        conv.append(Turn::assistant("second"));

        let turns = conv.read();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].content, "first");
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[1].content, "second");
        assert_eq!(turns[1].role, Role::Assistant);
    }

    #[test]
    fn clear_empties_regardless_of_length() {
        let mut conv = Conversation::new();
        for i in 0..7 {
            conv.append(Turn::user(format!("message {i}")));
        }
        assert_eq!(conv.len(), 7);

        conv.clear();
        assert!(conv.read().is_empty());

        // Clearing an already-empty conversation is a no-op
        conv.clear();
        assert!(conv.is_empty());
    }

    #[test]
    fn turn_serialization_roundtrip() {
        let turn = Turn::assistant("Here is an overview of Module 1.");
        let json = serde_json::to_string(&turn).unwrap();
        let deserialized: Turn = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.content, turn.content);
        assert_eq!(deserialized.role, Role::Assistant);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
    }
}
