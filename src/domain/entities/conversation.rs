use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The transcript of one chat session. Turns are append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    turns: Vec<ChatTurn>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            turns: Vec::new(),
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(ChatRole::User, content);
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(ChatRole::Assistant, content);
    }

    fn push(&mut self, role: ChatRole, content: impl Into<String>) {
        self.turns.push(ChatTurn {
            role,
            content: content.into(),
        });
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn last_turn(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl fmt::Display for ChatTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.role.as_str(), self.content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Assistant => "Assistant",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_keep_insertion_order() {
        let mut session = ChatSession::new();
        session.push_user("hi");
        session.push_assistant("hello");
        session.push_user("bye");

        let roles: Vec<_> = session.turns().iter().map(|t| t.role).collect();
        assert_eq!(
            roles,
            vec![ChatRole::User, ChatRole::Assistant, ChatRole::User]
        );
        assert_eq!(session.last_turn().map(|t| t.content.as_str()), Some("bye"));
    }

    #[test]
    fn test_new_sessions_are_independent() {
        let mut a = ChatSession::new();
        let b = ChatSession::new();
        a.push_user("only in a");

        assert_ne!(a.id, b.id);
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }

    #[test]
    fn test_turn_display() {
        let turn = ChatTurn {
            role: ChatRole::Assistant,
            content: "Sure.".into(),
        };
        assert_eq!(turn.to_string(), "Assistant: Sure.");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatRole::User).unwrap();
        assert_eq!(json, "\"user\"");
    }
}
