//! Message and conversation types.
//!
//! These mirror the wire shape the chat transport persists: a message is a
//! role-tagged content string with optional out-of-band image fields. The
//! renderer treats `content` as markup; `image_url` and `image_text` are
//! displayed verbatim and never markup-parsed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Maximum length of user-supplied message content, in characters.
///
/// Enforced at input time by the chat layer; the markup engine itself
/// accepts strings of any length.
pub const MAX_CONTENT_LEN: usize = 6700;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A message typed by the user.
    User,
    /// A response generated by the assistant.
    Assistant,
}

impl Role {
    /// Display label for the message header line.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Clark",
        }
    }
}

/// One chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub role: Role,
    /// Raw markup content. The sole input to the rendering engine.
    pub content: String,
    /// Data URI or remote URL of an attached image, shown verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// OCR text extracted from the attached image, shown as a labeled note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Creates a user message in the given conversation.
    pub fn user(conversation_id: Uuid, content: impl Into<String>) -> Self {
        Self::new(conversation_id, Role::User, content)
    }

    /// Creates an assistant message in the given conversation.
    pub fn assistant(conversation_id: Uuid, content: impl Into<String>) -> Self {
        Self::new(conversation_id, Role::Assistant, content)
    }

    fn new(conversation_id: Uuid, role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            conversation_id,
            role,
            content: content.into(),
            image_url: None,
            image_text: None,
            created_at: Utc::now(),
        }
    }

    /// Attaches an image URL.
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Attaches extracted image text.
    #[must_use]
    pub fn with_image_text(mut self, text: impl Into<String>) -> Self {
        self.image_text = Some(text.into());
        self
    }
}

/// One conversation and its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub title: String,
    /// Per-conversation system instructions, frozen at creation time.
    pub system_instructions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Creates a conversation with the given title and instructions.
    pub fn new(title: impl Into<String>, system_instructions: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            system_instructions: system_instructions.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Validation failures for user-supplied message content.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageError {
    #[error("message content is required")]
    Empty,
    #[error("message content exceeds {MAX_CONTENT_LEN} characters (got {0})")]
    TooLong(usize),
}

/// Validates user input before it enters a conversation.
///
/// Whitespace-only content counts as empty. Length is measured in
/// characters, matching the input field's cap.
pub fn validate_content(content: &str) -> Result<(), MessageError> {
    if content.trim().is_empty() {
        return Err(MessageError::Empty);
    }
    let len = content.chars().count();
    if len > MAX_CONTENT_LEN {
        return Err(MessageError::TooLong(len));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validate_accepts_normal_content() {
        assert_eq!(validate_content("hello"), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_and_whitespace() {
        assert_eq!(validate_content(""), Err(MessageError::Empty));
        assert_eq!(validate_content("   \n\t"), Err(MessageError::Empty));
    }

    #[test]
    fn validate_enforces_character_cap() {
        let at_cap = "x".repeat(MAX_CONTENT_LEN);
        assert_eq!(validate_content(&at_cap), Ok(()));

        let over_cap = "x".repeat(MAX_CONTENT_LEN + 1);
        assert_eq!(
            validate_content(&over_cap),
            Err(MessageError::TooLong(MAX_CONTENT_LEN + 1))
        );
    }

    #[test]
    fn validate_counts_characters_not_bytes() {
        // Multi-byte characters stay within the cap by character count.
        let content = "é".repeat(MAX_CONTENT_LEN);
        assert_eq!(validate_content(&content), Ok(()));
    }

    #[test]
    fn message_serde_round_trip() {
        let msg = Message::assistant(Uuid::new_v4(), "**hi**")
            .with_image_url("data:image/png;base64,AAAA")
            .with_image_text("a cat");

        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, back);
    }

    #[test]
    fn optional_image_fields_are_omitted_when_absent() {
        let msg = Message::user(Uuid::new_v4(), "hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("image_url"));
        assert!(!json.contains("image_text"));
    }

    #[test]
    fn role_labels() {
        assert_eq!(Role::User.label(), "You");
        assert_eq!(Role::Assistant.label(), "Clark");
    }
}
