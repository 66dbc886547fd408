//! Protocol types shared between the Clark chat collaborators.
//!
//! This crate defines the message and conversation data model consumed by
//! the rendering engine, plus the chat configuration (provider selection
//! and system instructions) that the messaging layer passes around
//! explicitly instead of keeping process-wide mutable state.

pub mod config;
pub mod message;
pub mod title;

pub use config::{ChatConfig, DEFAULT_SYSTEM_INSTRUCTIONS, Provider};
pub use message::{Conversation, MAX_CONTENT_LEN, Message, MessageError, Role, validate_content};
pub use title::{extract_title, fallback_title};
