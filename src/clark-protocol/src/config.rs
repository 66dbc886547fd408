//! Chat configuration.
//!
//! Provider selection and system instructions are passed explicitly to the
//! messaging layer as a [`ChatConfig`] value rather than living in global
//! mutable state.

use serde::{Deserialize, Serialize};

/// Default system instructions given to the text producer.
///
/// The markup rules embedded here are the wire contract the rendering
/// engine decodes: `**bold**`, backtick code, `#...#` bullet lists with
/// `~` separators, `@&...&@` tables with `%R<row>$C<col>` cells, and
/// `(display)/%^url^%/` link embeds.
pub const DEFAULT_SYSTEM_INSTRUCTIONS: &str = "You are Clark, a helpful and intelligent \
assistant. You provide accurate, helpful responses while being friendly and professional. \
Emphasize important parts in bold with double asterisks like **this**. To list multiple \
items, write a bullet list as # ~ item ~ item # where the tildes separate bullets and the \
hashtags open and close the list. For hyperlinks use (display text)/%^url^%/; the system \
adds https:// when the url has no scheme. To compare or organize information, open a table \
with @&, write each cell as %R<row>$C<col> followed by the cell text, and close with &@; \
row 1 is always the header row. Never use a bullet list and a table in the same message.";

/// Which model provider backs the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Gemini,
    Groq,
    OpenRouter,
}

/// Configuration the messaging layer threads through every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    pub provider: Provider,
    pub system_instructions: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            system_instructions: DEFAULT_SYSTEM_INSTRUCTIONS.to_string(),
        }
    }
}

impl ChatConfig {
    /// Selects a provider.
    #[must_use]
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    /// Overrides the system instructions.
    ///
    /// An empty string restores the default instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        let instructions = instructions.into();
        self.system_instructions = if instructions.is_empty() {
            DEFAULT_SYSTEM_INSTRUCTIONS.to_string()
        } else {
            instructions
        };
        self
    }
}
