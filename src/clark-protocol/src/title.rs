//! Conversation title extraction.
//!
//! The assistant's first response in a new conversation may open with a
//! `{Title Here}` prefix. `extract_title` peels that prefix off; when the
//! model ignores the instruction, `fallback_title` derives a title from
//! the user's first message instead.

/// Maximum length of a derived fallback title.
const FALLBACK_TITLE_MAX: usize = 30;

/// Splits a `{Title}` prefix off an assistant response.
///
/// The prefix must appear at the start of the response, allowing leading
/// whitespace, and must contain at least one character between the braces.
/// Returns the trimmed title and the remainder with surrounding whitespace
/// removed. Responses without the prefix come back unchanged.
#[must_use]
pub fn extract_title(response: &str) -> (Option<String>, &str) {
    let after_ws = response.trim_start();
    let Some(inner) = after_ws.strip_prefix('{') else {
        return (None, response);
    };
    let Some(close) = inner.find('}') else {
        return (None, response);
    };
    if close == 0 {
        // Empty braces are not a title.
        return (None, response);
    }

    let title = inner[..close].trim().to_string();
    let rest = inner[close + 1..].trim();
    (Some(title), rest)
}

/// Derives a conversation title from the user's first message.
///
/// Takes the first four words, capping the result at 30 characters with an
/// ellipsis. An empty message yields "New Conversation".
#[must_use]
pub fn fallback_title(first_message: &str) -> String {
    let title: String = first_message
        .split_whitespace()
        .take(4)
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        return "New Conversation".to_string();
    }
    if title.chars().count() > FALLBACK_TITLE_MAX {
        let truncated: String = title.chars().take(FALLBACK_TITLE_MAX - 3).collect();
        return format!("{truncated}...");
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_brace_prefixed_title() {
        let (title, rest) = extract_title("{Python Help Request} Here's how...");
        assert_eq!(title.as_deref(), Some("Python Help Request"));
        assert_eq!(rest, "Here's how...");
    }

    #[test]
    fn tolerates_leading_whitespace() {
        let (title, rest) = extract_title("  \n{Trip Planning}\n\nSure!");
        assert_eq!(title.as_deref(), Some("Trip Planning"));
        assert_eq!(rest, "Sure!");
    }

    #[test]
    fn no_prefix_returns_response_unchanged() {
        let (title, rest) = extract_title("Just a plain answer.");
        assert_eq!(title, None);
        assert_eq!(rest, "Just a plain answer.");
    }

    #[test]
    fn empty_braces_are_not_a_title() {
        let (title, rest) = extract_title("{} hello");
        assert_eq!(title, None);
        assert_eq!(rest, "{} hello");
    }

    #[test]
    fn unclosed_brace_is_literal() {
        let (title, rest) = extract_title("{oops no close");
        assert_eq!(title, None);
        assert_eq!(rest, "{oops no close");
    }

    #[test]
    fn fallback_takes_first_four_words() {
        assert_eq!(fallback_title("how do I sort a list"), "how do I sort");
    }

    #[test]
    fn fallback_caps_length_with_ellipsis() {
        let title = fallback_title("supercalifragilisticexpialidocious antidisestablishmentarianism");
        assert!(title.chars().count() <= 30);
        assert!(title.ends_with("..."));
    }

    #[test]
    fn fallback_for_empty_message() {
        assert_eq!(fallback_title("   "), "New Conversation");
    }
}
