use std::sync::LazyLock;

use regex::Regex;

/// Upper bound on suggestions returned to the client.
pub const MAX_SUGGESTIONS: usize = 3;

static NUMBERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("valid regex"));

static BULLET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•]\s*").expect("valid regex"));

/// Extracts topic names from a model reply, one candidate per line.
///
/// Leading numbered markers ("1. ") are stripped first, then bullet markers
/// ("- ", "* ", "• "), then surrounding whitespace. Lines that end up empty
/// are dropped and at most [`MAX_SUGGESTIONS`] survivors are kept, in their
/// original order. The reply is prompted to contain plain lines, so on clean
/// input this is a no-op split.
pub fn parse_suggested_topics(reply: &str) -> Vec<String> {
    reply
        .split('\n')
        .map(|line| {
            let cleaned = NUMBERED_MARKER.replace(line, "");
            let cleaned = BULLET_MARKER.replace(&cleaned, "");
            cleaned.trim().to_string()
        })
        .filter(|topic| !topic.is_empty())
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Whether a validation reply approves the topic.
///
/// The upstream prompt asks for a literal true/false verdict, so approval is
/// detected as the substring "true" anywhere in the reply. A rejection whose
/// reason happens to contain the word "true" is therefore misread as
/// approval; callers rely on this exact behavior, so any fix has to change
/// the prompt contract as well.
pub fn reply_approves_topic(reply: &str) -> bool {
    reply.contains("true")
}
