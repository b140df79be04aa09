//! Protocol length limits.

/// Maximum length for the IRCv3 tags section, including the leading `@`.
pub const MAX_TAGS_LENGTH: usize = 8191;

/// Maximum length for the rest of the line, including CRLF.
pub const MAX_MESSAGE_BODY: usize = 512;

/// Longest line the codec accepts by default: a full tags section, its
/// separating space and a full body.
pub const MAX_LINE_LENGTH: usize = MAX_TAGS_LENGTH + 1 + MAX_MESSAGE_BODY;

/// Checks if a tags section would exceed the IRCv3 tags limit.
///
/// Returns `Some(len)` if it does, `None` if within limits. `tags` is the
/// section without its `@`.
#[inline]
pub fn check_tags_length(tags: &str) -> Option<usize> {
    let len = tags.len() + 1;
    if len > MAX_TAGS_LENGTH {
        Some(len)
    } else {
        None
    }
}
