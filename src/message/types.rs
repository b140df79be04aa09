use std::str::FromStr;

use crate::error::MessageParseError;
use crate::prefix::PrefixRef;
use crate::tags::{names, BadgesTag, MessageTag};

/// A parsed IRC line.
///
/// Built once per line by [`parse`](crate::parse) or a
/// [`Parser`](super::Parser) and never mutated afterwards. Absent sections
/// are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrcMessage {
    pub(super) tags: Vec<MessageTag>,
    pub(super) prefix: String,
    pub(super) command: String,
    pub(super) params: String,
}

impl IrcMessage {
    /// Parse a line with the default tag table. Never fails.
    ///
    /// Use `str::parse` instead to reject input that is not a single line.
    pub fn parse(line: &str) -> Self {
        crate::parse(line)
    }

    /// Tags in wire order, duplicates included.
    pub fn tags(&self) -> &[MessageTag] {
        &self.tags
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Everything after the command, unsplit.
    pub fn params(&self) -> &str {
        &self.params
    }

    /// First tag named `name`.
    pub fn tag(&self, name: &str) -> Option<&MessageTag> {
        self.tags.iter().find(|tag| tag.name() == name)
    }

    /// Every tag named `name`, in wire order.
    pub fn tags_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MessageTag> + 'a {
        self.tags.iter().filter(move |tag| tag.name() == name)
    }

    /// Raw value of the first tag named `name`.
    pub fn tag_value(&self, name: &str) -> Option<&str> {
        self.tag(name).map(MessageTag::value)
    }

    /// The `badges` tag, if present and typed as a badge list.
    pub fn badges(&self) -> Option<&BadgesTag> {
        self.tag(names::BADGES).and_then(MessageTag::as_badges)
    }

    /// The parsed `bits` amount, if present and numeric.
    pub fn bits(&self) -> Option<i32> {
        self.tag(names::BITS)
            .and_then(MessageTag::as_integer)
            .and_then(|tag| tag.parsed())
    }

    /// Split view of the prefix.
    pub fn source(&self) -> Option<PrefixRef<'_>> {
        PrefixRef::parse(&self.prefix)
    }

    /// Nickname of the sending user, `None` for server-originated lines.
    pub fn source_nickname(&self) -> Option<&str> {
        self.source().and_then(|prefix| prefix.nickname())
    }

    /// Take the message apart into `(tags, prefix, command, params)`.
    pub fn into_parts(self) -> (Vec<MessageTag>, String, String, String) {
        (self.tags, self.prefix, self.command, self.params)
    }
}

impl FromStr for IrcMessage {
    type Err = MessageParseError;

    /// Strict single-line parse.
    ///
    /// A trailing CRLF is accepted. Empty input, or CR, LF or NUL anywhere
    /// else, is rejected. Everything else parses as [`IrcMessage::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            return Err(MessageParseError::EmptyMessage);
        }

        if let Some((position, ch)) = line
            .char_indices()
            .find(|&(_, c)| matches!(c, '\r' | '\n' | '\0'))
        {
            return Err(MessageParseError::IllegalControlChar { ch, position });
        }

        Ok(crate::parse(line))
    }
}
