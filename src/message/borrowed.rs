use crate::prefix::PrefixRef;
use crate::tags::{RawTag, TagFactory};

use super::{assemble, scan, IrcMessage};

/// A parsed line that borrows every section from the input.
///
/// Useful when a caller only inspects a line and drops it, such as routing
/// on `command` before deciding whether to keep the message. Tags stay
/// untyped until [`into_owned_with`](Self::into_owned_with).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct IrcMessageRef<'a> {
    pub tags: Vec<RawTag<'a>>,
    pub prefix: &'a str,
    pub command: &'a str,
    pub params: &'a str,
    /// The input line with any trailing CR/LF removed.
    pub raw: &'a str,
}

impl<'a> IrcMessageRef<'a> {
    /// Scan and tokenize `s` without copying. Never fails.
    pub fn parse(s: &'a str) -> IrcMessageRef<'a> {
        let raw = s.trim_end_matches(['\r', '\n']);
        let boundaries = scan(raw);

        IrcMessageRef {
            tags: crate::tags::tokenize(boundaries.tags),
            prefix: boundaries.prefix,
            command: boundaries.command,
            params: boundaries.params,
            raw,
        }
    }

    /// Raw value of the first tag named `name`.
    pub fn tag_value(&self, name: &str) -> Option<&'a str> {
        self.tags.iter().find(|tag| tag.name == name).map(|tag| tag.value)
    }

    pub fn source(&self) -> Option<PrefixRef<'a>> {
        PrefixRef::parse(self.prefix)
    }

    /// Type the tags with `factory` and copy every section.
    pub fn into_owned_with(self, factory: &TagFactory) -> IrcMessage {
        let tags = factory.create_all(&self.tags);
        assemble(
            super::Boundaries {
                tags: "",
                prefix: self.prefix,
                command: self.command,
                params: self.params,
            },
            tags,
        )
    }

    /// [`into_owned_with`](Self::into_owned_with) using the default table.
    pub fn into_owned(self) -> IrcMessage {
        self.into_owned_with(TagFactory::shared())
    }
}
