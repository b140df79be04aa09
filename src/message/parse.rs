use crate::tags::{tokenize, TagFactory};

use super::{assemble, scan, Boundaries, IrcMessage};

/// Parse one line with the default tag table.
///
/// A trailing CR/LF is ignored. The call never fails and never panics:
/// missing sections come back empty and malformed typed tags keep their
/// raw value with no parsed form.
///
/// # Examples
///
/// ```
/// let msg = tmi_parse::parse("@bits=100 :foo!foo@foo.tmi.twitch.tv PRIVMSG #bar :cheer100");
/// assert_eq!(msg.command(), "PRIVMSG");
/// assert_eq!(msg.bits(), Some(100));
/// ```
pub fn parse(line: &str) -> IrcMessage {
    parse_with(line, TagFactory::shared())
}

/// Parse one line, typing tags with `factory`.
pub fn parse_with(line: &str, factory: &TagFactory) -> IrcMessage {
    let line = line.trim_end_matches(['\r', '\n']);
    build(scan(line), factory)
}

/// Type the tags of an already scanned line and assemble the message.
pub(crate) fn build(boundaries: Boundaries<'_>, factory: &TagFactory) -> IrcMessage {
    #[cfg(feature = "tracing")]
    if !boundaries.has_command() {
        tracing::trace!(?boundaries, "no command found in line");
    }

    let tags = factory.create_all(&tokenize(boundaries.tags));
    assemble(boundaries, tags)
}

/// A reusable parser bound to one [`TagFactory`].
///
/// ```
/// use tmi_parse::Parser;
///
/// let parser = Parser::twitch();
/// let msg = parser.parse("@tmi-sent-ts=1507246572675 :a!a@a PRIVMSG #c :hi");
/// assert!(msg.tags()[0].as_timestamp().is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Parser {
    factory: TagFactory,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser using [`TagFactory::twitch`].
    pub fn twitch() -> Self {
        Self::with_factory(TagFactory::twitch())
    }

    pub fn with_factory(factory: TagFactory) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &TagFactory {
        &self.factory
    }

    pub fn parse(&self, line: &str) -> IrcMessage {
        parse_with(line, &self.factory)
    }

    /// Finish a line whose sections were already located with [`scan`].
    #[cfg_attr(not(feature = "tokio"), allow(dead_code))]
    pub(crate) fn parse_sections(&self, boundaries: Boundaries<'_>) -> IrcMessage {
        build(boundaries, &self.factory)
    }
}
