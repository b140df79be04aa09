//! Message source (prefix) view.

/// A borrowed, split view of a message prefix.
///
/// Twitch sends either a server name (`tmi.twitch.tv`) or a full user mask
/// (`ronni!ronni@ronni.tmi.twitch.tv`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixRef<'a> {
    /// A server name.
    Server(&'a str),
    /// `nick[!user][@host]`; missing parts are empty.
    User {
        nick: &'a str,
        user: &'a str,
        host: &'a str,
    },
}

impl<'a> PrefixRef<'a> {
    /// Classify and split a raw prefix. Returns `None` for an empty prefix.
    ///
    /// A prefix containing `!` or `@` is a user mask. Otherwise a `.`
    /// marks a server name and anything else is a bare nickname.
    pub fn parse(raw: &'a str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        if !raw.contains(['!', '@']) && raw.contains('.') {
            return Some(PrefixRef::Server(raw));
        }

        let (rest, host) = raw.split_once('@').unwrap_or((raw, ""));
        let (nick, user) = rest.split_once('!').unwrap_or((rest, ""));

        Some(PrefixRef::User { nick, user, host })
    }

    /// The nickname for user prefixes.
    pub fn nickname(&self) -> Option<&'a str> {
        match *self {
            PrefixRef::Server(_) => None,
            PrefixRef::User { nick, .. } => Some(nick),
        }
    }
}
