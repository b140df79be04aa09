use std::fmt;

/// A borrowed `name=value` pair straight off the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RawTag<'a> {
    /// Text before the first `=`, or the whole token for flag tags.
    pub name: &'a str,
    /// Text after the first `=`; empty for flag tags.
    pub value: &'a str,
}

impl<'a> RawTag<'a> {
    fn from_token(token: &'a str) -> Self {
        match token.split_once('=') {
            Some((name, value)) => RawTag { name, value },
            None => RawTag {
                name: token,
                value: "",
            },
        }
    }
}

impl fmt::Display for RawTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Split a tags section into `name=value` pairs in wire order.
///
/// Tags are separated by `;`. Duplicate names are kept, empty tokens
/// (for example after a trailing `;`) yield an empty pair, and an empty
/// section yields no tags at all. The output is sized up front from the
/// separator count.
///
/// # Examples
///
/// ```
/// use tmi_parse::tags::{tokenize, RawTag};
///
/// let tags = tokenize("color=#0000FF;emote-only");
/// assert_eq!(tags, [
///     RawTag { name: "color", value: "#0000FF" },
///     RawTag { name: "emote-only", value: "" },
/// ]);
/// ```
pub fn tokenize(tags: &str) -> Vec<RawTag<'_>> {
    if tags.is_empty() {
        return Vec::new();
    }

    let count = tags.bytes().filter(|&b| b == b';').count() + 1;
    let mut out = Vec::with_capacity(count);
    out.extend(tags.split(';').map(RawTag::from_token));
    debug_assert_eq!(out.len(), count);
    out
}
