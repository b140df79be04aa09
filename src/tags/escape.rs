//! IRCv3 tag value unescaping.

use std::borrow::Cow;

/// Unescape a tag value from wire format.
///
/// Decodes the IRCv3 escapes `\:` (`;`), `\s` (space), `\\`, `\r` and `\n`.
/// Unknown escapes drop the backslash and a trailing lone backslash is
/// removed. Values without a backslash are returned borrowed.
pub fn unescape_tag_value(value: &str) -> Cow<'_, str> {
    if !value.contains('\\') {
        return Cow::Borrowed(value);
    }

    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        let r = if c == '\\' {
            match iter.next() {
                Some(':') => ';',
                Some('s') => ' ',
                Some('\\') => '\\',
                Some('r') => '\r',
                Some('n') => '\n',
                Some(c) => c,
                None => break,
            }
        } else {
            c
        };
        unescaped.push(r);
    }
    Cow::Owned(unescaped)
}
