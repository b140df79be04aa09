//! Zero-copy section scanner for raw IRC lines.
//!
//! A line has the shape:
//!
//! ```text
//! [@tags] [:prefix] <command> [params...]
//! ```
//!
//! [`scan`] walks the line once and returns four borrowed slices. Section
//! transitions are driven by what the scanner sees at the start of each
//! token (`@`, `:`, anything else) rather than by how many spaces it has
//! passed, so a missing tags or prefix section never shifts the command
//! into the wrong slot.

/// The four top-level sections of a line, borrowed from the input.
///
/// Absent sections are empty slices. `tags` excludes the leading `@` and
/// `prefix` excludes the leading `:`. `params` is the verbatim remainder of
/// the line after the command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Boundaries<'a> {
    /// Raw tags section, e.g. `badges=broadcaster/1;color=#0000FF`.
    pub tags: &'a str,
    /// Message source, e.g. `nick!user@host`.
    pub prefix: &'a str,
    /// Command verb or three-digit numeric.
    pub command: &'a str,
    /// Unsplit parameters, including any `:`-led trailing argument.
    pub params: &'a str,
}

impl Boundaries<'_> {
    /// Returns `true` if the scanner found a command token.
    pub fn has_command(&self) -> bool {
        !self.command.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    TagsOrPrefixOrCommand,
    PrefixOrCommand,
    Command,
    Params,
}

/// Split `line` into its tags, prefix, command and params sections.
///
/// Runs of spaces between sections count as a single separator. The scan
/// never allocates and never panics; whatever could not be located is left
/// empty.
///
/// # Examples
///
/// ```
/// use tmi_parse::message::scan;
///
/// let b = scan(":tmi.twitch.tv 001 ronni :Welcome, GLHF!");
/// assert_eq!(b.tags, "");
/// assert_eq!(b.prefix, "tmi.twitch.tv");
/// assert_eq!(b.command, "001");
/// assert_eq!(b.params, "ronni :Welcome, GLHF!");
/// ```
pub fn scan(line: &str) -> Boundaries<'_> {
    let bytes = line.as_bytes();
    let mut boundaries = Boundaries::default();
    let mut state = ScanState::TagsOrPrefixOrCommand;
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == b' ' {
            pos += 1;
            continue;
        }

        if state == ScanState::Params {
            boundaries.params = &line[pos..];
            break;
        }

        // Token ends at the next space. Both ends sit on ASCII bytes, so
        // slicing stays on char boundaries.
        let end = bytes[pos..]
            .iter()
            .position(|&c| c == b' ')
            .map_or(bytes.len(), |offset| pos + offset);

        state = match (state, bytes[pos]) {
            (ScanState::TagsOrPrefixOrCommand, b'@') => {
                boundaries.tags = &line[pos + 1..end];
                ScanState::PrefixOrCommand
            }
            (ScanState::TagsOrPrefixOrCommand | ScanState::PrefixOrCommand, b':') => {
                boundaries.prefix = &line[pos + 1..end];
                ScanState::Command
            }
            _ => {
                boundaries.command = &line[pos..end];
                ScanState::Params
            }
        };

        pos = end;
    }

    boundaries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_full_line() {
        let b = scan(
            "@badges=broadcaster/1,subscriber/12;color=#0000FF;display-name=ronni;subscriber=1 :ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #ronni :Kappa Keepo Kappa",
        );
        assert_eq!(
            b.tags,
            "badges=broadcaster/1,subscriber/12;color=#0000FF;display-name=ronni;subscriber=1"
        );
        assert_eq!(b.prefix, "ronni!ronni@ronni.tmi.twitch.tv");
        assert_eq!(b.command, "PRIVMSG");
        assert_eq!(b.params, "#ronni :Kappa Keepo Kappa");
    }

    #[test]
    fn test_scan_numeric_without_tags() {
        let b = scan(":tmi.twitch.tv 001 ronni :Welcome, GLHF!");
        assert_eq!(b.tags, "");
        assert_eq!(b.prefix, "tmi.twitch.tv");
        assert_eq!(b.command, "001");
        assert_eq!(b.params, "ronni :Welcome, GLHF!");
    }

    #[test]
    fn test_scan_tags_without_prefix() {
        let b = scan("@msg-id=abc PING :tmi.twitch.tv");
        assert_eq!(b.tags, "msg-id=abc");
        assert_eq!(b.prefix, "");
        assert_eq!(b.command, "PING");
        assert_eq!(b.params, ":tmi.twitch.tv");
    }

    #[test]
    fn test_scan_bare_command() {
        let b = scan("PING :tmi.twitch.tv");
        assert_eq!(b.tags, "");
        assert_eq!(b.prefix, "");
        assert_eq!(b.command, "PING");
        assert_eq!(b.params, ":tmi.twitch.tv");

        let b = scan("RECONNECT");
        assert_eq!(b.command, "RECONNECT");
        assert_eq!(b.params, "");
    }

    #[test]
    fn test_scan_bare_numeric() {
        let b = scan("421 ronni WHO :Unknown command");
        assert_eq!(b.prefix, "");
        assert_eq!(b.command, "421");
        assert_eq!(b.params, "ronni WHO :Unknown command");
    }

    #[test]
    fn test_scan_colon_in_params_is_not_prefix() {
        let b = scan("PRIVMSG :a:b :c");
        assert_eq!(b.prefix, "");
        assert_eq!(b.command, "PRIVMSG");
        assert_eq!(b.params, ":a:b :c");
    }

    #[test]
    fn test_scan_at_after_tags_is_command() {
        let b = scan("@a=1 @b=2");
        assert_eq!(b.tags, "a=1");
        assert_eq!(b.command, "@b=2");
    }

    #[test]
    fn test_scan_params_kept_verbatim() {
        let b = scan(":a!a@a PRIVMSG #c :  spaced   out  ");
        assert_eq!(b.params, "#c :  spaced   out  ");
    }

    #[test]
    fn test_scan_collapses_separator_runs() {
        let b = scan("@a=1   :pfx   CMD   rest of line");
        assert_eq!(b.tags, "a=1");
        assert_eq!(b.prefix, "pfx");
        assert_eq!(b.command, "CMD");
        assert_eq!(b.params, "rest of line");
    }

    #[test]
    fn test_scan_degenerate_inputs() {
        assert_eq!(scan(""), Boundaries::default());
        assert_eq!(scan("     "), Boundaries::default());

        let b = scan("@");
        assert_eq!(b.tags, "");
        assert!(!b.has_command());

        let b = scan("@a=1;b=2");
        assert_eq!(b.tags, "a=1;b=2");
        assert!(!b.has_command());

        let b = scan(":");
        assert_eq!(b.prefix, "");
        assert!(!b.has_command());

        let b = scan("@a=1 :only.prefix");
        assert_eq!(b.prefix, "only.prefix");
        assert_eq!(b.command, "");
        assert_eq!(b.params, "");
    }

    #[test]
    fn test_scan_multibyte_text() {
        let b = scan("@display-name=ロニ :r!r@r PRIVMSG #c :こんにちは 👋");
        assert_eq!(b.tags, "display-name=ロニ");
        assert_eq!(b.command, "PRIVMSG");
        assert_eq!(b.params, "#c :こんにちは 👋");
    }
}
