//! Tokio codec turning a byte stream into parsed messages.
//!
//! Framing is delegated to [`LinesCodec`]; each complete line is handed to
//! a [`Parser`]. Blank lines are skipped.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, LinesCodec, LinesCodecError};
use tracing::warn;

use std::io;

use crate::error::{ProtocolError, Result};
use crate::limits::{check_tags_length, MAX_LINE_LENGTH};
use crate::message::{scan, IrcMessage, Parser};
use crate::tags::TagFactory;

/// Decoder yielding one [`IrcMessage`] per CRLF- or LF-terminated line.
///
/// A line longer than [`max_length`](Self::max_length) or one that is not
/// valid UTF-8 is logged and dropped, and decoding resumes at the next line,
/// so one bad line never ends a `FramedRead` stream. Only I/O errors from
/// the underlying reader surface as [`ProtocolError::Io`].
#[derive(Debug)]
pub struct IrcLineCodec {
    lines: LinesCodec,
    parser: Parser,
    max_length: usize,
}

impl IrcLineCodec {
    /// A codec with [`MAX_LINE_LENGTH`] and the default tag table.
    pub fn new() -> Self {
        Self::with_max_length(MAX_LINE_LENGTH)
    }

    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            lines: LinesCodec::new_with_max_length(max_length),
            parser: Parser::new(),
            max_length,
        }
    }

    /// Use `factory` to type tags.
    pub fn with_factory(mut self, factory: TagFactory) -> Self {
        self.parser = Parser::with_factory(factory);
        self
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    fn next_message(&mut self, src: &mut BytesMut, eof: bool) -> Result<Option<IrcMessage>> {
        loop {
            let line = if eof {
                self.lines.decode_eof(src)
            } else {
                self.lines.decode(src)
            };

            match line {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => {
                    let sections = scan(line.trim_end_matches(['\r', '\n']));
                    if let Some(len) = check_tags_length(sections.tags) {
                        warn!(len, "tags section exceeds IRCv3 limit");
                    }
                    return Ok(Some(self.parser.parse_sections(sections)));
                }
                Ok(None) => return Ok(None),
                // LinesCodec skips the rest of the line on its next call.
                Err(LinesCodecError::MaxLineLengthExceeded) => {
                    warn!(max_length = self.max_length, "discarding oversized line");
                }
                // The offending line is already consumed from `src`.
                Err(LinesCodecError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                    warn!(error = %e, "discarding line that is not valid UTF-8");
                }
                Err(LinesCodecError::Io(e)) => return Err(e.into()),
            }
        }
    }
}

impl Default for IrcLineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for IrcLineCodec {
    type Item = IrcMessage;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<IrcMessage>> {
        self.next_message(src, false)
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<IrcMessage>> {
        self.next_message(src, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_line() {
        let mut codec = IrcLineCodec::new();
        let mut buf = BytesMut::from("PING :tmi.twitch.tv\r\n");

        let msg = codec.decode(&mut buf).unwrap().expect("one complete line");
        assert_eq!(msg.command(), "PING");
        assert_eq!(msg.params(), ":tmi.twitch.tv");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_decode_waits_for_newline() {
        let mut codec = IrcLineCodec::new();
        let mut buf = BytesMut::from(":tmi.twitch.tv 001 ronni :Wel");
        assert!(codec.decode(&mut buf).unwrap().is_none());

        buf.extend_from_slice(b"come, GLHF!\r\n");
        let msg = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(msg.command(), "001");
        assert_eq!(msg.params(), "ronni :Welcome, GLHF!");
    }

    #[test]
    fn test_decode_skips_blank_lines() {
        let mut codec = IrcLineCodec::new();
        let mut buf = BytesMut::from("\r\n  \r\nPING :x\r\n");
        let msg = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(msg.command(), "PING");
        assert!(codec.decode(&mut buf).unwrap().is_none());
    }

    #[test]
    fn test_decode_eof_without_newline() {
        let mut codec = IrcLineCodec::new();
        let mut buf = BytesMut::from("RECONNECT");
        assert!(codec.decode(&mut buf).unwrap().is_none());

        let msg = codec.decode_eof(&mut buf).unwrap().unwrap();
        assert_eq!(msg.command(), "RECONNECT");
    }

    #[test]
    fn test_oversized_line_is_discarded() {
        let mut codec = IrcLineCodec::with_max_length(16);
        let mut buf = BytesMut::new();
        buf.extend_from_slice(b"PRIVMSG #c :this line is far too long\r\nPING :x\r\n");

        let msg = codec.decode(&mut buf).unwrap().expect("next line after oversized one");
        assert_eq!(msg.command(), "PING");
        assert_eq!(msg.params(), ":x");
        assert!(codec.decode(&mut buf).unwrap().is_none());
    }

    #[test]
    fn test_oversized_line_split_across_reads() {
        let mut codec = IrcLineCodec::with_max_length(16);
        let mut buf = BytesMut::from("PRIVMSG #c :this line is far");
        assert!(codec.decode(&mut buf).unwrap().is_none());

        buf.extend_from_slice(b" too long\r\nPING :x\r\n");
        let msg = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(msg.command(), "PING");
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let mut codec = IrcLineCodec::new();
        let mut buf = BytesMut::from(&b"PRIVMSG #c :\xff\xfe\r\nPING :x\r\n"[..]);

        let msg = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(msg.command(), "PING");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_invalid_utf8_at_eof() {
        let mut codec = IrcLineCodec::new();
        let mut buf = BytesMut::from(&b"PRIVMSG #c :\xff"[..]);
        assert!(codec.decode_eof(&mut buf).unwrap().is_none());
    }

    #[test]
    fn test_with_factory() {
        let mut codec = IrcLineCodec::new().with_factory(TagFactory::twitch());
        let mut buf = BytesMut::from("@tmi-sent-ts=1507246572675 :a!a@a PRIVMSG #c :hi\r\n");
        let msg = codec.decode(&mut buf).unwrap().unwrap();
        assert!(msg.tags()[0].as_timestamp().is_some());
    }
}
