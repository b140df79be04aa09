//! Error types for the Twitch IRC parser.
//!
//! The parser itself degrades gracefully and never fails on unusual input.
//! These errors exist for the strict entry point ([`IrcMessage::from_str`]),
//! which rejects input that is not a single protocol line, and for I/O
//! failures under the line codec.
//!
//! [`IrcMessage::from_str`]: crate::IrcMessage

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Errors raised while reading lines off a byte stream.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error from the underlying reader.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the strict, single-line parse entry point.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// Input was empty.
    #[error("empty message")]
    EmptyMessage,

    /// A line terminator or NUL appeared inside the line.
    #[error("illegal control character {ch:?} at byte {position}")]
    IllegalControlChar {
        /// The offending character.
        ch: char,
        /// Byte offset into the input.
        position: usize,
    },
}
