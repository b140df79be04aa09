//! # tmi-parse
//!
//! A Rust library for parsing Twitch chat (IRC/IRCv3) lines into structured
//! messages with typed message tags.
//!
//! ## Features
//!
//! - Single-pass, zero-copy section scanning of tags, prefix, command and params
//! - Typed tags: badge lists, integers, millisecond timestamps
//! - Extensible tag table mapping names to tag types
//! - Borrowed message view for inspect-and-drop workloads
//! - Optional Tokio codec for framing a byte stream into messages
//! - Optional `serde` support

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ```rust
//! use tmi_parse::parse;
//!
//! let raw = "@badges=broadcaster/1,subscriber/12;color=#0000FF :ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #ronni :Kappa Keepo Kappa";
//! let message = parse(raw);
//!
//! assert_eq!(message.command(), "PRIVMSG");
//! assert_eq!(message.params(), "#ronni :Kappa Keepo Kappa");
//!
//! let badges = message.badges().expect("badges tag");
//! assert_eq!(badges.get("subscriber").map(|b| b.version()), Some("12"));
//! ```
//!
//! Parsing is infallible. Sections missing from the line come back empty and
//! a typed tag whose value does not decode keeps its raw value with no parsed
//! form. Use `str::parse::<IrcMessage>()` to reject input that is not a
//! single line.
//!
//! ### Custom tag types
//!
//! ```rust
//! use tmi_parse::{MessageTag, Parser, TagFactory};
//!
//! let factory = TagFactory::builder()
//!     .register("room-id", MessageTag::integer)
//!     .build();
//! let parser = Parser::with_factory(factory);
//!
//! let msg = parser.parse("@room-id=12345 :tmi.twitch.tv ROOMSTATE #ronni");
//! assert_eq!(msg.tags()[0].as_integer().and_then(|t| t.parsed()), Some(12345));
//! ```

#[cfg(feature = "tokio")]
#[cfg_attr(docsrs, doc(cfg(feature = "tokio")))]
pub mod codec;
pub mod error;
pub mod limits;
pub mod message;
pub mod prefix;
pub mod tags;

#[cfg(feature = "tokio")]
pub use self::codec::IrcLineCodec;
pub use self::error::{MessageParseError, ProtocolError};
pub use self::message::{parse, parse_with, IrcMessage, IrcMessageRef, Parser};
pub use self::prefix::PrefixRef;
pub use self::tags::{
    Badge, BadgesTag, GenericTag, IntegerTag, MessageTag, RawTag, TagFactory, TimestampTag,
};
