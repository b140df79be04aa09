//! IRCv3 message tags.
//!
//! Tags travel through two representations. [`RawTag`] is a borrowed
//! `name`/`value` pair produced by [`tokenize`] straight out of the input
//! line. [`MessageTag`] is the owned, typed form built by a [`TagFactory`],
//! which picks the variant from the tag name.

mod badges;
mod escape;
mod factory;
mod generic;
mod integer;
pub mod names;
mod timestamp;
mod tokenizer;

use std::borrow::Cow;

pub use self::badges::{Badge, BadgesTag};
pub use self::escape::unescape_tag_value;
pub use self::factory::{TagConstructor, TagFactory, TagFactoryBuilder};
pub use self::generic::GenericTag;
pub use self::integer::IntegerTag;
pub use self::timestamp::TimestampTag;
pub use self::tokenizer::{tokenize, RawTag};

/// A typed message tag.
///
/// Every variant keeps the tag's name and its raw wire value. Typed
/// variants additionally carry the decoded form, computed once when the tag
/// is constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
#[non_exhaustive]
pub enum MessageTag {
    /// Any tag without a registered type.
    Generic(GenericTag),
    /// A tag whose value is a base-10 integer, e.g. `bits`.
    Integer(IntegerTag),
    /// A comma-separated `key/version` list, e.g. `badges`.
    Badges(BadgesTag),
    /// Milliseconds since the Unix epoch, e.g. `tmi-sent-ts`.
    Timestamp(TimestampTag),
}

impl MessageTag {
    /// Build a [`MessageTag::Generic`].
    pub fn generic(name: &str, value: &str) -> Self {
        Self::Generic(GenericTag::new(name, value))
    }

    /// Build a [`MessageTag::Integer`].
    pub fn integer(name: &str, value: &str) -> Self {
        Self::Integer(IntegerTag::new(name, value))
    }

    /// Build a [`MessageTag::Badges`].
    pub fn badges(name: &str, value: &str) -> Self {
        Self::Badges(BadgesTag::new(name, value))
    }

    /// Build a [`MessageTag::Timestamp`].
    pub fn timestamp(name: &str, value: &str) -> Self {
        Self::Timestamp(TimestampTag::new(name, value))
    }

    /// The tag name, exactly as it appeared before `=`.
    pub fn name(&self) -> &str {
        match self {
            Self::Generic(tag) => tag.name(),
            Self::Integer(tag) => tag.name(),
            Self::Badges(tag) => tag.name(),
            Self::Timestamp(tag) => tag.name(),
        }
    }

    /// The raw tag value, still IRCv3-escaped. Empty for flag tags.
    pub fn value(&self) -> &str {
        match self {
            Self::Generic(tag) => tag.value(),
            Self::Integer(tag) => tag.value(),
            Self::Badges(tag) => tag.value(),
            Self::Timestamp(tag) => tag.value(),
        }
    }

    /// The tag value with IRCv3 escapes decoded.
    ///
    /// Borrows when the value contains no backslash.
    pub fn unescaped_value(&self) -> Cow<'_, str> {
        unescape_tag_value(self.value())
    }

    pub fn as_generic(&self) -> Option<&GenericTag> {
        match self {
            Self::Generic(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&IntegerTag> {
        match self {
            Self::Integer(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn as_badges(&self) -> Option<&BadgesTag> {
        match self {
            Self::Badges(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&TimestampTag> {
        match self {
            Self::Timestamp(tag) => Some(tag),
            _ => None,
        }
    }
}

/// Wire fields shared by every tag type.
///
/// Typed tags deserialize through this so their decoded state is always
/// recomputed from the raw value.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TagFields {
    name: String,
    value: String,
}
