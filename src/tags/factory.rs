//! Name-based dispatch from raw tags to typed [`MessageTag`]s.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use super::names;
use super::{MessageTag, RawTag};

/// Builds a typed tag from its name and raw value.
pub type TagConstructor = fn(&str, &str) -> MessageTag;

/// A registration table mapping tag names to constructors.
///
/// Names without a registration go to the fallback constructor, which is
/// [`MessageTag::generic`] unless overridden. The table is immutable once
/// built and can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use tmi_parse::tags::{MessageTag, TagFactory};
///
/// let factory = TagFactory::builder()
///     .register("msg-param-viewerCount", MessageTag::integer)
///     .build();
///
/// let tag = factory.create("msg-param-viewerCount", "15");
/// assert_eq!(tag.as_integer().and_then(|t| t.parsed()), Some(15));
/// ```
#[derive(Clone)]
pub struct TagFactory {
    constructors: HashMap<Cow<'static, str>, TagConstructor>,
    fallback: TagConstructor,
}

impl TagFactory {
    /// A factory with no registrations; every tag becomes generic.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
            fallback: MessageTag::generic,
        }
    }

    /// The default table plus Twitch's documented numeric, badge and
    /// timestamp tags.
    pub fn twitch() -> Self {
        Self::builder()
            .register(names::BADGE_INFO, MessageTag::badges)
            .register(names::BAN_DURATION, MessageTag::integer)
            .register(names::CUMULATIVE_MONTHS, MessageTag::integer)
            .register(names::GIFT_MONTHS, MessageTag::integer)
            .register(names::MASS_GIFT_COUNT, MessageTag::integer)
            .register(names::MONTHS, MessageTag::integer)
            .register(names::STREAK_MONTHS, MessageTag::integer)
            .register(names::RAID_VIEWER_COUNT, MessageTag::integer)
            .register(names::TMI_SENT_TS, MessageTag::timestamp)
            .build()
    }

    /// Start from the default table.
    pub fn builder() -> TagFactoryBuilder {
        TagFactoryBuilder {
            factory: Self::default(),
        }
    }

    /// Process-wide default factory used by [`crate::parse`].
    pub(crate) fn shared() -> &'static TagFactory {
        static DEFAULT: OnceLock<TagFactory> = OnceLock::new();
        DEFAULT.get_or_init(TagFactory::default)
    }

    /// Register `constructor` for `name`, returning the one it replaced.
    pub fn register(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        constructor: TagConstructor,
    ) -> Option<TagConstructor> {
        self.constructors.insert(name.into(), constructor)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Build the typed tag for `name`.
    pub fn create(&self, name: &str, value: &str) -> MessageTag {
        let constructor = self
            .constructors
            .get(name)
            .copied()
            .unwrap_or(self.fallback);
        constructor(name, value)
    }

    /// Build typed tags for a tokenized tags section, preserving order.
    pub fn create_all(&self, raw: &[RawTag<'_>]) -> Vec<MessageTag> {
        raw.iter().map(|tag| self.create(tag.name, tag.value)).collect()
    }
}

impl Default for TagFactory {
    /// `badges` → [`MessageTag::Badges`], `bits` → [`MessageTag::Integer`],
    /// everything else generic.
    fn default() -> Self {
        let mut factory = Self::empty();
        factory.register(names::BADGES, MessageTag::badges);
        factory.register(names::BITS, MessageTag::integer);
        factory
    }
}

impl fmt::Debug for TagFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut registered: Vec<&str> = self.constructors.keys().map(|k| k.as_ref()).collect();
        registered.sort_unstable();
        f.debug_struct("TagFactory")
            .field("registered", &registered)
            .finish_non_exhaustive()
    }
}

/// Fluent construction of a [`TagFactory`].
#[derive(Clone, Debug)]
pub struct TagFactoryBuilder {
    factory: TagFactory,
}

impl TagFactoryBuilder {
    pub fn register(
        mut self,
        name: impl Into<Cow<'static, str>>,
        constructor: TagConstructor,
    ) -> Self {
        self.factory.register(name, constructor);
        self
    }

    /// Constructor for names without a registration.
    pub fn fallback(mut self, constructor: TagConstructor) -> Self {
        self.factory.fallback = constructor;
        self
    }

    pub fn build(self) -> TagFactory {
        self.factory
    }
}
