use std::fmt;

/// One `key/version` entry of a badge list, e.g. `subscriber/12`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Badge {
    key: String,
    version: String,
}

impl Badge {
    pub fn new(key: &str, version: &str) -> Self {
        Self {
            key: key.to_owned(),
            version: version.to_owned(),
        }
    }

    /// Split a segment at its first `/`. A segment without `/` is all key.
    fn from_segment(segment: &str) -> Self {
        let (key, version) = segment.split_once('/').unwrap_or((segment, ""));
        Self::new(key, version)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.key, self.version)
    }
}

/// A comma-separated badge list such as `broadcaster/1,subscriber/12`.
///
/// There is exactly one [`Badge`] per comma-delimited segment, including
/// empty and malformed segments, so an empty value yields a single empty
/// badge.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "super::TagFields")
)]
pub struct BadgesTag {
    name: String,
    value: String,
    badges: Vec<Badge>,
}

impl BadgesTag {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
            badges: value.split(',').map(Badge::from_segment).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Badges in wire order.
    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    /// First badge with the given key.
    pub fn get(&self, key: &str) -> Option<&Badge> {
        self.badges.iter().find(|badge| badge.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Badge> {
        self.badges.iter()
    }
}

impl<'a> IntoIterator for &'a BadgesTag {
    type Item = &'a Badge;
    type IntoIter = std::slice::Iter<'a, Badge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl From<super::TagFields> for BadgesTag {
    fn from(fields: super::TagFields) -> Self {
        Self::new(&fields.name, &fields.value)
    }
}
