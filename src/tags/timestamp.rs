use chrono::{DateTime, TimeZone, Utc};

/// A tag holding milliseconds since the Unix epoch, such as Twitch's
/// `tmi-sent-ts`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "super::TagFields")
)]
pub struct TimestampTag {
    name: String,
    value: String,
    parsed: Option<DateTime<Utc>>,
}

impl TimestampTag {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
            parsed: parse_millis(name, value),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The decoded instant, if the raw value was an in-range millisecond count.
    pub fn parsed(&self) -> Option<DateTime<Utc>> {
        self.parsed
    }
}

#[cfg(feature = "serde")]
impl From<super::TagFields> for TimestampTag {
    fn from(fields: super::TagFields) -> Self {
        Self::new(&fields.name, &fields.value)
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn parse_millis(name: &str, value: &str) -> Option<DateTime<Utc>> {
    let parsed = value
        .parse::<i64>()
        .ok()
        .and_then(|millis| Utc.timestamp_millis_opt(millis).single());

    #[cfg(feature = "tracing")]
    if parsed.is_none() {
        tracing::trace!(tag = name, value, "timestamp tag value did not parse");
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_tmi_sent_ts() {
        let tag = TimestampTag::new("tmi-sent-ts", "1507246572675");
        let expected = Utc.timestamp_millis_opt(1_507_246_572_675).unwrap();
        assert_eq!(tag.parsed(), Some(expected));
        assert_eq!(tag.value(), "1507246572675");
    }

    #[test]
    fn test_invalid_timestamp_keeps_raw() {
        let tag = TimestampTag::new("tmi-sent-ts", "yesterday");
        assert_eq!(tag.parsed(), None);
        assert_eq!(tag.value(), "yesterday");
    }

    #[test]
    fn test_out_of_range_timestamp() {
        let tag = TimestampTag::new("tmi-sent-ts", &i64::MAX.to_string());
        assert_eq!(tag.parsed(), None);
    }
}
