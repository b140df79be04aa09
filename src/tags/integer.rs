/// A tag whose value should be a base-10 integer.
///
/// The raw value is always kept. [`parsed`](Self::parsed) is `None` when
/// the value is not a valid integer; a malformed value never fails the
/// surrounding message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "super::TagFields")
)]
pub struct IntegerTag {
    name: String,
    value: String,
    parsed: Option<i32>,
}

impl IntegerTag {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
            parsed: parse_integer(name, value),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The decoded integer, if the raw value was one.
    pub fn parsed(&self) -> Option<i32> {
        self.parsed
    }
}

#[cfg(feature = "serde")]
impl From<super::TagFields> for IntegerTag {
    fn from(fields: super::TagFields) -> Self {
        Self::new(&fields.name, &fields.value)
    }
}

/// Accepts an optional `+`/`-` sign followed by ASCII digits, within `i32`.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn parse_integer(name: &str, value: &str) -> Option<i32> {
    value
        .parse::<i32>()
        .map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::trace!(tag = name, value, error = %e, "integer tag value did not parse");
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_bits() {
        let tag = IntegerTag::new("bits", "100");
        assert_eq!(tag.name(), "bits");
        assert_eq!(tag.value(), "100");
        assert_eq!(tag.parsed(), Some(100));
    }

    #[test]
    fn test_signed_values() {
        assert_eq!(IntegerTag::new("n", "-42").parsed(), Some(-42));
        assert_eq!(IntegerTag::new("n", "+7").parsed(), Some(7));
    }

    #[test]
    fn test_unparsable_values_keep_raw() {
        for raw in ["abc", "", " 1", "1.5", "1e3", "0x10", "99999999999999999999"] {
            let tag = IntegerTag::new("bits", raw);
            assert_eq!(tag.value(), raw);
            assert_eq!(tag.parsed(), None, "{raw:?} should not parse");
        }
    }

    #[test]
    fn test_out_of_range_values() {
        assert_eq!(IntegerTag::new("bits", "2147483647").parsed(), Some(i32::MAX));
        assert_eq!(IntegerTag::new("bits", "-2147483648").parsed(), Some(i32::MIN));

        let tag = IntegerTag::new("bits", "3000000000");
        assert_eq!(tag.value(), "3000000000");
        assert_eq!(tag.parsed(), None);
    }
}
