use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved property key. Configures the archive producer's gzip level and
/// is never emitted as a request header.
pub const COMPRESSION_LEVEL_KEY: &str = "compression_level";

/// A free-form metadata value attached to an uploaded image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Number(i64),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(s) => f.write_str(s),
            PropertyValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// Free-form key/value metadata attached to an uploaded image.
///
/// Ordered, so header emission is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageProperties(BTreeMap<String, PropertyValue>);

impl ImageProperties {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gzip level from the reserved key, if present and numeric.
    pub fn compression_level(&self) -> Option<u32> {
        match self.0.get(COMPRESSION_LEVEL_KEY)? {
            PropertyValue::Number(n) => u32::try_from(*n).ok(),
            PropertyValue::Text(s) => s.parse().ok(),
        }
    }

    /// Entries destined for request headers: everything except the
    /// reserved key.
    pub fn header_entries(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.0
            .iter()
            .filter(|(key, _)| key.as_str() != COMPRESSION_LEVEL_KEY)
            .map(|(key, value)| (key.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compression_level_is_reserved() {
        let props = ImageProperties::new()
            .with("os_type", "linux")
            .with(COMPRESSION_LEVEL_KEY, 9);

        assert_eq!(props.compression_level(), Some(9));
        let keys: Vec<_> = props.header_entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["os_type"]);
    }

    #[test]
    fn compression_level_parses_text_values() {
        let props = ImageProperties::new().with(COMPRESSION_LEVEL_KEY, "4");
        assert_eq!(props.compression_level(), Some(4));

        let props = ImageProperties::new().with(COMPRESSION_LEVEL_KEY, "fast");
        assert_eq!(props.compression_level(), None);
    }

    #[test]
    fn values_render_verbatim() {
        assert_eq!(PropertyValue::from("linux").to_string(), "linux");
        assert_eq!(PropertyValue::from(512).to_string(), "512");
    }
}
