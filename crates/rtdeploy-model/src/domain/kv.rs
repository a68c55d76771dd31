use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

/// Separator between key and value in a container environment entry.
const ENTRY_SEPARATOR: char = '=';

/// Single environment variable.
///
/// Both fields are plain UTF-8 strings with no validation applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct KeyValue {
    key: String,
    value: String,
}

impl KeyValue {
    /// Create a new key–value pair.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parse a `KEY=VALUE` container environment entry.
    ///
    /// Only the first `=` separates key from value, so values may contain `=` themselves.
    /// Returns `None` for entries without a separator or with an empty key.
    pub fn parse_entry(entry: &str) -> Option<Self> {
        let (key, value) = entry.split_once(ENTRY_SEPARATOR)?;
        if key.is_empty() {
            return None;
        }
        Some(Self::new(key, value))
    }

    /// Format as a `KEY=VALUE` container environment entry.
    pub fn to_entry(&self) -> String {
        format!("{}{ENTRY_SEPARATOR}{}", self.key, self.value)
    }

    /// Get the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Split into owned `(key, value)`.
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl From<(String, String)> for KeyValue {
    fn from((key, value): (String, String)) -> Self {
        Self { key, value }
    }
}

impl From<(&str, &str)> for KeyValue {
    fn from((key, value): (&str, &str)) -> Self {
        Self::new(key, value)
    }
}
