use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::KeyValue;

/// Environment variables of a runtime.
///
/// Stored as an ordered map so that encoding the same runtime twice yields the
/// same entry sequence. Serialized as a plain JSON object.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct Env(pub BTreeMap<String, String>);

impl Env {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert or overwrite a variable.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate over all variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as `KEY=VALUE` entries in key order.
    pub fn to_entries(&self) -> Vec<String> {
        self.iter()
            .map(|(k, v)| KeyValue::new(k, v).to_entry())
            .collect()
    }
}

impl FromIterator<KeyValue> for Env {
    /// Later pairs overwrite earlier pairs with the same key.
    fn from_iter<I: IntoIterator<Item = KeyValue>>(iter: I) -> Self {
        Self(iter.into_iter().map(KeyValue::into_parts).collect())
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Env;
    use crate::KeyValue;

    #[test]
    fn env_new_is_empty() {
        let env = Env::new();
        assert!(env.is_empty());
        assert_eq!(env.len(), 0);
        assert!(env.get("FOO").is_none());
    }

    #[test]
    fn insert_overwrites_existing_key() {
        let mut env = Env::new();
        env.insert("FOO", "one").insert("BAR", "x");
        env.insert("FOO", "two");

        assert_eq!(env.len(), 2);
        assert_eq!(env.get("FOO"), Some("two"));
        assert_eq!(env.get("BAR"), Some("x"));
    }

    #[test]
    fn to_entries_is_sorted_by_key() {
        let env: Env = [("ZED", "1"), ("ALPHA", "2"), ("MID", "a=b")]
            .into_iter()
            .collect();

        assert_eq!(env.to_entries(), vec!["ALPHA=2", "MID=a=b", "ZED=1"]);
    }

    #[test]
    fn collect_from_key_values_last_wins() {
        let env: Env = vec![
            KeyValue::new("FOO", "first"),
            KeyValue::new("BAR", "bar"),
            KeyValue::new("FOO", "second"),
        ]
        .into_iter()
        .collect();

        assert_eq!(env.get("FOO"), Some("second"));
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn serde_is_a_plain_object() {
        let env: Env = [("FOO", "bar")].into_iter().collect();
        let json = serde_json::to_string(&env).unwrap();
        assert_eq!(json, r#"{"FOO":"bar"}"#);

        let back: Env = serde_json::from_str(&json).unwrap();
        assert_eq!(back, env);
    }
}
