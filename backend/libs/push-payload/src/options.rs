use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::PayloadError;

/// Caller-supplied notification options
///
/// A bag of optional, provider-specific fields keyed by name. Each entry is a
/// `serde_json::Value`, so callers can match on string / number / bool /
/// object / array when building requests. No key is required and no key is
/// rejected; composers decide per provider which keys they consume and which
/// they pass through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationOptions(Map<String, Value>);

impl NotificationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, replacing any previous entry under the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Insert any serializable value
    ///
    /// Fails with [`PayloadError::Serialization`] when the value has no JSON
    /// representation, e.g. a map keyed by tuples.
    pub fn insert_serialize<T>(&mut self, key: impl Into<String>, value: &T) -> Result<(), PayloadError>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value)?;
        self.0.insert(key.into(), value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for NotificationOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for NotificationOptions {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a NotificationOptions {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_builder_overwrites_same_key() {
        let opts = NotificationOptions::new()
            .with("badge", 1)
            .with("badge", 7);

        assert_eq!(opts.len(), 1);
        assert_eq!(opts.get("badge"), Some(&json!(7)));
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let opts: NotificationOptions =
            serde_json::from_value(json!({"sound": "chime", "badge": 3})).unwrap();

        assert!(opts.contains_key("sound"));
        assert_eq!(opts.get("badge"), Some(&json!(3)));
    }

    #[test]
    fn test_insert_serialize_nested() {
        let mut extra = HashMap::new();
        extra.insert("thread", "general");

        let mut opts = NotificationOptions::new();
        opts.insert_serialize("extra", &extra).unwrap();

        assert_eq!(opts.get("extra"), Some(&json!({"thread": "general"})));
    }

    #[test]
    fn test_insert_serialize_rejects_non_string_keys() {
        let mut bad = HashMap::new();
        bad.insert((1, 2), "point");

        let mut opts = NotificationOptions::new();
        let err = opts.insert_serialize("bad", &bad).unwrap_err();

        assert!(matches!(err, PayloadError::Serialization(_)));
        assert!(opts.is_empty());
    }
}
