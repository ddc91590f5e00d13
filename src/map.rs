//! Property containers and the typed values they hold.
//!
//! The engine attaches a string-keyed map of metadata to every frame. This
//! module models that map and the closed set of value types it can store,
//! plus the extraction trait the accessors use to type-check entries.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single property value as stored by the engine's per-frame map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PropValue {
    Int(i64),
    Float(f64),
    Str(String),
    Data(Vec<u8>),
    IntArray(Vec<i64>),
    FloatArray(Vec<f64>),
}

impl PropValue {
    /// Short type name used in mismatch diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            PropValue::Int(_) => "int",
            PropValue::Float(_) => "float",
            PropValue::Str(_) => "str",
            PropValue::Data(_) => "data",
            PropValue::IntArray(_) => "int[]",
            PropValue::FloatArray(_) => "float[]",
        }
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Int(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Float(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<Vec<u8>> for PropValue {
    fn from(value: Vec<u8>) -> Self {
        PropValue::Data(value)
    }
}

impl From<Vec<i64>> for PropValue {
    fn from(value: Vec<i64>) -> Self {
        PropValue::IntArray(value)
    }
}

impl From<Vec<f64>> for PropValue {
    fn from(value: Vec<f64>) -> Self {
        PropValue::FloatArray(value)
    }
}

/// Expected-type extraction used by the property accessors.
///
/// Implementations are strict: an `Int` entry never satisfies `f64`, a `Str`
/// never satisfies `Vec<u8>`. `TYPE_NAME` matches [`PropValue::type_name`]
/// so mismatch messages read consistently.
pub trait FromPropValue: Sized {
    /// Name reported as the expected type in mismatch diagnostics.
    const TYPE_NAME: &'static str;

    /// Extracts `Self` from `value`, or `None` on a type mismatch.
    fn from_prop(value: &PropValue) -> Option<Self>;
}

impl FromPropValue for i64 {
    const TYPE_NAME: &'static str = "int";

    fn from_prop(value: &PropValue) -> Option<Self> {
        match value {
            PropValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromPropValue for f64 {
    const TYPE_NAME: &'static str = "float";

    fn from_prop(value: &PropValue) -> Option<Self> {
        match value {
            PropValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromPropValue for String {
    const TYPE_NAME: &'static str = "str";

    fn from_prop(value: &PropValue) -> Option<Self> {
        match value {
            PropValue::Str(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FromPropValue for Vec<u8> {
    const TYPE_NAME: &'static str = "data";

    fn from_prop(value: &PropValue) -> Option<Self> {
        match value {
            PropValue::Data(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FromPropValue for Vec<i64> {
    const TYPE_NAME: &'static str = "int[]";

    fn from_prop(value: &PropValue) -> Option<Self> {
        match value {
            PropValue::IntArray(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FromPropValue for Vec<f64> {
    const TYPE_NAME: &'static str = "float[]";

    fn from_prop(value: &PropValue) -> Option<Self> {
        match value {
            PropValue::FloatArray(v) => Some(v.clone()),
            _ => None,
        }
    }
}

/// String-keyed property container attached to a frame.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropMap {
    entries: HashMap<String, PropValue>,
}

impl PropMap {
    /// An empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes the entry for `key`, returning it if present.
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Overwrites this container key-by-key with `other`'s entries.
    ///
    /// Keys present in both take `other`'s value; keys only in `other` are
    /// added. This is the last-write-wins step of a property merge.
    pub fn update(&mut self, other: &PropMap) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for PropMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut props = PropMap::new();
        assert!(props.is_empty());

        props.insert("_Matrix", 1i64);
        props.insert("_AbsoluteTime", 0.04f64);
        props.insert("_PictType", "I");

        assert_eq!(props.len(), 3);
        assert_eq!(props.get("_Matrix"), Some(&PropValue::Int(1)));
        assert_eq!(props.get("_PictType"), Some(&PropValue::Str("I".into())));
        assert_eq!(props.get("_Missing"), None);
        assert!(props.contains_key("_AbsoluteTime"));
    }

    #[test]
    fn test_insert_replaces_existing_entries() {
        let mut props = PropMap::new();
        props.insert("_Matrix", 1i64);
        props.insert("_Matrix", 6i64);

        assert_eq!(props.len(), 1);
        assert_eq!(props.get("_Matrix"), Some(&PropValue::Int(6)));
    }

    #[test]
    fn test_update_is_last_write_wins() {
        let mut main: PropMap = [("kept", 1i64), ("shared", 1i64)].into_iter().collect();
        let other: PropMap = [("shared", 2i64), ("added", 3i64)].into_iter().collect();

        main.update(&other);

        assert_eq!(main.len(), 3);
        assert_eq!(main.get("kept"), Some(&PropValue::Int(1)));
        assert_eq!(main.get("shared"), Some(&PropValue::Int(2)));
        assert_eq!(main.get("added"), Some(&PropValue::Int(3)));
    }

    #[test]
    fn test_extraction_is_strict() {
        assert_eq!(i64::from_prop(&PropValue::Int(5)), Some(5));
        assert_eq!(i64::from_prop(&PropValue::Float(5.0)), None);
        assert_eq!(f64::from_prop(&PropValue::Int(5)), None);
        assert_eq!(String::from_prop(&PropValue::Data(b"x".to_vec())), None);
        assert_eq!(
            <Vec<i64>>::from_prop(&PropValue::IntArray(vec![1, 2])),
            Some(vec![1, 2])
        );
        assert_eq!(<Vec<i64>>::from_prop(&PropValue::Int(1)), None);
    }

    #[test]
    fn test_type_names_match_extraction_names() {
        assert_eq!(PropValue::Int(0).type_name(), i64::TYPE_NAME);
        assert_eq!(PropValue::Float(0.0).type_name(), f64::TYPE_NAME);
        assert_eq!(PropValue::Str(String::new()).type_name(), String::TYPE_NAME);
        assert_eq!(PropValue::Data(Vec::new()).type_name(), <Vec<u8>>::TYPE_NAME);
        assert_eq!(
            PropValue::IntArray(Vec::new()).type_name(),
            <Vec<i64>>::TYPE_NAME
        );
        assert_eq!(
            PropValue::FloatArray(Vec::new()).type_name(),
            <Vec<f64>>::TYPE_NAME
        );
    }
}
