//! Ordered property bag for a single character.
//!
//! [`PropertyMap`] wraps an [`IndexMap`] keyed by [`StandardName`] so that
//! listing a record's properties follows source order. Nothing in rendering
//! or mapping depends on that order; it only keeps dumps and test output
//! deterministic.
//!
//! Unlike a plain map, [`PropertyMap::insert`] never overwrites: the first
//! value stored for a standard is the one that stays.
//!
//! ## Examples
//!
//! ```rust
//! use strfchr::{PropertyMap, StandardName, Value};
//!
//! let mut map = PropertyMap::new();
//! assert!(map.insert(StandardName::new("latex"), Value::from("\\textbullet")));
//! assert!(!map.insert(StandardName::new("latex"), Value::from("\\bullet")));
//!
//! assert_eq!(map.get("latex").and_then(|v| v.as_str()), Some("\\textbullet"));
//! ```

use crate::{StandardName, Value};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Standard name to value, in insertion order, first value wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyMap(IndexMap<StandardName, Value>);

impl PropertyMap {
    /// Creates an empty `PropertyMap`.
    #[must_use]
    pub fn new() -> Self {
        PropertyMap(IndexMap::new())
    }

    /// Stores `value` under `name` unless the name is already present.
    ///
    /// Returns `false` (and leaves the stored value alone) for a duplicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strfchr::{PropertyMap, StandardName, Value};
    ///
    /// let mut map = PropertyMap::new();
    /// map.insert(StandardName::entity("isopub"), Value::from("bull"));
    /// map.insert(StandardName::entity("isopub"), Value::from("bullet"));
    /// assert_eq!(map.get("entity.isopub"), Some(&Value::from("bull")));
    /// ```
    pub fn insert(&mut self, name: StandardName, value: Value) -> bool {
        match self.0.entry(name) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Standard names in insertion order.
    pub fn names(&self) -> indexmap::map::Keys<'_, StandardName, Value> {
        self.0.keys()
    }

    /// Name/value pairs in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, StandardName, Value> {
        self.0.iter()
    }
}

impl Serialize for PropertyMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter())
    }
}

impl IntoIterator for PropertyMap {
    type Item = (StandardName, Value);
    type IntoIter = indexmap::map::IntoIter<StandardName, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a StandardName, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, StandardName, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(StandardName, Value)> for PropertyMap {
    /// Collects pairs, keeping the first value for each repeated name.
    fn from_iter<T: IntoIterator<Item = (StandardName, Value)>>(iter: T) -> Self {
        let mut map = PropertyMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins() {
        let map: PropertyMap = vec![
            (StandardName::new("latex"), Value::from("\\a")),
            (StandardName::new("afii"), Value::from("EB6E")),
            (StandardName::new("latex"), Value::from("\\b")),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("latex"), Some(&Value::from("\\a")));
    }

    #[test]
    fn test_insertion_order() {
        let mut map = PropertyMap::new();
        map.insert(StandardName::new("mode"), Value::from("math"));
        map.insert(StandardName::new("description"), Value::from("BULLET"));
        let names: Vec<_> = map.names().map(StandardName::as_str).collect();
        assert_eq!(names, vec!["mode", "description"]);
    }

    #[test]
    fn test_serialize_as_object() {
        let mut map = PropertyMap::new();
        map.insert(StandardName::new("afii"), Value::from("EB6E"));
        map.insert(StandardName::new("font"), Value::font("hlcra", 1));
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"{"afii":"EB6E","font":{"name":"hlcra","position":1}}"#
        );
    }
}
