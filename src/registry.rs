//! The per-code-point property registry.
//!
//! [`PropertyRegistry`] owns every [`CharacterRecord`] produced by a load.
//! Records live in a [`BTreeMap`] so iteration is always in ascending code
//! point order; each record's properties sit in a hash-indexed
//! [`PropertyMap`]. Once loading finishes the registry is only read.
//!
//! ```rust
//! use strfchr::{PropertyRegistry, Value};
//!
//! let mut registry = PropertyRegistry::new();
//! assert!(registry.put(0x2022, "latex", Value::from("\\textbullet")));
//! assert!(!registry.put(0x2022, "latex", Value::from("\\bullet")));
//!
//! assert_eq!(registry.get(0x2022, "latex").and_then(|v| v.as_str()), Some("\\textbullet"));
//! assert_eq!(registry.duplicates_rejected(), 1);
//! ```

use crate::{PropertyMap, StandardName, Value};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

/// Highest valid Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Everything known about one code point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CharacterRecord {
    pub code_point: u32,
    pub properties: PropertyMap,
}

impl CharacterRecord {
    #[must_use]
    pub fn new(code_point: u32) -> Self {
        CharacterRecord {
            code_point,
            properties: PropertyMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// The code point as a `char`, or `None` for surrogates.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.code_point)
    }
}

/// Code point to [`CharacterRecord`], iterated in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyRegistry {
    records: BTreeMap<u32, CharacterRecord>,
    duplicates: usize,
}

impl PropertyRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record. Returns `false` if `cp` already has one or is
    /// not a Unicode code point.
    pub fn create(&mut self, cp: u32) -> bool {
        if cp > MAX_CODE_POINT || self.records.contains_key(&cp) {
            return false;
        }
        self.records.insert(cp, CharacterRecord::new(cp));
        true
    }

    /// Sets one property, creating the record if needed.
    ///
    /// A property is set at most once: a second value for the same standard
    /// is rejected with a warning and the first value is kept.
    pub fn put(&mut self, cp: u32, name: impl Into<StandardName>, value: Value) -> bool {
        let name = name.into();
        if cp > MAX_CODE_POINT {
            warn!(code_point = cp, standard = %name, "refusing property for out-of-range code point");
            return false;
        }
        let record = self
            .records
            .entry(cp)
            .or_insert_with(|| CharacterRecord::new(cp));
        let shown = name.to_string();
        if record.properties.insert(name, value) {
            true
        } else {
            self.duplicates += 1;
            warn!(
                code_point = %format!("U+{:04X}", cp),
                standard = %shown,
                "duplicate property rejected, keeping the first value"
            );
            false
        }
    }

    #[must_use]
    pub fn get(&self, cp: u32, name: &str) -> Option<&Value> {
        self.records.get(&cp)?.get(name)
    }

    #[must_use]
    pub fn record(&self, cp: u32) -> Option<&CharacterRecord> {
        self.records.get(&cp)
    }

    /// All records in ascending code point order.
    pub fn all(&self) -> impl Iterator<Item = &CharacterRecord> + '_ {
        self.records.values()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn contains(&self, cp: u32) -> bool {
        self.records.contains_key(&cp)
    }

    /// Every standard that at least one record carries, sorted.
    #[must_use]
    pub fn standards(&self) -> BTreeSet<StandardName> {
        self.records
            .values()
            .flat_map(|record| record.properties.names().cloned())
            .collect()
    }

    #[must_use]
    pub fn has_standard(&self, name: &str) -> bool {
        self.records
            .values()
            .any(|record| record.properties.contains(name))
    }

    /// How many `put` calls were refused as duplicates.
    #[must_use]
    pub fn duplicates_rejected(&self) -> usize {
        self.duplicates
    }
}

impl FromIterator<CharacterRecord> for PropertyRegistry {
    /// Merges records into one registry through [`PropertyRegistry::put`].
    fn from_iter<T: IntoIterator<Item = CharacterRecord>>(iter: T) -> Self {
        let mut registry = PropertyRegistry::new();
        for record in iter {
            registry.create(record.code_point);
            for (name, value) in record.properties {
                registry.put(record.code_point, name, value);
            }
        }
        registry
    }
}
