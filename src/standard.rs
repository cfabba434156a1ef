//! Standard names and their metadata.
//!
//! A *standard* is one external naming system for characters: a LaTeX macro
//! set, an SGML/XML entity set, a font position table, a publisher's symbol
//! list. The set of standards is open. Besides the fixed tags known to the
//! loader, every entity set found in the source becomes its own standard,
//! named `entity.<set>`.
//!
//! ```rust
//! use strfchr::{StandardKind, StandardName};
//!
//! let latex = StandardName::new("latex");
//! assert_eq!(latex.info().kind, StandardKind::Representation);
//!
//! let html = StandardName::entity("html4-symbol");
//! assert_eq!(html.as_str(), "entity.html4-symbol");
//! assert_eq!(html.entity_set(), Some("html4-symbol"));
//! ```

use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

/// Prefix of every entity-set standard name.
pub const ENTITY_PREFIX: &str = "entity.";

/// Whether a standard is a way of *writing* a character or a fact *about* it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StandardKind {
    Representation,
    Property,
}

impl StandardKind {
    /// One-letter tag used in the `--help-codes` table.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            StandardKind::Representation => "F",
            StandardKind::Property => "P",
        }
    }
}

/// The shape a standard's value takes in the source document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueShape {
    /// Element text, e.g. `<latex>\textbullet</latex>`.
    Text,
    /// An attribute, falling back to element text, e.g. `<bmp ref="U1D400"/>`.
    AttributeRef(&'static str),
    /// `<entity set="..." id="..."/>`.
    EntityName,
    /// `<font name="..." pos="..."/>`.
    FontPosition,
    /// An attribute of the `character` element itself.
    CharacterAttribute,
}

/// Metadata declared for a standard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StandardInfo {
    pub kind: StandardKind,
    /// Can the value be derived from the code point alone?
    pub computable: bool,
    pub shape: ValueShape,
}

impl StandardInfo {
    const fn lookup(kind: StandardKind, shape: ValueShape) -> Self {
        StandardInfo {
            kind,
            computable: false,
            shape,
        }
    }
}

use StandardKind::{Property as P, Representation as R};
use ValueShape::{AttributeRef, CharacterAttribute, FontPosition, Text};

/// Tags the loader understands, with their metadata.
pub const KNOWN_STANDARDS: &[(&str, StandardInfo)] = &[
    ("afii", StandardInfo::lookup(R, Text)),
    ("latex", StandardInfo::lookup(R, Text)),
    ("mathlatex", StandardInfo::lookup(R, Text)),
    ("varlatex", StandardInfo::lookup(R, Text)),
    ("AMS", StandardInfo::lookup(R, Text)),
    ("ACS", StandardInfo::lookup(R, Text)),
    ("AIP", StandardInfo::lookup(R, Text)),
    ("APS", StandardInfo::lookup(R, Text)),
    ("IEEE", StandardInfo::lookup(R, Text)),
    ("Springer", StandardInfo::lookup(R, Text)),
    ("Wolfram", StandardInfo::lookup(R, Text)),
    ("Elsevier", StandardInfo::lookup(R, Text)),
    ("elsrender", StandardInfo::lookup(R, Text)),
    ("mathvariant", StandardInfo::lookup(R, Text)),
    ("surrogate", StandardInfo::lookup(R, AttributeRef("ref"))),
    ("bmp", StandardInfo::lookup(R, AttributeRef("ref"))),
    ("description", StandardInfo::lookup(P, Text)),
    ("comment", StandardInfo::lookup(P, Text)),
    ("font", StandardInfo::lookup(P, FontPosition)),
    ("mode", StandardInfo::lookup(P, CharacterAttribute)),
    ("type", StandardInfo::lookup(P, CharacterAttribute)),
];

const ENTITY_INFO: StandardInfo = StandardInfo::lookup(R, ValueShape::EntityName);
const DEFAULT_INFO: StandardInfo = StandardInfo::lookup(R, Text);

/// Looks up the metadata of a fixed tag. Entity sets are not in this table.
#[must_use]
pub fn known_info(name: &str) -> Option<StandardInfo> {
    KNOWN_STANDARDS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, info)| *info)
}

/// The name of a standard, such as `latex` or `entity.html4-symbol`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardName(String);

impl StandardName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        StandardName(name.into())
    }

    /// The standard for one entity set: `entity.<set>`.
    #[must_use]
    pub fn entity(set: &str) -> Self {
        StandardName(format!("{}{}", ENTITY_PREFIX, set))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The entity-set part of an `entity.<set>` name.
    #[must_use]
    pub fn entity_set(&self) -> Option<&str> {
        self.0
            .strip_prefix(ENTITY_PREFIX)
            .filter(|set| !set.is_empty())
    }

    /// Declared metadata. Names outside the fixed table and the entity sets
    /// get lookup-only text metadata.
    #[must_use]
    pub fn info(&self) -> StandardInfo {
        if self.entity_set().is_some() {
            return ENTITY_INFO;
        }
        known_info(&self.0).unwrap_or(DEFAULT_INFO)
    }

    /// `true` for fixed tags and entity-set names.
    #[must_use]
    pub fn is_declared(&self) -> bool {
        self.entity_set().is_some() || known_info(&self.0).is_some()
    }
}

impl fmt::Display for StandardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StandardName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StandardName {
    fn from(value: &str) -> Self {
        StandardName::new(value)
    }
}

impl From<String> for StandardName {
    fn from(value: String) -> Self {
        StandardName(value)
    }
}

impl Serialize for StandardName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// Entity sets published under more than one name.
///
/// ISO 8879 sets were reissued as ISO 9573-13; both spellings appear in the
/// source and describe the same set. Each pair is `(alias, canonical)`.
pub const ENTITY_SET_ALIASES: &[(&str, &str)] = &[
    ("html-symbol", "html4-symbol"),
    ("html-lat1", "html4-lat1"),
    ("html-special", "html4-special"),
    ("8879-isoamsa", "isoamsa"),
    ("9573-13-isoamsa", "isoamsa"),
    ("8879-isoamsb", "isoamsb"),
    ("9573-13-isoamsb", "isoamsb"),
    ("8879-isoamsc", "isoamsc"),
    ("9573-13-isoamsc", "isoamsc"),
    ("8879-isoamsn", "isoamsn"),
    ("9573-13-isoamsn", "isoamsn"),
    ("8879-isoamso", "isoamso"),
    ("9573-13-isoamso", "isoamso"),
    ("8879-isoamsr", "isoamsr"),
    ("9573-13-isoamsr", "isoamsr"),
    ("8879-isobox", "isobox"),
    ("8879-isocyr1", "isocyr1"),
    ("8879-isocyr2", "isocyr2"),
    ("8879-isodia", "isodia"),
    ("8879-isogrk1", "isogrk1"),
    ("8879-isogrk2", "isogrk2"),
    ("8879-isogrk3", "isogrk3"),
    ("9573-13-isogrk3", "isogrk3"),
    ("8879-isogrk4", "isogrk4"),
    ("9573-13-isogrk4", "isogrk4"),
    ("8879-isolat1", "isolat1"),
    ("8879-isolat2", "isolat2"),
    ("9573-13-isomfrk", "isomfrk"),
    ("9573-13-isomopf", "isomopf"),
    ("9573-13-isomscr", "isomscr"),
    ("8879-isonum", "isonum"),
    ("8879-isopub", "isopub"),
    ("8879-isotech", "isotech"),
    ("9573-13-isotech", "isotech"),
];

/// Alias table for entity-set names, built once per load.
///
/// ```rust
/// use strfchr::EntityAliases;
///
/// let aliases = EntityAliases::new();
/// assert_eq!(aliases.canonical("8879-isopub"), "isopub");
/// assert_eq!(aliases.canonical("html4-symbol"), "html4-symbol");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EntityAliases {
    table: HashMap<String, String>,
}

impl EntityAliases {
    /// The built-in table from [`ENTITY_SET_ALIASES`].
    #[must_use]
    pub fn new() -> Self {
        EntityAliases {
            table: ENTITY_SET_ALIASES
                .iter()
                .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
                .collect(),
        }
    }

    /// A table with no aliases at all.
    #[must_use]
    pub fn empty() -> Self {
        EntityAliases {
            table: HashMap::new(),
        }
    }

    /// Adds or replaces one alias.
    pub fn insert(&mut self, alias: impl Into<String>, canonical: impl Into<String>) {
        self.table.insert(alias.into(), canonical.into());
    }

    /// The canonical set name for `set`, or `set` itself when it has no alias.
    #[must_use]
    pub fn canonical<'a>(&'a self, set: &'a str) -> &'a str {
        self.table.get(set).map(String::as_str).unwrap_or(set)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for EntityAliases {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_table_has_unique_names() {
        let names: HashSet<_> = KNOWN_STANDARDS.iter().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), KNOWN_STANDARDS.len());
    }

    #[test]
    fn test_info_for_fixed_and_entity_names() {
        assert_eq!(StandardName::new("font").info().shape, ValueShape::FontPosition);
        assert_eq!(
            StandardName::new("description").info().kind,
            StandardKind::Property
        );
        assert_eq!(
            StandardName::entity("isopub").info().shape,
            ValueShape::EntityName
        );
        assert!(!StandardName::new("latex").info().computable);
    }

    #[test]
    fn test_undeclared_names() {
        let name = StandardName::new("Klingon");
        assert!(!name.is_declared());
        assert_eq!(name.info().shape, ValueShape::Text);
        assert_eq!(StandardName::new("entity.").entity_set(), None);
    }

    #[test]
    fn test_aliases_point_at_canonical_names() {
        let aliases = EntityAliases::new();
        for (alias, canonical) in ENTITY_SET_ALIASES {
            assert_eq!(aliases.canonical(alias), *canonical);
            // canonical names are never themselves aliases
            assert_eq!(aliases.canonical(canonical), *canonical);
        }
    }

    #[test]
    fn test_custom_alias() {
        let mut aliases = EntityAliases::empty();
        assert_eq!(aliases.canonical("8879-isopub"), "8879-isopub");
        aliases.insert("mmlalias", "mathml");
        assert_eq!(aliases.canonical("mmlalias"), "mathml");
        assert_eq!(aliases.len(), 1);
    }

    #[test]
    fn test_borrow_lookup() {
        let mut map = HashMap::new();
        map.insert(StandardName::new("latex"), 1);
        assert_eq!(map.get("latex"), Some(&1));
    }
}
