//! Filling a [`PropertyRegistry`] from the character database.
//!
//! [`RegistryLoader`] drives a [`RecordParser`] over the document and
//! classifies every property child into a standard:
//!
//! | element                  | standard          | value                         |
//! |--------------------------|-------------------|-------------------------------|
//! | `latex`, `afii`, ...     | same as the tag   | trimmed element text          |
//! | `surrogate`, `bmp`       | same as the tag   | `ref` attribute, else text    |
//! | `entity set=S id=N`      | `entity.<S>`      | `N`, with `S` de-aliased      |
//! | `font name=F pos=P`      | `font`            | [`Value::Font`]               |
//! | attributes `mode`/`type` | `mode` / `type`   | attribute value               |
//!
//! Anything else is an unexpected property. Record-level problems never fail
//! the load; they are logged and tallied in [`LoadSummary`].
//!
//! ```rust
//! use strfchr::{LoadOptions, RegistryLoader};
//!
//! let xml = r#"<charlist>
//!   <character id="U02022" dec="8226">
//!     <entity id="bull" set="8879-isopub"/>
//!     <font name="hlcra" pos="1"/>
//!   </character>
//! </charlist>"#;
//!
//! let loaded = RegistryLoader::new(LoadOptions::default()).load_str(xml).unwrap();
//! assert_eq!(loaded.registry.get(0x2022, "entity.isopub").unwrap().as_str(), Some("bull"));
//! assert!(loaded.summary.is_conserved());
//! ```

use crate::source::{RawChild, RawRecord, RecordParser};
use crate::standard::{known_info, ValueShape};
use crate::value::FONT_POSITION_LIMIT;
use crate::{Error, LoadOptions, PropertyRegistry, Result, StandardName, Value};
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Tallies for one load.
///
/// `loaded + combinations_skipped + invalid_skipped == total_seen` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// `character` elements encountered.
    pub total_seen: usize,
    /// Records created in the registry.
    pub loaded: usize,
    pub combinations_skipped: usize,
    pub invalid_skipped: usize,
    /// Properties refused because the standard was already set.
    pub duplicate_properties: usize,
    /// Property children dropped for a malformed value.
    pub rejected_fields: usize,
    /// Property children with an unknown tag.
    pub unexpected_properties: usize,
}

impl LoadSummary {
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        self.loaded + self.combinations_skipped + self.invalid_skipped == self.total_seen
    }
}

/// The result of a successful load.
#[derive(Clone, Debug)]
pub struct Loaded {
    pub registry: PropertyRegistry,
    pub summary: LoadSummary,
}

/// Loads the character database into a fresh registry.
#[derive(Clone, Debug, Default)]
pub struct RegistryLoader {
    options: LoadOptions,
}

impl RegistryLoader {
    #[must_use]
    pub fn new(options: LoadOptions) -> Self {
        RegistryLoader { options }
    }

    /// Loads from document text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Structural`] when the document itself is malformed.
    /// Nothing is returned in that case; a partial registry is discarded.
    pub fn load_str(&self, input: &str) -> Result<Loaded> {
        let mut parser = RecordParser::new(input);
        let mut registry = PropertyRegistry::new();
        let mut summary = LoadSummary::default();
        let mut duplicate_records = 0;

        for record in parser.by_ref() {
            let record = record?;
            if !registry.create(record.code_point) {
                duplicate_records += 1;
                warn!(
                    identifier = %record.identifier,
                    line = record.line,
                    "character already defined, skipping the repeat"
                );
                continue;
            }
            self.fill(&mut registry, &record, &mut summary);
        }

        let stats = parser.stats();
        summary.total_seen = stats.seen;
        summary.loaded = registry.size();
        summary.combinations_skipped = stats.combinations;
        summary.invalid_skipped = stats.invalid + duplicate_records;
        summary.duplicate_properties = registry.duplicates_rejected();

        info!(
            total_seen = summary.total_seen,
            loaded = summary.loaded,
            combinations_skipped = summary.combinations_skipped,
            invalid_skipped = summary.invalid_skipped,
            duplicate_properties = summary.duplicate_properties,
            rejected_fields = summary.rejected_fields,
            unexpected_properties = summary.unexpected_properties,
            "character database loaded"
        );
        Ok(Loaded { registry, summary })
    }

    /// Reads everything from `reader`, then loads it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails, otherwise as [`Self::load_str`].
    pub fn load_reader<R: Read>(&self, mut reader: R) -> Result<Loaded> {
        let mut input = String::new();
        reader
            .read_to_string(&mut input)
            .map_err(|e| Error::io(&e.to_string()))?;
        self.load_str(&input)
    }

    /// Loads the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] (naming the path) if the file cannot be read.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Loaded> {
        let path = path.as_ref();
        let input = fs::read_to_string(path)
            .map_err(|e| Error::io(&format!("{}: {}", path.display(), e)))?;
        self.load_str(&input)
    }

    fn fill(&self, registry: &mut PropertyRegistry, record: &RawRecord, summary: &mut LoadSummary) {
        let cp = record.code_point;
        for attribute in ["mode", "type"] {
            if let Some(value) = record.attribute(attribute) {
                registry.put(cp, attribute, Value::from(value));
            }
        }
        for child in &record.children {
            match self.classify(child) {
                Field::Keep(name, value) => {
                    registry.put(cp, name, value);
                }
                Field::Rejected(reason) => {
                    summary.rejected_fields += 1;
                    warn!(
                        identifier = %record.identifier,
                        line = child.line,
                        standard = %child.name,
                        reason,
                        "dropping malformed property"
                    );
                }
                Field::Unexpected => {
                    summary.unexpected_properties += 1;
                    warn!(
                        identifier = %record.identifier,
                        line = child.line,
                        element = %child.name,
                        "unexpected property"
                    );
                }
            }
        }
    }

    fn classify(&self, child: &RawChild) -> Field {
        if child.name == "entity" {
            return self.entity_field(child);
        }
        let Some(info) = known_info(&child.name) else {
            return Field::Unexpected;
        };
        match info.shape {
            ValueShape::Text => self.text_field(&child.name, &child.text),
            ValueShape::AttributeRef(attribute) => match child.attribute(attribute) {
                Some(reference) if !reference.trim().is_empty() => {
                    Field::Keep(StandardName::new(child.name.as_str()), Value::from(reference.trim()))
                }
                _ => self.text_field(&child.name, &child.text),
            },
            ValueShape::FontPosition => font_field(child),
            // mode and type are attributes of <character>, not children
            ValueShape::CharacterAttribute | ValueShape::EntityName => Field::Unexpected,
        }
    }

    fn text_field(&self, name: &str, text: &str) -> Field {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Field::Rejected("empty value");
        }
        let value = if self.options.trim_values { trimmed } else { text };
        Field::Keep(StandardName::new(name), Value::from(value))
    }

    fn entity_field(&self, child: &RawChild) -> Field {
        let set = child.attribute("set").map(str::trim).unwrap_or_default();
        let id = child.attribute("id").map(str::trim).unwrap_or_default();
        if set.is_empty() {
            return Field::Rejected("entity without a set attribute");
        }
        if id.is_empty() {
            return Field::Rejected("entity without an id attribute");
        }
        let canonical = self.options.aliases.canonical(set);
        Field::Keep(StandardName::entity(canonical), Value::from(id))
    }
}

enum Field {
    Keep(StandardName, Value),
    Rejected(&'static str),
    Unexpected,
}

fn font_field(child: &RawChild) -> Field {
    let Some(name) = child.attribute("name").map(str::trim).filter(|n| !n.is_empty()) else {
        return Field::Rejected("font without a name attribute");
    };
    let Some(position) = child.attribute("pos").and_then(|p| p.trim().parse::<u32>().ok()) else {
        return Field::Rejected("font position is not a decimal integer");
    };
    if position >= FONT_POSITION_LIMIT {
        return Field::Rejected("font position out of range");
    }
    Field::Keep(StandardName::new("font"), Value::font(name, position))
}
