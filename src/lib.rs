//! # strfchr
//!
//! Per-character templates over the W3C `unicode.xml` character database.
//!
//! ## What does it do?
//!
//! The W3C Math WG publishes one large XML file naming every character in
//! a couple of dozen external standards: SGML/XML entity sets, LaTeX macros,
//! AFII numbers, font positions, publishers' symbol lists. This crate loads
//! that file into a [`PropertyRegistry`] and renders any character through a
//! small template language, mixing those looked-up names with forms
//! computed from the code point (`\u` escapes, UTF-8 bytes, Unicode names,
//! categories, normalization forms).
//!
//! ## Key Features
//!
//! - **Open set of standards**: every entity set in the source becomes its
//!   own `entity.<set>` standard, with aliases folded together
//! - **Fallback chains**: a missing value never renders as nothing; it goes
//!   through configured alternatives and then a [`FallbackPolicy`]
//! - **Forgiving loader**: bad records are skipped, logged with `tracing`,
//!   and tallied in a [`LoadSummary`]
//! - **Cross-standard maps**: [`StandardMapper`] builds e.g. LaTeX to HTML
//!   entity tables and converts text
//!
//! ## Quick Start
//!
//! ```rust
//! use strfchr::{load_from_str, strfchr};
//!
//! let xml = r#"<charlist>
//!   <character id="U02022" dec="8226">
//!     <latex>\textbullet</latex>
//!     <entity id="bull" set="8879-isopub"/>
//!   </character>
//! </charlist>"#;
//!
//! let loaded = load_from_str(xml).unwrap();
//! let registry = &loaded.registry;
//!
//! assert_eq!(strfchr(registry, 0x2022, "%+ %N %{latex}").unwrap(), "U+2022 &bull; \\textbullet");
//! // no entity for U+00E2 in this registry: hex reference by default
//! assert_eq!(strfchr(registry, 0xE2, "%x %N").unwrap(), "0xe2 &#xe2;");
//! ```
//!
//! ### Custom fallback
//!
//! ```rust
//! use strfchr::{FallbackPolicy, FallbackStep, FormatInterpreter, PropertyRegistry, RenderOptions};
//!
//! let registry = PropertyRegistry::new();
//! let options = RenderOptions::new()
//!     .with_chain_step(FallbackStep::parse("SLASH2"))
//!     .with_fallback(FallbackPolicy::BackslashEscape);
//! let interpreter = FormatInterpreter::new(&registry, options);
//!
//! assert_eq!(interpreter.render(0xE2, "%{latex}").unwrap(), "\\xe2");
//! assert_eq!(interpreter.render(0x2022, "%{latex}").unwrap(), "\\u2022");
//! ```
//!
//! ## Logging
//!
//! Record-level problems in the source are reported through `tracing`
//! (`warn` for skipped records and fields, `info` for load and map
//! summaries, `debug` for skipped elements). Install a subscriber to see
//! them; the `strfchr` binary does so on stderr.
//!
//! ## Format Reference
//!
//! See the [`grammar`] module for the template language, the full list of
//! computed forms, and the shape of the source document.

pub mod computed;
pub mod error;
pub mod fallback;
pub mod format;
pub mod grammar;
pub mod loader;
pub mod macros;
pub mod map;
pub mod mapper;
pub mod options;
pub mod registry;
pub mod source;
pub mod standard;
pub mod value;

pub use computed::{ComputedForm, Evaluation};
pub use error::{Error, Result};
pub use fallback::{FallbackRequest, FallbackResolver};
pub use format::{strfchr, FormatCode, FormatInterpreter, Template};
pub use loader::{LoadSummary, Loaded, RegistryLoader};
pub use map::PropertyMap;
pub use mapper::{Ambiguity, MapReport, StandardMap, StandardMapper};
pub use options::{ConvertOptions, FallbackPolicy, FallbackStep, LoadOptions, RenderOptions};
pub use registry::{CharacterRecord, PropertyRegistry};
pub use standard::{EntityAliases, StandardInfo, StandardKind, StandardName, ValueShape};
pub use value::Value;

use std::io;
use std::path::Path;

/// Loads a character database from a string with default options.
///
/// # Examples
///
/// ```rust
/// use strfchr::load_from_str;
///
/// let loaded = load_from_str(r#"<charlist><character id="U00041" dec="65"/></charlist>"#).unwrap();
/// assert_eq!(loaded.summary.loaded, 1);
/// ```
///
/// # Errors
///
/// Returns [`Error::Structural`] if the document is not a `charlist`
/// document. Problems with single records are not errors.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load_from_str(input: &str) -> Result<Loaded> {
    RegistryLoader::new(LoadOptions::default()).load_str(input)
}

/// Loads a character database from an I/O stream with default options.
///
/// # Examples
///
/// ```rust
/// use strfchr::load_from_reader;
/// use std::io::Cursor;
///
/// let xml = Cursor::new(b"<charlist/>");
/// let loaded = load_from_reader(xml).unwrap();
/// assert!(loaded.registry.is_empty());
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise as [`load_from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load_from_reader<R>(reader: R) -> Result<Loaded>
where
    R: io::Read,
{
    RegistryLoader::new(LoadOptions::default()).load_reader(reader)
}

/// Loads a character database from a file with default options.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, otherwise as
/// [`load_from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load_from_path<P>(path: P) -> Result<Loaded>
where
    P: AsRef<Path>,
{
    RegistryLoader::new(LoadOptions::default()).load_path(path)
}
