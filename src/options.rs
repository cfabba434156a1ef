//! Configuration for loading, rendering, and text conversion.
//!
//! - [`RenderOptions`]: fallback policy, fallback chain, and the entity sets
//!   searched by `NAMEDENTITY`
//! - [`FallbackPolicy`]: the last-resort representation of a missing value
//! - [`FallbackStep`]: one alternative tried before the policy
//! - [`LoadOptions`]: entity-set aliases and value trimming for the loader
//! - [`ConvertOptions`]: prefix, suffix, and policy for text conversion
//!
//! ## Examples
//!
//! ```rust
//! use strfchr::{FallbackPolicy, FallbackStep, RenderOptions};
//!
//! let options = RenderOptions::new()
//!     .with_fallback(FallbackPolicy::LiteralCharacter)
//!     .with_chain_step(FallbackStep::parse("latex"))
//!     .with_chain_step(FallbackStep::parse("UPLUS"));
//!
//! assert_eq!(options.chain.len(), 2);
//! assert_eq!(options.fallback.as_str(), "literal");
//! ```

use crate::computed::ComputedForm;
use crate::standard::{EntityAliases, StandardName};
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Entity sets searched by `NAMEDENTITY` unless configured otherwise.
pub const DEFAULT_ENTITY_SETS: [&str; 8] = [
    "html4-lat1",
    "html4-symbol",
    "html4-special",
    "isolat1",
    "isopub",
    "isonum",
    "isotech",
    "isogrk3",
];

/// What to emit when a requested value does not exist for a character.
///
/// # Examples
///
/// ```rust
/// use strfchr::FallbackPolicy;
///
/// assert_eq!(FallbackPolicy::default(), FallbackPolicy::NumericCharRefHex);
/// assert_eq!("backslash".parse::<FallbackPolicy>().unwrap(), FallbackPolicy::BackslashEscape);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Re-emit the format code as written, e.g. `%N`.
    LeaveUnchanged,
    /// `&#226;`
    NumericCharRefDecimal,
    /// `&#xe2;`
    #[default]
    NumericCharRefHex,
    /// The character itself.
    LiteralCharacter,
    /// `\u00e2`, or `\U0001f600` outside the BMP.
    BackslashEscape,
}

impl FallbackPolicy {
    pub const ALL: [FallbackPolicy; 5] = [
        FallbackPolicy::LeaveUnchanged,
        FallbackPolicy::NumericCharRefDecimal,
        FallbackPolicy::NumericCharRefHex,
        FallbackPolicy::LiteralCharacter,
        FallbackPolicy::BackslashEscape,
    ];

    /// The command-line name of this policy.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            FallbackPolicy::LeaveUnchanged => "leave-unchanged",
            FallbackPolicy::NumericCharRefDecimal => "decimal",
            FallbackPolicy::NumericCharRefHex => "hex",
            FallbackPolicy::LiteralCharacter => "literal",
            FallbackPolicy::BackslashEscape => "backslash",
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FallbackPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FallbackPolicy::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                Error::custom(format!(
                    "unknown fallback policy '{}' (expected one of: leave-unchanged, decimal, hex, literal, backslash)",
                    s
                ))
            })
    }
}

/// One alternative in a fallback chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FallbackStep {
    /// Look the value up in the registry.
    Standard(StandardName),
    /// Derive the value from the code point.
    Computed(ComputedForm),
}

impl FallbackStep {
    /// Reads a computed-form long name or mnemonic, otherwise a standard name.
    ///
    /// ```rust
    /// use strfchr::{ComputedForm, FallbackStep, StandardName};
    ///
    /// assert_eq!(FallbackStep::parse("x"), FallbackStep::Computed(ComputedForm::HexInt));
    /// assert_eq!(FallbackStep::parse("SLASH4"), FallbackStep::Computed(ComputedForm::Slash4));
    /// assert_eq!(FallbackStep::parse("latex"), FallbackStep::Standard(StandardName::new("latex")));
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if let Some(form) = ComputedForm::from_name(name) {
            return FallbackStep::Computed(form);
        }
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(form) = ComputedForm::from_mnemonic(c) {
                return FallbackStep::Computed(form);
            }
        }
        FallbackStep::Standard(StandardName::new(name))
    }
}

impl FromStr for FallbackStep {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::custom("empty fallback step"));
        }
        Ok(FallbackStep::parse(s))
    }
}

impl fmt::Display for FallbackStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackStep::Standard(name) => write!(f, "{}", name),
            FallbackStep::Computed(form) => write!(f, "{}", form),
        }
    }
}

/// Configuration for one render run.
///
/// The chain and policy apply to every character rendered with these
/// options; they are never chosen per character.
///
/// # Examples
///
/// ```rust
/// use strfchr::{FallbackPolicy, RenderOptions};
///
/// let options = RenderOptions::new();
/// assert_eq!(options.fallback, FallbackPolicy::NumericCharRefHex);
/// assert!(options.chain.is_empty());
/// assert_eq!(options.entity_sets.len(), 8);
///
/// let only_html = RenderOptions::new().with_entity_sets(["html4-symbol"]);
/// assert_eq!(only_html.entity_sets[0].as_str(), "entity.html4-symbol");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub fallback: FallbackPolicy,
    pub chain: Vec<FallbackStep>,
    /// Entity-set standards searched in order by `NAMEDENTITY`.
    pub entity_sets: Vec<StandardName>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            fallback: FallbackPolicy::default(),
            chain: Vec::new(),
            entity_sets: DEFAULT_ENTITY_SETS
                .iter()
                .map(|set| StandardName::entity(set))
                .collect(),
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Appends one step to the fallback chain.
    #[must_use]
    pub fn with_chain_step(mut self, step: FallbackStep) -> Self {
        self.chain.push(step);
        self
    }

    /// Adds an entity set (bare set name, e.g. `mmlalias`) after the current ones.
    #[must_use]
    pub fn with_entity_set(mut self, set: &str) -> Self {
        let name = StandardName::entity(set);
        if !self.entity_sets.contains(&name) {
            self.entity_sets.push(name);
        }
        self
    }

    /// Replaces the searched entity sets.
    #[must_use]
    pub fn with_entity_sets<I, S>(mut self, sets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entity_sets = sets
            .into_iter()
            .map(|set| StandardName::entity(set.as_ref()))
            .collect();
        self
    }
}

/// Configuration for [`RegistryLoader`](crate::RegistryLoader).
#[derive(Clone, Debug, PartialEq)]
pub struct LoadOptions {
    pub aliases: EntityAliases,
    /// Trim surrounding whitespace from text values. Emptiness is always
    /// judged on the trimmed text.
    pub trim_values: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            aliases: EntityAliases::new(),
            trim_values: true,
        }
    }
}

impl LoadOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Treats entity set `alias` as another name for `canonical`.
    ///
    /// ```rust
    /// use strfchr::LoadOptions;
    ///
    /// let options = LoadOptions::new().with_entity_alias("xhtml1-symbol", "html4-symbol");
    /// assert_eq!(options.aliases.canonical("xhtml1-symbol"), "html4-symbol");
    /// ```
    #[must_use]
    pub fn with_entity_alias(mut self, alias: &str, canonical: &str) -> Self {
        self.aliases.insert(alias, canonical);
        self
    }

    #[must_use]
    pub fn with_trim_values(mut self, trim: bool) -> Self {
        self.trim_values = trim;
        self
    }
}

/// Configuration for [`StandardMapper::convert_text`](crate::StandardMapper::convert_text).
///
/// Each converted character becomes `prefix + value + suffix`. Characters
/// without a value in the target standard go through `fallback`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    pub prefix: String,
    pub suffix: String,
    pub fallback: FallbackPolicy,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            prefix: String::new(),
            suffix: String::new(),
            fallback: FallbackPolicy::LeaveUnchanged,
        }
    }
}

impl ConvertOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrapping for entity output: `&` before, `;` after.
    #[must_use]
    pub fn entity() -> Self {
        ConvertOptions {
            prefix: "&".to_string(),
            suffix: ";".to_string(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }
}
