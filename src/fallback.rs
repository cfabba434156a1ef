//! Substitutes for values that do not exist.
//!
//! When a template asks for something a character does not have (a LaTeX
//! macro for a Cyrillic letter, `SLASH2` for U+2022), the renderer hands the
//! request to a [`FallbackResolver`]. It walks the configured fallback chain
//! and, if nothing there applies, applies the [`FallbackPolicy`]. The result
//! is always a string: resolution is total and depends on nothing but the
//! registry, the options, and the request.
//!
//! ```rust
//! use strfchr::{FallbackPolicy, FallbackRequest, FallbackResolver, PropertyRegistry, RenderOptions};
//!
//! let registry = PropertyRegistry::new();
//! let options = RenderOptions::new().with_fallback(FallbackPolicy::BackslashEscape);
//! let resolver = FallbackResolver::new(&registry, &options);
//!
//! assert_eq!(resolver.resolve(&FallbackRequest::new(0xE2, "%N")), "\\u00e2");
//! assert_eq!(resolver.resolve(&FallbackRequest::new(0x1F600, "%N")), "\\U0001f600");
//! ```

use crate::computed::ComputedForm;
use crate::{FallbackPolicy, FallbackStep, PropertyRegistry, RenderOptions};

/// A value that could not be produced directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FallbackRequest<'t> {
    pub code_point: u32,
    /// The format code as written in the template, e.g. `%N` or `%{latex}`.
    pub token: &'t str,
}

impl<'t> FallbackRequest<'t> {
    #[must_use]
    pub fn new(code_point: u32, token: &'t str) -> Self {
        FallbackRequest { code_point, token }
    }
}

/// Resolves missing values against one registry and one set of options.
#[derive(Clone, Copy, Debug)]
pub struct FallbackResolver<'a> {
    registry: &'a PropertyRegistry,
    options: &'a RenderOptions,
}

impl<'a> FallbackResolver<'a> {
    #[must_use]
    pub fn new(registry: &'a PropertyRegistry, options: &'a RenderOptions) -> Self {
        FallbackResolver { registry, options }
    }

    /// The chain's first defined value, else the policy's rendering.
    #[must_use]
    pub fn resolve(&self, request: &FallbackRequest<'_>) -> String {
        self.options
            .chain
            .iter()
            .find_map(|step| self.evaluate(step, request.code_point))
            .unwrap_or_else(|| apply_policy(self.options.fallback, request))
    }

    /// The value of one step for `cp`, if it has one.
    #[must_use]
    pub fn evaluate(&self, step: &FallbackStep, cp: u32) -> Option<String> {
        match step {
            FallbackStep::Standard(name) => self
                .registry
                .get(cp, name.as_str())
                .map(|value| value.to_string()),
            FallbackStep::Computed(form) => self.computed(*form, cp),
        }
    }

    /// Evaluates a computed form, including the registry-backed ones.
    #[must_use]
    pub fn computed(&self, form: ComputedForm, cp: u32) -> Option<String> {
        match form {
            ComputedForm::NamedEntity => self.named_entity(cp),
            other => other.compute(cp),
        }
    }

    /// `&name;` from the first configured entity set that names `cp`.
    #[must_use]
    pub fn named_entity(&self, cp: u32) -> Option<String> {
        self.options
            .entity_sets
            .iter()
            .find_map(|set| self.registry.get(cp, set.as_str()))
            .and_then(|value| value.as_str())
            .map(|name| format!("&{};", name))
    }
}

/// Renders `request` under `policy` alone, without a registry.
#[must_use]
pub fn apply_policy(policy: FallbackPolicy, request: &FallbackRequest<'_>) -> String {
    let cp = request.code_point;
    match policy {
        FallbackPolicy::LeaveUnchanged => request.token.to_string(),
        FallbackPolicy::NumericCharRefDecimal => format!("&#{};", cp),
        FallbackPolicy::NumericCharRefHex => format!("&#x{:x};", cp),
        FallbackPolicy::LiteralCharacter => match char::from_u32(cp) {
            Some(ch) => ch.to_string(),
            None => format!("&#x{:x};", cp),
        },
        FallbackPolicy::BackslashEscape if cp <= 0xFFFF => format!("\\u{:04x}", cp),
        FallbackPolicy::BackslashEscape => format!("\\U{:08x}", cp),
    }
}
