//! Per-character templates.
//!
//! A template is ordinary text with format codes in it:
//!
//! - `%` followed by one mnemonic character, e.g. `%x` (hex integer)
//! - `%{NAME}`, where `NAME` is a computed form (`%{HEXINT}`) or a standard
//!   (`%{latex}`, `%{entity.isopub}`)
//! - `%%` for a literal percent sign
//!
//! [`FormatInterpreter::compile`] checks every code once, and
//! [`FormatInterpreter::render_compiled`] fills the template for one code
//! point. Missing values go through the [`FallbackResolver`], so rendering
//! a known code never fails; an unknown code fails the whole render.
//!
//! ```rust
//! use strfchr::{FormatInterpreter, PropertyRegistry, RenderOptions, Value};
//!
//! let mut registry = PropertyRegistry::new();
//! registry.put(0x2022, "latex", Value::from("\\textbullet"));
//!
//! let interpreter = FormatInterpreter::new(&registry, RenderOptions::default());
//! let template = interpreter.compile("%+ %{latex} 100%%").unwrap();
//! assert_eq!(interpreter.render_compiled(&template, 0x2022).unwrap(), "U+2022 \\textbullet 100%");
//! assert_eq!(interpreter.render_compiled(&template, 0xE2).unwrap(), "U+00E2 &#xe2; 100%");
//! ```

use crate::computed::ComputedForm;
use crate::fallback::{FallbackRequest, FallbackResolver};
use crate::registry::MAX_CODE_POINT;
use crate::{Error, FallbackStep, PropertyRegistry, RenderOptions, Result, StandardName};
use std::fmt;

/// What one format code refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatCode {
    Computed(ComputedForm),
    Standard(StandardName),
}

impl FormatCode {
    /// `true` if evaluating this code reads the registry.
    #[must_use]
    pub fn reads_registry(&self) -> bool {
        matches!(
            self,
            FormatCode::Standard(_) | FormatCode::Computed(ComputedForm::NamedEntity)
        )
    }
}

impl fmt::Display for FormatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatCode::Computed(form) => match form.mnemonic() {
                Some(m) => write!(f, "%{}", m),
                None => write!(f, "%{{{}}}", form.long_name()),
            },
            FormatCode::Standard(name) => write!(f, "%{{{}}}", name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Code { code: FormatCode, token: String },
}

/// A code as written, before it is resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Mnemonic { c: char, token: String },
    Named { name: String, token: String },
}

/// Splits template text into literals and codes. Only syntax is checked.
fn scan(template: &str) -> Result<Vec<Piece>> {
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut chars = template.char_indices();

    while let Some((pos, ch)) = chars.next() {
        if ch != '%' {
            literal.push(ch);
            continue;
        }
        let code = match chars.next() {
            None => return Err(Error::template(pos, "lone '%' at end of template")),
            Some((_, '%')) => {
                literal.push('%');
                continue;
            }
            Some((_, '{')) => {
                let start = pos + 2;
                let mut end = None;
                for (i, c) in chars.by_ref() {
                    if c == '}' {
                        end = Some(i);
                        break;
                    }
                }
                let Some(end) = end else {
                    return Err(Error::template(pos, "unterminated '%{'"));
                };
                let name = template[start..end].trim();
                if name.is_empty() {
                    return Err(Error::template(pos, "empty '%{}'"));
                }
                Piece::Named {
                    name: name.to_string(),
                    token: template[pos..=end].to_string(),
                }
            }
            Some((_, c)) => Piece::Mnemonic {
                c,
                token: format!("%{}", c),
            },
        };
        if !literal.is_empty() {
            pieces.push(Piece::Literal(std::mem::take(&mut literal)));
        }
        pieces.push(code);
    }
    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }
    Ok(pieces)
}

/// A checked template, ready to render for any number of code points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// The template text as given.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The format codes, in order of appearance.
    pub fn codes(&self) -> impl Iterator<Item = &FormatCode> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Code { code, .. } => Some(code),
            Segment::Literal(_) => None,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Whether rendering `template` with `options` would read registry data.
///
/// Lets a caller skip loading the database for purely computed templates.
///
/// ```rust
/// use strfchr::format::needs_registry;
/// use strfchr::RenderOptions;
///
/// assert!(!needs_registry("%x %U", &RenderOptions::default()).unwrap());
/// assert!(needs_registry("%x %N", &RenderOptions::default()).unwrap());
/// assert!(needs_registry("%{latex}", &RenderOptions::default()).unwrap());
/// ```
///
/// # Errors
///
/// Returns [`Error::Template`] if the template is malformed.
pub fn needs_registry(template: &str, options: &RenderOptions) -> Result<bool> {
    let in_template = scan(template)?.iter().any(|piece| match piece {
        Piece::Literal(_) => false,
        Piece::Mnemonic { c, .. } => ComputedForm::from_mnemonic(*c) == Some(ComputedForm::NamedEntity),
        Piece::Named { name, .. } => match ComputedForm::from_name(name) {
            Some(form) => form == ComputedForm::NamedEntity,
            None => true,
        },
    });
    let in_chain = options.chain.iter().any(|step| match step {
        FallbackStep::Standard(_) => true,
        FallbackStep::Computed(form) => *form == ComputedForm::NamedEntity,
    });
    Ok(in_template || in_chain)
}

/// Compiles and renders templates against one registry.
#[derive(Clone, Debug)]
pub struct FormatInterpreter<'a> {
    registry: &'a PropertyRegistry,
    options: RenderOptions,
}

impl<'a> FormatInterpreter<'a> {
    #[must_use]
    pub fn new(registry: &'a PropertyRegistry, options: RenderOptions) -> Self {
        FormatInterpreter { registry, options }
    }

    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn resolver(&self) -> FallbackResolver<'_> {
        FallbackResolver::new(self.registry, &self.options)
    }

    /// A standard is known if it is declared, or present in the registry.
    fn is_known_standard(&self, name: &StandardName) -> bool {
        name.is_declared() || self.registry.has_standard(name.as_str())
    }

    /// Parses `template` and resolves every code in it.
    ///
    /// # Errors
    ///
    /// - [`Error::Template`] for a lone trailing `%` or an unterminated `%{`
    /// - [`Error::UnknownFormatCode`] for a code that names neither a
    ///   computed form nor a known standard
    pub fn compile(&self, template: &str) -> Result<Template> {
        let segments = scan(template)?
            .into_iter()
            .map(|piece| self.resolve_piece(piece))
            .collect::<Result<Vec<_>>>()?;
        Ok(Template {
            source: template.to_string(),
            segments,
        })
    }

    fn resolve_piece(&self, piece: Piece) -> Result<Segment> {
        match piece {
            Piece::Literal(text) => Ok(Segment::Literal(text)),
            Piece::Mnemonic { c, token } => match ComputedForm::from_mnemonic(c) {
                Some(form) => Ok(Segment::Code {
                    code: FormatCode::Computed(form),
                    token,
                }),
                None => Err(Error::unknown_code(&c.to_string())),
            },
            Piece::Named { name, token } => {
                if let Some(form) = ComputedForm::from_name(&name) {
                    return Ok(Segment::Code {
                        code: FormatCode::Computed(form),
                        token,
                    });
                }
                let standard = StandardName::new(name);
                if !self.is_known_standard(&standard) {
                    return Err(Error::unknown_code(standard.as_str()));
                }
                Ok(Segment::Code {
                    code: FormatCode::Standard(standard),
                    token,
                })
            }
        }
    }

    /// Compiles `template` and renders it for `cp`.
    ///
    /// # Errors
    ///
    /// As [`Self::compile`], plus [`Error::InvalidCodePoint`] above U+10FFFF.
    pub fn render(&self, cp: u32, template: &str) -> Result<String> {
        let compiled = self.compile(template)?;
        self.render_compiled(&compiled, cp)
    }

    /// Renders a compiled template for `cp`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCodePoint`] above U+10FFFF.
    pub fn render_compiled(&self, template: &Template, cp: u32) -> Result<String> {
        let mut output = String::with_capacity(template.source.len() + 16);
        self.write_compiled(&mut output, template, cp)?;
        Ok(output)
    }

    /// Appends the rendering of `template` for `cp` to `output`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCodePoint`] above U+10FFFF; `output` is untouched then.
    pub fn write_compiled(&self, output: &mut String, template: &Template, cp: u32) -> Result<()> {
        if cp > MAX_CODE_POINT {
            return Err(Error::InvalidCodePoint(cp));
        }
        let resolver = self.resolver();
        for segment in &template.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Code { code, token } => {
                    let value = match code {
                        FormatCode::Computed(form) => resolver.computed(*form, cp),
                        FormatCode::Standard(name) => self
                            .registry
                            .get(cp, name.as_str())
                            .map(|value| value.to_string()),
                    };
                    match value {
                        Some(value) => output.push_str(&value),
                        None => output.push_str(&resolver.resolve(&FallbackRequest::new(cp, token))),
                    }
                }
            }
        }
        Ok(())
    }

    /// Renders `template` once per code point, in iteration order.
    ///
    /// # Errors
    ///
    /// Stops at the first code point above U+10FFFF.
    pub fn render_all<I>(&self, code_points: I, template: &Template) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = u32>,
    {
        code_points
            .into_iter()
            .map(|cp| self.render_compiled(template, cp))
            .collect()
    }
}

/// Renders `template` for `cp` with default options.
///
/// ```rust
/// use strfchr::{strfchr, PropertyRegistry};
///
/// let registry = PropertyRegistry::new();
/// assert_eq!(strfchr(&registry, 0xE2, "%x %N").unwrap(), "0xe2 &#xe2;");
/// ```
///
/// # Errors
///
/// As [`FormatInterpreter::render`].
pub fn strfchr(registry: &PropertyRegistry, cp: u32, template: &str) -> Result<String> {
    FormatInterpreter::new(registry, RenderOptions::default()).render(cp, template)
}
