//! Forward-only scanner for the `charlist` character database.
//!
//! The source document is the W3C `unicode.xml` file: a `charlist` root
//! holding thousands of `character` elements, each with a handful of
//! property children. [`RecordParser`] makes a single pass over the text and
//! yields one [`RawRecord`] per well-formed `character` element. It knows
//! just enough XML for that document: the prolog (declaration, processing
//! instructions, comments, a DOCTYPE with internal subset), elements and
//! attributes, CDATA sections, the five predefined entities and numeric
//! character references.
//!
//! Problems with a single record (bad identifier, combination sequence)
//! skip that record and are counted in [`ParseStats`]. Problems with the
//! document itself end the iteration with [`Error::Structural`].
//!
//! ```rust
//! use strfchr::source::RecordParser;
//!
//! let xml = r#"<charlist>
//!   <character id="U02022" dec="8226"><latex>\textbullet</latex></character>
//!   <character id="U0003C-020D2" dec="60-8402"/>
//! </charlist>"#;
//!
//! let mut parser = RecordParser::new(xml);
//! let record = parser.next().unwrap().unwrap();
//! assert_eq!(record.code_point, 0x2022);
//! assert_eq!(record.children[0].text, "\\textbullet");
//!
//! assert!(parser.next().is_none());
//! assert_eq!(parser.stats().combinations, 1);
//! ```

use crate::{Error, Result};
use std::iter::FusedIterator;
use tracing::{debug, warn};

/// Name of the required root element.
pub const ROOT_ELEMENT: &str = "charlist";
/// Name of the per-character element.
pub const CHARACTER_ELEMENT: &str = "character";

/// A property element inside a `character` element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawChild {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    /// All descendant text with references and CDATA decoded, untrimmed.
    pub text: String,
    pub line: usize,
}

impl RawChild {
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        find_attribute(&self.attributes, name)
    }
}

/// One `character` element whose identifier checked out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRecord {
    pub code_point: u32,
    /// The `id` attribute as written, e.g. `U02022`.
    pub identifier: String,
    pub decimal: u32,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<RawChild>,
    pub line: usize,
}

impl RawRecord {
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        find_attribute(&self.attributes, name)
    }
}

/// Counts kept by the parser while it runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Every `character` element encountered.
    pub seen: usize,
    /// Elements skipped because their identifier names a sequence.
    pub combinations: usize,
    /// Elements skipped because their identifier or decimal is unusable.
    pub invalid: usize,
}

fn find_attribute<'a>(attributes: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Prolog,
    Body,
    Done,
    Failed,
}

struct StartTag {
    name: String,
    attributes: Vec<(String, String)>,
    self_closing: bool,
    line: usize,
}

enum Verdict {
    Keep(u32, u32),
    Combination,
    Invalid(&'static str),
}

/// Lazy iterator of [`RawRecord`]s over a `charlist` document.
///
/// Fused: after the first `Err` it only returns `None`.
pub struct RecordParser<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    state: State,
    stats: ParseStats,
}

impl<'a> RecordParser<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        // a UTF-8 byte-order mark is not part of the document
        let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
        RecordParser {
            input,
            position: 0,
            line: 1,
            column: 1,
            state: State::Prolog,
            stats: ParseStats::default(),
        }
    }

    /// Counts so far. Final once the iterator is exhausted.
    #[must_use]
    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn error(&self, msg: &str) -> Error {
        Error::structural(self.line, self.column, msg)
    }

    /// Moves forward to byte offset `target`, keeping line and column current.
    fn advance_to(&mut self, target: usize) {
        while self.position < target && self.next_char().is_some() {}
    }

    fn consume(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.advance_to(self.position + literal.len());
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek_char(), Some(ch) if ch.is_whitespace()) {
            self.next_char();
        }
    }

    /// Returns the text up to `terminator` and moves past the terminator.
    fn take_until(&mut self, terminator: &str, what: &str) -> Result<&'a str> {
        match self.rest().find(terminator) {
            Some(offset) => {
                let start = self.position;
                let content = &self.input[start..start + offset];
                self.advance_to(start + offset + terminator.len());
                Ok(content)
            }
            None => Err(self.error(&format!("unterminated {}", what))),
        }
    }

    fn parse_name(&mut self) -> Result<String> {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch.is_alphanumeric() || matches!(ch, '_' | '-' | '.' | ':') {
                self.next_char();
            } else {
                break;
            }
        }
        if self.position == start {
            return Err(self.error("expected a name"));
        }
        Ok(self.input[start..self.position].to_string())
    }

    fn parse_attribute_value(&mut self) -> Result<String> {
        let quote = match self.peek_char() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(self.error("attribute value must be quoted")),
        };
        self.next_char();
        let terminator = if quote == '"' { "\"" } else { "'" };
        let raw = self.take_until(terminator, "attribute value")?;
        Ok(decode_references(raw))
    }

    /// Parses `<name attr="v" ...>` or `<name .../>`; the cursor is on `<`.
    fn parse_start_tag(&mut self) -> Result<StartTag> {
        let line = self.line;
        self.next_char();
        let name = self.parse_name()?;
        let mut attributes = Vec::new();
        loop {
            self.skip_whitespace();
            if self.consume("/>") {
                return Ok(StartTag {
                    name,
                    attributes,
                    self_closing: true,
                    line,
                });
            }
            if self.consume(">") {
                return Ok(StartTag {
                    name,
                    attributes,
                    self_closing: false,
                    line,
                });
            }
            if self.at_end() {
                return Err(self.error(&format!("unterminated start tag <{}>", name)));
            }
            let key = self.parse_name()?;
            self.skip_whitespace();
            if !self.consume("=") {
                return Err(self.error(&format!("expected '=' after attribute '{}'", key)));
            }
            self.skip_whitespace();
            let value = self.parse_attribute_value()?;
            attributes.push((key, value));
        }
    }

    /// Parses `</name>` and checks it closes `open`.
    fn parse_end_tag(&mut self, open: &str) -> Result<()> {
        self.consume("</");
        let name = self.parse_name()?;
        self.skip_whitespace();
        if !self.consume(">") {
            return Err(self.error(&format!("unterminated end tag </{}>", name)));
        }
        if name != open {
            return Err(self.error(&format!(
                "mismatched end tag: expected </{}>, found </{}>",
                open, name
            )));
        }
        Ok(())
    }

    /// Skips a comment or processing instruction at the cursor, if any.
    fn skip_misc(&mut self) -> Result<bool> {
        if self.consume("<!--") {
            self.take_until("-->", "comment")?;
            Ok(true)
        } else if self.consume("<?") {
            self.take_until("?>", "processing instruction")?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn skip_doctype(&mut self) -> Result<()> {
        let mut depth = 0usize;
        while let Some(ch) = self.next_char() {
            match ch {
                '[' => depth += 1,
                ']' => depth = depth.saturating_sub(1),
                '"' | '\'' => {
                    let terminator = if ch == '"' { "\"" } else { "'" };
                    self.take_until(terminator, "quoted string in DOCTYPE")?;
                }
                '<' if depth > 0 && self.rest().starts_with("!--") => {
                    self.take_until("-->", "comment")?;
                }
                '>' if depth == 0 => return Ok(()),
                _ => {}
            }
        }
        Err(self.error("unterminated DOCTYPE"))
    }

    /// Everything up to and including the root start tag.
    fn parse_prolog(&mut self) -> Result<()> {
        loop {
            self.skip_whitespace();
            if self.skip_misc()? {
                continue;
            }
            if self.consume("<!DOCTYPE") {
                self.skip_doctype()?;
                continue;
            }
            match self.peek_char() {
                None => return Err(self.error("missing root element")),
                Some('<') => {
                    let tag = self.parse_start_tag()?;
                    if tag.name != ROOT_ELEMENT {
                        return Err(Error::structural(
                            tag.line,
                            1,
                            &format!(
                                "root element must be <{}>, found <{}>",
                                ROOT_ELEMENT, tag.name
                            ),
                        ));
                    }
                    self.state = if tag.self_closing {
                        self.parse_epilog()?;
                        State::Done
                    } else {
                        State::Body
                    };
                    return Ok(());
                }
                Some(_) => return Err(self.error("text before the root element")),
            }
        }
    }

    /// Only whitespace, comments and processing instructions may follow the root.
    fn parse_epilog(&mut self) -> Result<()> {
        loop {
            self.skip_whitespace();
            if self.at_end() {
                return Ok(());
            }
            if !self.skip_misc()? {
                return Err(self.error("content after the root element"));
            }
        }
    }

    /// Collects decoded descendant text until the end tag of `open`.
    fn collect_text(&mut self, open: &str) -> Result<String> {
        let mut text = String::new();
        loop {
            if self.at_end() {
                return Err(self.error(&format!("unexpected end of input inside <{}>", open)));
            }
            if self.skip_misc()? {
                continue;
            }
            if self.consume("<![CDATA[") {
                text.push_str(self.take_until("]]>", "CDATA section")?);
            } else if self.rest().starts_with("</") {
                self.parse_end_tag(open)?;
                return Ok(text);
            } else if self.peek_char() == Some('<') {
                let tag = self.parse_start_tag()?;
                if !tag.self_closing {
                    text.push_str(&self.collect_text(&tag.name)?);
                }
            } else {
                let start = self.position;
                let end = self.rest().find('<').map_or(self.input.len(), |i| start + i);
                self.advance_to(end);
                text.push_str(&decode_references(&self.input[start..end]));
            }
        }
    }

    /// The children of a `character` element. Loose text is not allowed here.
    fn parse_character_body(&mut self) -> Result<Vec<RawChild>> {
        let mut children = Vec::new();
        loop {
            self.skip_whitespace();
            if self.at_end() {
                return Err(self.error("unexpected end of input inside <character>"));
            }
            if self.skip_misc()? {
                continue;
            }
            if self.rest().starts_with("</") {
                self.parse_end_tag(CHARACTER_ELEMENT)?;
                return Ok(children);
            }
            if self.peek_char() != Some('<') || self.rest().starts_with("<![CDATA[") {
                return Err(self.error("text directly inside <character>"));
            }
            let tag = self.parse_start_tag()?;
            let text = if tag.self_closing {
                String::new()
            } else {
                self.collect_text(&tag.name)?
            };
            children.push(RawChild {
                name: tag.name,
                attributes: tag.attributes,
                text,
                line: tag.line,
            });
        }
    }

    fn next_record(&mut self) -> Result<Option<RawRecord>> {
        if self.state == State::Prolog {
            self.parse_prolog()?;
        }
        while self.state == State::Body {
            self.skip_whitespace();
            if self.skip_misc()? {
                continue;
            }
            if self.at_end() {
                return Err(self.error("unexpected end of input inside <charlist>"));
            }
            if self.rest().starts_with("</") {
                self.parse_end_tag(ROOT_ELEMENT)?;
                self.parse_epilog()?;
                self.state = State::Done;
                break;
            }
            if self.peek_char() != Some('<') {
                let start = self.position;
                let end = self.rest().find('<').map_or(self.input.len(), |i| start + i);
                self.advance_to(end);
                debug!(line = self.line, "ignoring text inside <charlist>");
                continue;
            }
            if self.rest().starts_with("<![CDATA[") {
                self.consume("<![CDATA[");
                self.take_until("]]>", "CDATA section")?;
                continue;
            }

            let tag = self.parse_start_tag()?;
            if tag.name != CHARACTER_ELEMENT {
                if !tag.self_closing {
                    self.collect_text(&tag.name)?;
                }
                debug!(element = %tag.name, line = tag.line, "skipping non-character element");
                continue;
            }

            self.stats.seen += 1;
            let children = if tag.self_closing {
                Vec::new()
            } else {
                self.parse_character_body()?
            };
            let identifier = find_attribute(&tag.attributes, "id")
                .unwrap_or_default()
                .to_string();

            match check_identifier(&identifier, find_attribute(&tag.attributes, "dec")) {
                Verdict::Keep(code_point, decimal) => {
                    return Ok(Some(RawRecord {
                        code_point,
                        identifier,
                        decimal,
                        attributes: tag.attributes,
                        children,
                        line: tag.line,
                    }));
                }
                Verdict::Combination => {
                    self.stats.combinations += 1;
                    warn!(identifier = %identifier, line = tag.line, "skipping combination character");
                }
                Verdict::Invalid(reason) => {
                    self.stats.invalid += 1;
                    warn!(identifier = %identifier, line = tag.line, reason, "skipping invalid character");
                }
            }
        }
        Ok(None)
    }
}

impl<'a> Iterator for RecordParser<'a> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, State::Done | State::Failed) {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(err) => {
                self.state = State::Failed;
                Some(Err(err))
            }
        }
    }
}

impl<'a> FusedIterator for RecordParser<'a> {}

/// Judges an `id`/`dec` pair. Identifiers are `U` plus exactly five hex digits.
fn check_identifier(identifier: &str, decimal: Option<&str>) -> Verdict {
    if identifier.contains('-') {
        return Verdict::Combination;
    }
    let hex = match identifier.strip_prefix('U') {
        Some(hex) if hex.len() == 5 && hex.chars().all(|c| c.is_ascii_hexdigit()) => hex,
        _ => return Verdict::Invalid("identifier is not U followed by five hex digits"),
    };
    let Ok(code_point) = u32::from_str_radix(hex, 16) else {
        return Verdict::Invalid("identifier is not hexadecimal");
    };
    let Some(decimal) = decimal.and_then(|d| d.trim().parse::<u32>().ok()) else {
        return Verdict::Invalid("missing or non-numeric dec attribute");
    };
    if decimal != code_point {
        return Verdict::Invalid("dec attribute disagrees with identifier");
    }
    if code_point > 0x10FFFF {
        return Verdict::Invalid("code point above U+10FFFF");
    }
    Verdict::Keep(code_point, decimal)
}

/// Decodes predefined entities and numeric character references.
///
/// Anything unrecognised (`&foo;`, a bare `&`, a reference to a surrogate)
/// is kept as written.
///
/// ```rust
/// use strfchr::source::decode_references;
///
/// assert_eq!(decode_references("a &lt; b &amp;&#x2022;&#8226;"), "a < b &\u{2022}\u{2022}");
/// assert_eq!(decode_references("&nbsp; & co"), "&nbsp; & co");
/// ```
#[must_use]
pub fn decode_references(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest
            .find(';')
            .filter(|&semi| semi <= 12)
            .and_then(|semi| resolve_reference(&rest[1..semi]).map(|ch| (ch, semi)));
        match decoded {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn resolve_reference(name: &str) -> Option<char> {
    match name {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let number = name.strip_prefix('#')?;
            let value = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse::<u32>().ok()?,
            };
            char::from_u32(value)
        }
    }
}
