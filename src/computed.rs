//! Computed forms: representations derived from the code point alone.
//!
//! Each [`ComputedForm`] has a long name (`HEXINT`) used in `%{NAME}` codes,
//! and most also have a one-character mnemonic (`x`) used in `%x` codes.
//! Forms are either pure arithmetic on the integer, backed by one of the
//! Unicode data crates, or a registry lookup ([`ComputedForm::NamedEntity`]).
//!
//! A form that is undefined for some code point (`SLASH2` above `0xFF`,
//! `MNEMONIC` for a non-control, `UNAME` for an unnamed code point, anything
//! needing a `char` for a surrogate) yields `None`, and the caller goes to
//! the fallback resolver.
//!
//! ```rust
//! use strfchr::ComputedForm;
//!
//! let form = ComputedForm::from_mnemonic('x').unwrap();
//! assert_eq!(form.long_name(), "HEXINT");
//! assert_eq!(form.compute(0xE2).as_deref(), Some("0xe2"));
//!
//! assert_eq!(ComputedForm::Slash2.compute(0x2022), None);
//! ```

use crate::standard::StandardKind;
use std::fmt;
use unic_ucd_block::Block;
use unic_ucd_category::GeneralCategory;
use unic_ucd_name::Name;
use unicode_normalization::UnicodeNormalization;
use unicode_script::UnicodeScript;
use unicode_width::UnicodeWidthChar;

/// Code point used for the example column of the codes table.
pub const EXAMPLE_CODE_POINT: u32 = 0xE2;

/// How a computed form obtains its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// Integer arithmetic and string formatting only.
    Arithmetic,
    /// Unicode character data from a library crate.
    Library,
    /// A registry lookup across configured standards.
    Lookup,
}

impl Evaluation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Evaluation::Arithmetic => "arithmetic",
            Evaluation::Library => "library",
            Evaluation::Lookup => "lookup",
        }
    }
}

/// Every representation or property the engine can derive for a code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComputedForm {
    Literal,
    Slash0,
    Slash2,
    Slash4,
    Slash8,
    DecEntity,
    HexEntity,
    NamedEntity,
    BinInt,
    OctInt,
    DecInt,
    HexInt,
    UNorm,
    UName,
    UPlus,
    Utf8,
    Uri,
    Mnemonic,
    ControlPic,
    BlockName,
    CategoryAbbr,
    CategoryName,
    PlaneNumber,
    PlaneName,
    ScriptName,
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
    Width,
    IsNumeric,
    Decomp,
    CombiningClass,
    IsCombining,
    IsControl,
}

impl ComputedForm {
    /// All forms, in `--help-codes` order.
    pub const ALL: [ComputedForm; 35] = [
        ComputedForm::Literal,
        ComputedForm::Slash0,
        ComputedForm::Slash2,
        ComputedForm::Slash4,
        ComputedForm::Slash8,
        ComputedForm::DecEntity,
        ComputedForm::HexEntity,
        ComputedForm::NamedEntity,
        ComputedForm::BinInt,
        ComputedForm::OctInt,
        ComputedForm::DecInt,
        ComputedForm::HexInt,
        ComputedForm::UNorm,
        ComputedForm::UName,
        ComputedForm::UPlus,
        ComputedForm::Utf8,
        ComputedForm::Uri,
        ComputedForm::Mnemonic,
        ComputedForm::ControlPic,
        ComputedForm::BlockName,
        ComputedForm::CategoryAbbr,
        ComputedForm::CategoryName,
        ComputedForm::PlaneNumber,
        ComputedForm::PlaneName,
        ComputedForm::ScriptName,
        ComputedForm::Nfc,
        ComputedForm::Nfd,
        ComputedForm::Nfkc,
        ComputedForm::Nfkd,
        ComputedForm::Width,
        ComputedForm::IsNumeric,
        ComputedForm::Decomp,
        ComputedForm::CombiningClass,
        ComputedForm::IsCombining,
        ComputedForm::IsControl,
    ];

    /// The name used inside `%{...}`.
    #[must_use]
    pub const fn long_name(self) -> &'static str {
        match self {
            ComputedForm::Literal => "LITERAL",
            ComputedForm::Slash0 => "SLASH0",
            ComputedForm::Slash2 => "SLASH2",
            ComputedForm::Slash4 => "SLASH4",
            ComputedForm::Slash8 => "SLASH8",
            ComputedForm::DecEntity => "DECENTITY",
            ComputedForm::HexEntity => "HEXENTITY",
            ComputedForm::NamedEntity => "NAMEDENTITY",
            ComputedForm::BinInt => "BININT",
            ComputedForm::OctInt => "OCTINT",
            ComputedForm::DecInt => "DECINT",
            ComputedForm::HexInt => "HEXINT",
            ComputedForm::UNorm => "UNORM",
            ComputedForm::UName => "UNAME",
            ComputedForm::UPlus => "UPLUS",
            ComputedForm::Utf8 => "UTF8",
            ComputedForm::Uri => "URI",
            ComputedForm::Mnemonic => "MNEMONIC",
            ComputedForm::ControlPic => "CONTROLPIC",
            ComputedForm::BlockName => "BLOCKNAME",
            ComputedForm::CategoryAbbr => "CATEGORYABBR",
            ComputedForm::CategoryName => "CATEGORYNAME",
            ComputedForm::PlaneNumber => "PLANENUMBER",
            ComputedForm::PlaneName => "PLANENAME",
            ComputedForm::ScriptName => "SCRIPTNAME",
            ComputedForm::Nfc => "NFC",
            ComputedForm::Nfd => "NFD",
            ComputedForm::Nfkc => "NFKC",
            ComputedForm::Nfkd => "NFKD",
            ComputedForm::Width => "WIDTH",
            ComputedForm::IsNumeric => "ISNUMERIC",
            ComputedForm::Decomp => "DECOMP",
            ComputedForm::CombiningClass => "COMBININGCLASS",
            ComputedForm::IsCombining => "ISCOMBINING",
            ComputedForm::IsControl => "ISCONTROL",
        }
    }

    /// The single character used after `%`, if the form has one.
    #[must_use]
    pub const fn mnemonic(self) -> Option<char> {
        let c = match self {
            ComputedForm::Literal => 'l',
            ComputedForm::Slash0 => '0',
            ComputedForm::Slash2 => '2',
            ComputedForm::Slash4 => '4',
            ComputedForm::Slash8 => '8',
            ComputedForm::DecEntity => 'D',
            ComputedForm::HexEntity => 'X',
            ComputedForm::NamedEntity => 'N',
            ComputedForm::BinInt => 'b',
            ComputedForm::OctInt => 'o',
            ComputedForm::DecInt => 'd',
            ComputedForm::HexInt => 'x',
            ComputedForm::UNorm => 'u',
            ComputedForm::UName => 'U',
            ComputedForm::UPlus => '+',
            ComputedForm::Utf8 => 'f',
            ComputedForm::Uri => 'F',
            ComputedForm::Mnemonic => 'M',
            ComputedForm::ControlPic => 'm',
            ComputedForm::BlockName => 'B',
            ComputedForm::CategoryAbbr => 'g',
            ComputedForm::CategoryName => 'G',
            ComputedForm::PlaneNumber => 'p',
            ComputedForm::PlaneName => 'P',
            ComputedForm::ScriptName => 'S',
            ComputedForm::Nfc => 'c',
            ComputedForm::Nfd => 'C',
            ComputedForm::Nfkc => 'k',
            ComputedForm::Nfkd => 'K',
            ComputedForm::Width => 'w',
            ComputedForm::IsNumeric => '#',
            ComputedForm::Decomp
            | ComputedForm::CombiningClass
            | ComputedForm::IsCombining
            | ComputedForm::IsControl => return None,
        };
        Some(c)
    }

    #[must_use]
    pub fn from_mnemonic(c: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.mnemonic() == Some(c))
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.long_name() == name)
    }

    /// Representation of the character, or a fact about it.
    #[must_use]
    pub const fn kind(self) -> StandardKind {
        match self {
            ComputedForm::UNorm
            | ComputedForm::UName
            | ComputedForm::BlockName
            | ComputedForm::CategoryAbbr
            | ComputedForm::CategoryName
            | ComputedForm::PlaneNumber
            | ComputedForm::PlaneName
            | ComputedForm::ScriptName
            | ComputedForm::Nfc
            | ComputedForm::Nfd
            | ComputedForm::Nfkc
            | ComputedForm::Nfkd
            | ComputedForm::Width
            | ComputedForm::IsNumeric
            | ComputedForm::Decomp
            | ComputedForm::CombiningClass
            | ComputedForm::IsCombining
            | ComputedForm::IsControl => StandardKind::Property,
            _ => StandardKind::Representation,
        }
    }

    #[must_use]
    pub const fn evaluation(self) -> Evaluation {
        match self {
            ComputedForm::NamedEntity => Evaluation::Lookup,
            ComputedForm::Literal
            | ComputedForm::Slash0
            | ComputedForm::Slash2
            | ComputedForm::Slash4
            | ComputedForm::Slash8
            | ComputedForm::DecEntity
            | ComputedForm::HexEntity
            | ComputedForm::BinInt
            | ComputedForm::OctInt
            | ComputedForm::DecInt
            | ComputedForm::HexInt
            | ComputedForm::UPlus
            | ComputedForm::Utf8
            | ComputedForm::Uri
            | ComputedForm::Mnemonic
            | ComputedForm::ControlPic
            | ComputedForm::PlaneNumber
            | ComputedForm::PlaneName
            | ComputedForm::IsControl => Evaluation::Arithmetic,
            _ => Evaluation::Library,
        }
    }

    /// Derives the value for `cp`, or `None` when the form is undefined there.
    ///
    /// [`ComputedForm::NamedEntity`] always returns `None` here; it needs a
    /// registry and is evaluated by the fallback resolver.
    #[must_use]
    pub fn compute(self, cp: u32) -> Option<String> {
        if cp > 0x10FFFF {
            return None;
        }
        let ch = char::from_u32(cp);
        match self {
            ComputedForm::Literal => ch.map(String::from),
            ComputedForm::Slash0 => Some(format!("\\x{{{:x}}}", cp)),
            ComputedForm::Slash2 => (cp <= 0xFF).then(|| format!("\\x{:02x}", cp)),
            ComputedForm::Slash4 => (cp <= 0xFFFF).then(|| format!("\\u{:04x}", cp)),
            ComputedForm::Slash8 => Some(format!("\\U{:08x}", cp)),
            ComputedForm::DecEntity => Some(format!("&#{};", cp)),
            ComputedForm::HexEntity => Some(format!("&#x{:x};", cp)),
            ComputedForm::NamedEntity => None,
            ComputedForm::BinInt => Some(format!("0b{:b}", cp)),
            ComputedForm::OctInt => Some(format!("{:o}", cp)),
            ComputedForm::DecInt => Some(cp.to_string()),
            ComputedForm::HexInt => Some(format!("0x{:x}", cp)),
            ComputedForm::UName => ch.and_then(Name::of).map(|n| n.to_string()),
            ComputedForm::UNorm => ch
                .and_then(Name::of)
                .map(|n| n.to_string().replace(' ', "_")),
            ComputedForm::UPlus => Some(format!("U+{:04X}", cp)),
            ComputedForm::Utf8 => ch.map(|c| utf8_bytes(c, "\\x")),
            ComputedForm::Uri => ch.map(|c| utf8_bytes(c, "%")),
            ComputedForm::Mnemonic => control_mnemonic(cp).map(String::from),
            ComputedForm::ControlPic => control_picture(cp).map(String::from),
            ComputedForm::BlockName => ch.map(|c| {
                Block::of(c)
                    .map(|b| b.name.to_string())
                    .unwrap_or_else(|| "No_Block".to_string())
            }),
            ComputedForm::CategoryAbbr => ch.map(|c| category_abbr(c).to_string()),
            ComputedForm::CategoryName => ch
                .and_then(|c| category_name(category_abbr(c)))
                .map(String::from),
            ComputedForm::PlaneNumber => Some((cp >> 16).to_string()),
            ComputedForm::PlaneName => Some(plane_name(cp >> 16).to_string()),
            ComputedForm::ScriptName => ch.map(|c| c.script().full_name().to_string()),
            ComputedForm::Nfc => ch.map(|c| c.to_string().nfc().collect()),
            ComputedForm::Nfd => ch.map(|c| c.to_string().nfd().collect()),
            ComputedForm::Nfkc => ch.map(|c| c.to_string().nfkc().collect()),
            ComputedForm::Nfkd => ch.map(|c| c.to_string().nfkd().collect()),
            ComputedForm::Width => ch.and_then(|c| c.width()).map(|w| w.to_string()),
            ComputedForm::IsNumeric => ch.map(|c| yes_no(category_abbr(c).starts_with('N'))),
            ComputedForm::Decomp => ch.and_then(canonical_decomposition),
            ComputedForm::CombiningClass => {
                ch.map(|c| unicode_normalization::char::canonical_combining_class(c).to_string())
            }
            ComputedForm::IsCombining => {
                ch.map(|c| yes_no(unicode_normalization::char::is_combining_mark(c)))
            }
            ComputedForm::IsControl => Some(yes_no(cp < 0x20 || (0x7F..=0x9F).contains(&cp))),
        }
    }
}

impl fmt::Display for ComputedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

fn yes_no(flag: bool) -> String {
    let word = if flag { "YES" } else { "NO" };
    word.to_string()
}

fn utf8_bytes(c: char, prefix: &str) -> String {
    let mut buf = [0u8; 4];
    c.encode_utf8(&mut buf)
        .bytes()
        .map(|b| format!("{}{:02x}", prefix, b))
        .collect()
}

fn canonical_decomposition(c: char) -> Option<String> {
    let mut parts = Vec::new();
    unicode_normalization::char::decompose_canonical(c, |d| parts.push(d));
    if parts.len() == 1 && parts[0] == c {
        return None;
    }
    Some(
        parts
            .iter()
            .map(|d| format!("{:04X}", *d as u32))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// C0 control abbreviations, `0x00..=0x20`.
pub const C0_NAMES: [&str; 33] = [
    "NUL", "SOH", "STX", "ETX", "EOT", "ENQ", "ACK", "BEL", "BS", "HT", "LF", "VT", "FF", "CR",
    "SO", "SI", "DLE", "DC1", "DC2", "DC3", "DC4", "NAK", "SYN", "ETB", "CAN", "EM", "SUB", "ESC",
    "FS", "GS", "RS", "US", "SP",
];

/// C1 control abbreviations, `0x80..=0xA0`.
pub const C1_NAMES: [&str; 33] = [
    "PAD", "HOP", "BPH", "NBH", "IND", "NEL", "SSA", "ESA", "HTS", "HTJ", "VTS", "PLD", "PLU",
    "RI", "SS2", "SS3", "DCS", "PU1", "PU2", "STS", "CCH", "MW", "SPA", "EPA", "SOS", "SGC",
    "SCI", "CSI", "ST", "OSC", "PM", "APC", "NBS",
];

fn control_mnemonic(cp: u32) -> Option<&'static str> {
    match cp {
        0x00..=0x20 => Some(C0_NAMES[cp as usize]),
        0x7F => Some("DEL"),
        0x80..=0xA0 => Some(C1_NAMES[(cp - 0x80) as usize]),
        _ => None,
    }
}

/// The Control Pictures block has one symbol per C0 control, space, and DEL.
fn control_picture(cp: u32) -> Option<char> {
    match cp {
        0x00..=0x20 => char::from_u32(0x2400 + cp),
        0x7F => Some('\u{2421}'),
        _ => None,
    }
}

/// Two-letter general category abbreviation.
#[must_use]
pub fn category_abbr(c: char) -> &'static str {
    match GeneralCategory::of(c) {
        GeneralCategory::UppercaseLetter => "Lu",
        GeneralCategory::LowercaseLetter => "Ll",
        GeneralCategory::TitlecaseLetter => "Lt",
        GeneralCategory::ModifierLetter => "Lm",
        GeneralCategory::OtherLetter => "Lo",
        GeneralCategory::NonspacingMark => "Mn",
        GeneralCategory::SpacingMark => "Mc",
        GeneralCategory::EnclosingMark => "Me",
        GeneralCategory::DecimalNumber => "Nd",
        GeneralCategory::LetterNumber => "Nl",
        GeneralCategory::OtherNumber => "No",
        GeneralCategory::ConnectorPunctuation => "Pc",
        GeneralCategory::DashPunctuation => "Pd",
        GeneralCategory::OpenPunctuation => "Ps",
        GeneralCategory::ClosePunctuation => "Pe",
        GeneralCategory::InitialPunctuation => "Pi",
        GeneralCategory::FinalPunctuation => "Pf",
        GeneralCategory::OtherPunctuation => "Po",
        GeneralCategory::MathSymbol => "Sm",
        GeneralCategory::CurrencySymbol => "Sc",
        GeneralCategory::ModifierSymbol => "Sk",
        GeneralCategory::OtherSymbol => "So",
        GeneralCategory::SpaceSeparator => "Zs",
        GeneralCategory::LineSeparator => "Zl",
        GeneralCategory::ParagraphSeparator => "Zp",
        GeneralCategory::Control => "Cc",
        GeneralCategory::Format => "Cf",
        GeneralCategory::Surrogate => "Cs",
        GeneralCategory::PrivateUse => "Co",
        GeneralCategory::Unassigned => "Cn",
    }
}

/// Descriptive names for general categories, keyed by abbreviation.
pub const CATEGORY_NAMES: &[(&str, &str)] = &[
    ("Cc", "Other, Control"),
    ("Cf", "Other, Format"),
    ("Cn", "Other, Not Assigned"),
    ("Co", "Other, Private Use"),
    ("Cs", "Other, Surrogate"),
    ("Ll", "Letter, Lowercase"),
    ("Lm", "Letter, Modifier"),
    ("Lo", "Letter, Other"),
    ("Lt", "Letter, Titlecase"),
    ("Lu", "Letter, Uppercase"),
    ("Mc", "Mark, Spacing Combining"),
    ("Me", "Mark, Enclosing"),
    ("Mn", "Mark, Nonspacing"),
    ("Nd", "Number, Decimal Digit"),
    ("Nl", "Number, Letter"),
    ("No", "Number, Other"),
    ("Pc", "Punctuation, Connector"),
    ("Pd", "Punctuation, Dash"),
    ("Pe", "Punctuation, Close"),
    ("Pf", "Punctuation, Final quote"),
    ("Pi", "Punctuation, Initial quote"),
    ("Po", "Punctuation, Other"),
    ("Ps", "Punctuation, Open"),
    ("Sc", "Symbol, Currency"),
    ("Sk", "Symbol, Modifier"),
    ("Sm", "Symbol, Math"),
    ("So", "Symbol, Other"),
    ("Zl", "Separator, Line"),
    ("Zp", "Separator, Paragraph"),
    ("Zs", "Separator, Space"),
];

fn category_name(abbr: &str) -> Option<&'static str> {
    CATEGORY_NAMES
        .iter()
        .find(|(a, _)| *a == abbr)
        .map(|(_, name)| *name)
}

#[must_use]
pub fn plane_name(plane: u32) -> &'static str {
    match plane {
        0 => "Basic Multilingual",
        1 => "Supplementary Multilingual",
        2 => "Supplementary Ideographic",
        3 => "Tertiary Ideographic",
        14 => "Supplementary Special-purpose",
        15 => "Supplementary Private Use Area A",
        16 => "Supplementary Private Use Area B",
        _ => "Unassigned",
    }
}

/// One row of the `--help-codes` table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeRow {
    pub mnemonic: Option<char>,
    pub name: &'static str,
    pub kind: StandardKind,
    pub evaluation: Evaluation,
    /// The form applied to U+00E2, or `None` where it is undefined or a lookup.
    pub example: Option<String>,
}

/// Rows describing every computed form, in catalogue order.
#[must_use]
pub fn codes_table() -> Vec<CodeRow> {
    ComputedForm::ALL
        .iter()
        .map(|form| CodeRow {
            mnemonic: form.mnemonic(),
            name: form.long_name(),
            kind: form.kind(),
            evaluation: form.evaluation(),
            example: form.compute(EXAMPLE_CODE_POINT),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mnemonics_and_names_are_a_bijection() {
        let names: HashSet<_> = ComputedForm::ALL.iter().map(|f| f.long_name()).collect();
        assert_eq!(names.len(), ComputedForm::ALL.len());

        let mnemonics: Vec<_> = ComputedForm::ALL.iter().filter_map(|f| f.mnemonic()).collect();
        let unique: HashSet<_> = mnemonics.iter().collect();
        assert_eq!(unique.len(), mnemonics.len());

        for form in ComputedForm::ALL {
            assert_eq!(ComputedForm::from_name(form.long_name()), Some(form));
            if let Some(m) = form.mnemonic() {
                assert_eq!(ComputedForm::from_mnemonic(m), Some(form));
            }
        }
    }

    #[test]
    fn test_arithmetic_forms_for_acirc() {
        let cases = [
            (ComputedForm::Slash0, "\\x{e2}"),
            (ComputedForm::Slash2, "\\xe2"),
            (ComputedForm::Slash4, "\\u00e2"),
            (ComputedForm::Slash8, "\\U000000e2"),
            (ComputedForm::DecEntity, "&#226;"),
            (ComputedForm::HexEntity, "&#xe2;"),
            (ComputedForm::BinInt, "0b11100010"),
            (ComputedForm::OctInt, "342"),
            (ComputedForm::DecInt, "226"),
            (ComputedForm::HexInt, "0xe2"),
            (ComputedForm::UPlus, "U+00E2"),
            (ComputedForm::Utf8, "\\xc3\\xa2"),
            (ComputedForm::Uri, "%c3%a2"),
            (ComputedForm::PlaneNumber, "0"),
            (ComputedForm::PlaneName, "Basic Multilingual"),
        ];
        for (form, expected) in cases {
            assert_eq!(form.compute(0xE2).as_deref(), Some(expected), "{}", form);
        }
    }

    #[test]
    fn test_library_forms_for_acirc() {
        assert_eq!(
            ComputedForm::UName.compute(0xE2).as_deref(),
            Some("LATIN SMALL LETTER A WITH CIRCUMFLEX")
        );
        assert_eq!(
            ComputedForm::UNorm.compute(0xE2).as_deref(),
            Some("LATIN_SMALL_LETTER_A_WITH_CIRCUMFLEX")
        );
        assert_eq!(ComputedForm::CategoryAbbr.compute(0xE2).as_deref(), Some("Ll"));
        assert_eq!(
            ComputedForm::CategoryName.compute(0xE2).as_deref(),
            Some("Letter, Lowercase")
        );
        assert_eq!(ComputedForm::ScriptName.compute(0xE2).as_deref(), Some("Latin"));
        assert_eq!(
            ComputedForm::BlockName.compute(0xE2).as_deref(),
            Some("Latin-1 Supplement")
        );
        assert_eq!(ComputedForm::Nfd.compute(0xE2).as_deref(), Some("a\u{302}"));
        assert_eq!(ComputedForm::Nfc.compute(0xE2).as_deref(), Some("\u{e2}"));
        assert_eq!(ComputedForm::Decomp.compute(0xE2).as_deref(), Some("0061 0302"));
        assert_eq!(ComputedForm::Decomp.compute(0x61), None);
        assert_eq!(ComputedForm::Width.compute(0x61).as_deref(), Some("1"));
        assert_eq!(ComputedForm::Width.compute(0x4E00).as_deref(), Some("2"));
        assert_eq!(ComputedForm::IsNumeric.compute(0x37).as_deref(), Some("YES"));
        assert_eq!(ComputedForm::IsNumeric.compute(0xE2).as_deref(), Some("NO"));
        assert_eq!(ComputedForm::CombiningClass.compute(0x302).as_deref(), Some("230"));
        assert_eq!(ComputedForm::IsCombining.compute(0x302).as_deref(), Some("YES"));
    }

    #[test]
    fn test_undefined_forms() {
        assert_eq!(ComputedForm::Slash2.compute(0x100), None);
        assert_eq!(ComputedForm::Slash4.compute(0x1F600), None);
        assert_eq!(ComputedForm::Mnemonic.compute(0x41), None);
        assert_eq!(ComputedForm::ControlPic.compute(0x41), None);
        assert_eq!(ComputedForm::Literal.compute(0xD800), None);
        assert_eq!(ComputedForm::UName.compute(0xE000), None);
        assert_eq!(ComputedForm::NamedEntity.compute(0xE2), None);
        assert_eq!(ComputedForm::HexInt.compute(0x110000), None);
    }

    #[test]
    fn test_controls() {
        assert_eq!(ComputedForm::Mnemonic.compute(0x0A).as_deref(), Some("LF"));
        assert_eq!(ComputedForm::Mnemonic.compute(0x20).as_deref(), Some("SP"));
        assert_eq!(ComputedForm::Mnemonic.compute(0x85).as_deref(), Some("NEL"));
        assert_eq!(ComputedForm::ControlPic.compute(0x0A).as_deref(), Some("\u{240A}"));
        assert_eq!(ComputedForm::IsControl.compute(0x9F).as_deref(), Some("YES"));
        assert_eq!(ComputedForm::IsControl.compute(0xA0).as_deref(), Some("NO"));
    }

    #[test]
    fn test_planes() {
        assert_eq!(ComputedForm::PlaneNumber.compute(0x1F600).as_deref(), Some("1"));
        assert_eq!(plane_name(16), "Supplementary Private Use Area B");
        assert_eq!(plane_name(7), "Unassigned");
    }

    #[test]
    fn test_every_category_has_a_name() {
        for (abbr, _) in CATEGORY_NAMES {
            assert!(category_name(abbr).is_some());
        }
        assert_eq!(CATEGORY_NAMES.len(), 30);
    }

    #[test]
    fn test_codes_table() {
        let rows = codes_table();
        assert_eq!(rows.len(), ComputedForm::ALL.len());
        let hex = rows.iter().find(|r| r.name == "HEXINT").unwrap();
        assert_eq!(hex.mnemonic, Some('x'));
        assert_eq!(hex.evaluation, Evaluation::Arithmetic);
        assert_eq!(hex.example.as_deref(), Some("0xe2"));
        let named = rows.iter().find(|r| r.name == "NAMEDENTITY").unwrap();
        assert_eq!(named.evaluation, Evaluation::Lookup);
        assert_eq!(named.example, None);
    }
}
