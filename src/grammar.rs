//! Template language and source format reference
//!
//! This module only holds documentation for the two inputs the crate reads:
//! templates and the `charlist` character database.
//!
//! # Templates
//!
//! ```text
//! template  = { literal | code } ;
//! code      = "%" mnemonic | "%{" name "}" | "%%" ;
//! mnemonic  = any single character ;
//! name      = computed form long name | standard name ;
//! ```
//!
//! A `%` at the very end of a template, or a `%{` without a closing `}`,
//! is a template error. A mnemonic or name that means nothing is an
//! unknown-code error for the whole render: there is no partial output.
//!
//! ## Computed forms
//!
//! | code | name           | U+00E2                 | undefined for               |
//! |------|----------------|------------------------|-----------------------------|
//! | `l`  | `LITERAL`      | `â`                    | surrogates                  |
//! | `0`  | `SLASH0`       | `\x{e2}`               |                             |
//! | `2`  | `SLASH2`       | `\xe2`                 | above U+00FF                |
//! | `4`  | `SLASH4`       | `\u00e2`               | above U+FFFF                |
//! | `8`  | `SLASH8`       | `\U000000e2`           |                             |
//! | `D`  | `DECENTITY`    | `&#226;`               |                             |
//! | `X`  | `HEXENTITY`    | `&#xe2;`               |                             |
//! | `N`  | `NAMEDENTITY`  | `&acirc;`              | no name in searched sets    |
//! | `b`  | `BININT`       | `0b11100010`           |                             |
//! | `o`  | `OCTINT`       | `342`                  |                             |
//! | `d`  | `DECINT`       | `226`                  |                             |
//! | `x`  | `HEXINT`       | `0xe2`                 |                             |
//! | `u`  | `UNORM`        | `LATIN_SMALL_LETTER_A_WITH_CIRCUMFLEX` | unnamed     |
//! | `U`  | `UNAME`        | `LATIN SMALL LETTER A WITH CIRCUMFLEX` | unnamed     |
//! | `+`  | `UPLUS`        | `U+00E2`               |                             |
//! | `f`  | `UTF8`         | `\xc3\xa2`             | surrogates                  |
//! | `F`  | `URI`          | `%c3%a2`               | surrogates                  |
//! | `M`  | `MNEMONIC`     |                        | everything but controls     |
//! | `m`  | `CONTROLPIC`   |                        | everything but C0, SP, DEL  |
//! | `B`  | `BLOCKNAME`    | `Latin-1 Supplement`   | surrogates                  |
//! | `g`  | `CATEGORYABBR` | `Ll`                   | surrogates                  |
//! | `G`  | `CATEGORYNAME` | `Letter, Lowercase`    | surrogates                  |
//! | `p`  | `PLANENUMBER`  | `0`                    |                             |
//! | `P`  | `PLANENAME`    | `Basic Multilingual`   |                             |
//! | `S`  | `SCRIPTNAME`   | `Latin`                | surrogates                  |
//! | `c`  | `NFC`          | `â`                    | surrogates                  |
//! | `C`  | `NFD`          | `a` + U+0302           | surrogates                  |
//! | `k`  | `NFKC`         | `â`                    | surrogates                  |
//! | `K`  | `NFKD`         | `a` + U+0302           | surrogates                  |
//! | `w`  | `WIDTH`        | `1`                    | controls                    |
//! | `#`  | `ISNUMERIC`    | `NO`                   | surrogates                  |
//! |      | `DECOMP`       | `0061 0302`            | no canonical decomposition  |
//! |      | `COMBININGCLASS` | `0`                  | surrogates                  |
//! |      | `ISCOMBINING`  | `NO`                   | surrogates                  |
//! |      | `ISCONTROL`    | `NO`                   |                             |
//!
//! Where a form is undefined the fallback chain and then the fallback
//! policy take over, exactly as for a missing standard.
//!
//! ## Standards
//!
//! `%{NAME}` looks `NAME` up in the registry. `NAME` must be one of the
//! loader's tags (`latex`, `afii`, `font`, `mode`, ...), any
//! `entity.<set>`, or a standard some record actually carries. Values are
//! printed as stored; a font position prints as `<font name> <position>`.
//!
//! # Source document
//!
//! ```text
//! <?xml version="1.0"?>
//! <!DOCTYPE charlist SYSTEM "unicode.dtd">
//! <charlist>
//!   <character id="U02022" dec="8226" mode="text" type="punctuation">
//!     <afii>EB6E</afii>
//!     <latex>\textbullet</latex>
//!     <font name="hlcra" pos="1"/>
//!     <entity id="bull" set="8879-isopub">
//!       <desc>=round bullet, filled</desc>
//!     </entity>
//!     <description unicode="1.1">BULLET</description>
//!   </character>
//!   ...
//! </charlist>
//! ```
//!
//! **Rules**:
//! - The root element must be `charlist`.
//! - `id` is `U` and exactly five hex digits; `dec` is the same number in
//!   decimal. Anything else skips the character.
//! - An `id` with a `-` in it names a sequence of code points
//!   (`U0003C-020D2`); those are skipped and counted separately.
//! - Loose text directly inside `character` is a structural error.
//! - `entity` sets with several published names (`8879-isogrk3`,
//!   `9573-13-isogrk3`, ...) are folded onto one canonical name where the
//!   alias table says so.
//! - `font` positions are decimal and below `0x1FFFF`.
