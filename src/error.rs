//! Error types for loading the character database and rendering templates.
//!
//! Only two kinds of problem ever reach a caller as an [`Error`]:
//!
//! - **Structural errors** in the source document (wrong root element, broken
//!   markup). These abort the whole load, since they mean the file format itself
//!   is not what the loader understands.
//! - **Render errors** (malformed template, unknown format code, code point out
//!   of range). These fail one render call and leave the registry untouched.
//!
//! Record-level problems (bad identifiers, combination characters, malformed
//! font positions, duplicate properties) are logged and counted in
//! [`LoadSummary`](crate::LoadSummary) instead.
//!
//! ## Examples
//!
//! ```rust
//! use strfchr::{load_from_str, Error};
//!
//! let result = load_from_str("<unicode><charlist/></unicode>");
//! assert!(matches!(result, Err(Error::Structural { .. })));
//!
//! if let Err(err) = result {
//!     // Structural messages carry line and column information
//!     assert!(err.to_string().contains("line 1"));
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// All errors that can escape a load or a render call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error while reading the source document
    #[error("IO error: {0}")]
    Io(String),

    /// The source document does not have the expected shape
    #[error("Structural error at line {line}, column {col}: {msg}")]
    Structural { line: usize, col: usize, msg: String },

    /// The template string itself is malformed
    #[error("Template error at offset {pos}: {msg}")]
    Template { pos: usize, msg: String },

    /// A format code names neither a computed form nor a known standard
    #[error("Unknown format code '{0}'")]
    UnknownFormatCode(String),

    /// A code point outside `0..=0x10FFFF` was passed to a render call
    #[error("Code point 0x{0:X} is outside the Unicode range")]
    InvalidCodePoint(u32),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a structural error at the given position in the source document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strfchr::Error;
    ///
    /// let err = Error::structural(10, 5, "expected '>'");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn structural(line: usize, col: usize, msg: &str) -> Self {
        Error::Structural {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates a template syntax error at a byte offset of the template.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strfchr::Error;
    ///
    /// let err = Error::template(3, "unterminated '%{'");
    /// assert!(err.to_string().contains("offset 3"));
    /// ```
    pub fn template(pos: usize, msg: &str) -> Self {
        Error::Template {
            pos,
            msg: msg.to_string(),
        }
    }

    /// Creates an unknown-format-code error for the code as written (`N`, `latexx`, ...).
    pub fn unknown_code(code: &str) -> Self {
        Error::UnknownFormatCode(code.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file reading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for a malformed source document.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Error::Structural { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_message() {
        let err = Error::structural(3, 7, "mismatched end tag");
        assert_eq!(
            err.to_string(),
            "Structural error at line 3, column 7: mismatched end tag"
        );
        assert!(err.is_structural());
    }

    #[test]
    fn test_render_errors_are_not_structural() {
        assert!(!Error::unknown_code("Q").is_structural());
        assert!(!Error::template(0, "lone '%'").is_structural());
        assert!(!Error::InvalidCodePoint(0x110000).is_structural());
        assert!(!Error::io("unicode.xml: No such file or directory").is_structural());
    }

    #[test]
    fn test_invalid_code_point_display() {
        let err = Error::InvalidCodePoint(0x110000);
        assert!(err.to_string().contains("0x110000"));
    }
}
