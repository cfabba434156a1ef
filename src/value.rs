//! Property values stored in the registry.
//!
//! Most standards carry a plain string (`\textbullet`, `bull`, `EB6E`). Font
//! positions are the one composite value: a font name plus an integer slot.
//!
//! ```rust
//! use strfchr::Value;
//!
//! let latex = Value::from("\\textbullet");
//! assert_eq!(latex.as_str(), Some("\\textbullet"));
//!
//! let font = Value::font("hlcra", 1);
//! assert!(font.is_font());
//! assert_eq!(font.to_string(), "hlcra 1");
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// Exclusive upper bound for a font position.
pub const FONT_POSITION_LIMIT: u32 = 0x1FFFF;

/// A property value: either text or a `(font name, position)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Text(String),
    Font { name: String, position: u32 },
}

impl Value {
    /// Builds a font value. The caller is responsible for range-checking
    /// `position` against [`FONT_POSITION_LIMIT`].
    #[must_use]
    pub fn font(name: impl Into<String>, position: u32) -> Self {
        Value::Font {
            name: name.into(),
            position,
        }
    }

    /// Returns `true` if the value is text.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns `true` if the value is a font position.
    #[inline]
    #[must_use]
    pub const fn is_font(&self) -> bool {
        matches!(self, Value::Font { .. })
    }

    /// If the value is text, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strfchr::Value;
    ///
    /// assert_eq!(Value::from("bull").as_str(), Some("bull"));
    /// assert_eq!(Value::font("cmr10", 7).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Font { .. } => None,
        }
    }

    /// If the value is a font position, returns `(name, position)`.
    #[inline]
    #[must_use]
    pub fn as_font(&self) -> Option<(&str, u32)> {
        match self {
            Value::Font { name, position } => Some((name, *position)),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Font { name, position } => write!(f, "{} {}", name, position),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Text(s) => serializer.serialize_str(s),
            Value::Font { name, position } => {
                use serde::ser::SerializeStruct;
                let mut st = serializer.serialize_struct("Font", 2)?;
                st.serialize_field("name", name)?;
                st.serialize_field("position", position)?;
                st.end()
            }
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(crate::Error::custom(format!(
                "expected text, found {:?}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::from("\\bullet").to_string(), "\\bullet");
        assert_eq!(Value::font("hlcra", 1).to_string(), "hlcra 1");
    }

    #[test]
    fn test_accessors() {
        let font = Value::font("cmsy10", 15);
        assert_eq!(font.as_font(), Some(("cmsy10", 15)));
        assert!(!font.is_text());

        let text = Value::from("bull".to_string());
        assert!(text.is_text());
        assert_eq!(text.as_font(), None);
    }

    #[test]
    fn test_tryfrom_string() {
        let s: String = String::try_from(Value::from("x")).unwrap();
        assert_eq!(s, "x");
        assert!(String::try_from(Value::font("f", 1)).is_err());
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_string(&Value::from("bull")).unwrap(),
            "\"bull\""
        );
        assert_eq!(
            serde_json::to_string(&Value::font("hlcra", 1)).unwrap(),
            r#"{"name":"hlcra","position":1}"#
        );
    }
}
