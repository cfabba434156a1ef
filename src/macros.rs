/// Builds a [`CharacterRecord`](crate::CharacterRecord) inline.
///
/// Keys are standard names, values anything convertible into
/// [`Value`](crate::Value). As with loading, the first value for a
/// standard wins.
///
/// ```rust
/// use strfchr::{record, PropertyRegistry, Value};
///
/// let bullet = record!(0x2022, {
///     "latex" => "\\textbullet",
///     "entity.isopub" => "bull",
///     "font" => Value::font("hlcra", 1),
/// });
/// assert_eq!(bullet.get("entity.isopub"), Some(&Value::from("bull")));
///
/// let registry: PropertyRegistry = vec![bullet, record!(0x41)].into_iter().collect();
/// assert_eq!(registry.size(), 2);
/// ```
#[macro_export]
macro_rules! record {
    ($cp:expr) => {
        $crate::CharacterRecord::new($cp)
    };

    ($cp:expr, { $($name:literal => $value:expr),* $(,)? }) => {{
        let mut record = $crate::CharacterRecord::new($cp);
        $(
            record
                .properties
                .insert($crate::StandardName::from($name), $crate::Value::from($value));
        )*
        record
    }};
}

#[cfg(test)]
mod tests {
    use crate::{PropertyRegistry, StandardName, Value};

    #[test]
    fn test_record_macro_empty() {
        let record = record!(0xE2);
        assert_eq!(record.code_point, 0xE2);
        assert!(record.properties.is_empty());
    }

    #[test]
    fn test_record_macro_properties() {
        let record = record!(0x2022, {
            "latex" => "\\textbullet",
            "latex" => "\\bullet",
            "afii" => String::from("EB6E"),
        });
        assert_eq!(record.properties.len(), 2);
        assert_eq!(record.get("latex"), Some(&Value::from("\\textbullet")));
        let names: Vec<_> = record.properties.names().map(StandardName::as_str).collect();
        assert_eq!(names, vec!["latex", "afii"]);
    }

    #[test]
    fn test_collect_into_registry() {
        let registry: PropertyRegistry = vec![
            record!(0x42, { "latex" => "B" }),
            record!(0x41, { "latex" => "A" }),
            record!(0x41, { "latex" => "A2", "afii" => "X" }),
        ]
        .into_iter()
        .collect();

        assert_eq!(registry.size(), 2);
        assert_eq!(registry.get(0x41, "latex"), Some(&Value::from("A")));
        assert_eq!(registry.get(0x41, "afii"), Some(&Value::from("X")));
        assert_eq!(registry.duplicates_rejected(), 1);
    }
}
