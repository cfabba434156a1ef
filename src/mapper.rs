//! Cross-standard maps and text conversion.
//!
//! [`StandardMapper::build_map`] pairs the value of one standard with the
//! value of another for every record that has both, e.g. LaTeX macro to HTML
//! entity name. Records are visited in ascending code point order and the
//! lowest code point wins when two records share a source value; the losers
//! are kept in the [`MapReport`].
//!
//! ```rust
//! use strfchr::{PropertyRegistry, StandardMapper, StandardName, Value};
//!
//! let mut registry = PropertyRegistry::new();
//! registry.put(0x2022, "latex", Value::from("\\textbullet"));
//! registry.put(0x2022, StandardName::entity("html4-symbol"), Value::from("bull"));
//!
//! let map = StandardMapper::new(&registry).build_map("latex", "entity.html4-symbol");
//! assert_eq!(map.get("\\textbullet"), Some("bull"));
//! ```

use crate::fallback::{apply_policy, FallbackRequest, FallbackResolver};
use crate::{
    ConvertOptions, FallbackPolicy, FallbackStep, PropertyRegistry, RenderOptions, StandardName,
};
use indexmap::IndexMap;
use std::fmt::Write as _;
use serde::Serialize;
use tracing::{info, warn};

/// A source value claimed by more than one record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Ambiguity {
    pub key: String,
    /// Code point whose target value was kept.
    pub kept: u32,
    /// Code point whose target value was dropped.
    pub dropped: u32,
}

/// What happened while building one map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MapReport {
    pub source: String,
    pub target: String,
    pub mapped: usize,
    /// Records without the source standard.
    pub source_missing: usize,
    /// Records with the source standard but not the target.
    pub target_missing: usize,
    pub ambiguities: Vec<Ambiguity>,
}

/// A flat, unique-key map from source values to target values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StandardMap {
    entries: IndexMap<String, String>,
    #[serde(skip)]
    code_points: IndexMap<String, u32>,
    report: MapReport,
}

impl StandardMap {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs in ascending code point order of the record that produced them.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// The code point whose record produced the pair for `key`.
    #[must_use]
    pub fn code_point(&self, key: &str) -> Option<u32> {
        self.code_points.get(key).copied()
    }

    #[must_use]
    pub fn report(&self) -> &MapReport {
        &self.report
    }

    /// A standalone LaTeX document listing every pair, sorted by source value.
    ///
    /// Source values are shown verbatim, code points as `U+XXXX`, and entity
    /// names as `&name;`.
    ///
    /// ```rust
    /// use strfchr::{PropertyRegistry, StandardMapper, StandardName, Value};
    ///
    /// let mut registry = PropertyRegistry::new();
    /// registry.put(0x2022, "latex", Value::from("\\textbullet"));
    /// registry.put(0x2022, StandardName::entity("html4-symbol"), Value::from("bull"));
    ///
    /// let chart = StandardMapper::new(&registry)
    ///     .build_map("latex", "entity.html4-symbol")
    ///     .latex_chart();
    /// assert!(chart.contains("\\verb|\\textbullet| & U+2022 & \\&bull; \\\\"));
    /// ```
    #[must_use]
    pub fn latex_chart(&self) -> String {
        let entity_target = StandardName::new(self.report.target.as_str())
            .entity_set()
            .is_some();
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();

        let mut chart = String::new();
        chart.push_str("\\documentclass{article}\n");
        chart.push_str("\\usepackage{longtable}\n");
        let _ = writeln!(
            chart,
            "\\title{{{} to {}}}",
            latex_text(&self.report.source),
            latex_text(&self.report.target)
        );
        chart.push_str("\\begin{document}\n\\maketitle\n");
        chart.push_str("\\begin{longtable}{lll}\n");
        let _ = writeln!(
            chart,
            "{} & Code point & {} \\\\",
            latex_text(&self.report.source),
            latex_text(&self.report.target)
        );
        chart.push_str("\\hline\n");
        for key in keys {
            let value = &self.entries[key.as_str()];
            let shown = if entity_target {
                format!("&{};", value)
            } else {
                value.clone()
            };
            let cp = self.code_points.get(key.as_str()).copied().unwrap_or_default();
            let _ = writeln!(
                chart,
                "{} & U+{:04X} & {} \\\\",
                latex_verbatim(key),
                cp,
                latex_text(&shown)
            );
        }
        chart.push_str("\\end{longtable}\n\\end{document}\n");
        chart
    }
}

/// `\verb` with a delimiter the text does not contain, else escaped text.
fn latex_verbatim(text: &str) -> String {
    match ['|', '!', '+', '=', '"', '@'].iter().find(|d| !text.contains(**d)) {
        Some(d) => format!("\\verb{}{}{}", d, text, d),
        None => latex_text(text),
    }
}

fn latex_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash{}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Read-only views across standards of one registry.
#[derive(Clone, Copy, Debug)]
pub struct StandardMapper<'a> {
    registry: &'a PropertyRegistry,
}

impl<'a> StandardMapper<'a> {
    #[must_use]
    pub fn new(registry: &'a PropertyRegistry) -> Self {
        StandardMapper { registry }
    }

    /// Maps values of `source` to values of `target`.
    #[must_use]
    pub fn build_map(&self, source: &str, target: &str) -> StandardMap {
        let mut entries = IndexMap::new();
        let mut winners: IndexMap<String, u32> = IndexMap::new();
        let mut report = MapReport {
            source: source.to_string(),
            target: target.to_string(),
            ..MapReport::default()
        };

        for record in self.registry.all() {
            let Some(key) = record.get(source) else {
                report.source_missing += 1;
                continue;
            };
            let Some(value) = record.get(target) else {
                report.target_missing += 1;
                continue;
            };
            let key = key.to_string();
            if let Some(&kept) = winners.get(&key) {
                report.ambiguities.push(Ambiguity {
                    key,
                    kept,
                    dropped: record.code_point,
                });
                continue;
            }
            winners.insert(key.clone(), record.code_point);
            entries.insert(key, value.to_string());
        }
        report.mapped = entries.len();

        if report.target_missing > 0 {
            info!(
                source,
                target,
                count = report.target_missing,
                "records with a source value but no target value"
            );
        }
        if !report.ambiguities.is_empty() {
            warn!(
                source,
                target,
                count = report.ambiguities.len(),
                "source values shared by several characters, lowest code point kept"
            );
        }
        info!(source, target, mapped = report.mapped, "map built");

        StandardMap {
            entries,
            code_points: winners,
            report,
        }
    }

    /// Rewrites `text` with every non-ASCII or non-printable character
    /// replaced by its value in `target`, wrapped in the prefix and suffix.
    ///
    /// `target` is a standard name or a computed form (long name or
    /// mnemonic), read the same way as a fallback chain step. Characters
    /// without a value go through `options.fallback`;
    /// [`FallbackPolicy::LeaveUnchanged`] keeps the character as it was.
    ///
    /// ```rust
    /// use strfchr::{ConvertOptions, PropertyRegistry, StandardMapper, StandardName, Value};
    ///
    /// let mut registry = PropertyRegistry::new();
    /// registry.put(0x2022, StandardName::entity("isopub"), Value::from("bull"));
    ///
    /// let mapper = StandardMapper::new(&registry);
    /// let out = mapper.convert_text("a \u{2022} b \u{e2}", "entity.isopub", &ConvertOptions::entity());
    /// assert_eq!(out, "a &bull; b \u{e2}");
    ///
    /// let out = mapper.convert_text("a \u{e2}", "SLASH4", &ConvertOptions::new());
    /// assert_eq!(out, "a \\u00e2");
    /// ```
    #[must_use]
    pub fn convert_text(&self, text: &str, target: &str, options: &ConvertOptions) -> String {
        let target = FallbackStep::parse(target);
        let render_options = RenderOptions::default();
        let resolver = FallbackResolver::new(self.registry, &render_options);
        let mut output = String::with_capacity(text.len());
        for ch in text.chars() {
            if is_plain_ascii(ch) {
                output.push(ch);
                continue;
            }
            let cp = ch as u32;
            match resolver.evaluate(&target, cp) {
                Some(value) => {
                    output.push_str(&options.prefix);
                    output.push_str(&value);
                    output.push_str(&options.suffix);
                }
                None if options.fallback == FallbackPolicy::LeaveUnchanged => output.push(ch),
                None => {
                    let token = ch.to_string();
                    output.push_str(&apply_policy(options.fallback, &FallbackRequest::new(cp, &token)));
                }
            }
        }
        output
    }
}

fn is_plain_ascii(ch: char) -> bool {
    ch == ' ' || ch == '\n' || ch == '\t' || ch == '\r' || ch.is_ascii_graphic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    fn registry() -> PropertyRegistry {
        let mut registry = PropertyRegistry::new();
        registry.put(0x2022, "latex", Value::from("\\textbullet"));
        registry.put(0x2022, StandardName::entity("html4-symbol"), Value::from("bull"));
        registry.put(0x2219, "latex", Value::from("\\textbullet"));
        registry.put(0x2219, StandardName::entity("html4-symbol"), Value::from("bulletop"));
        registry.put(0x3B1, "latex", Value::from("\\alpha"));
        registry.put(0x3B2, StandardName::entity("html4-symbol"), Value::from("beta"));
        registry
    }

    #[test]
    fn test_lowest_code_point_wins() {
        let registry = registry();
        let map = StandardMapper::new(&registry).build_map("latex", "entity.html4-symbol");
        assert_eq!(map.get("\\textbullet"), Some("bull"));
        assert_eq!(map.len(), 1);

        let report = map.report();
        assert_eq!(report.mapped, 1);
        assert_eq!(report.source_missing, 1);
        assert_eq!(report.target_missing, 1);
        assert_eq!(
            report.ambiguities,
            vec![Ambiguity {
                key: "\\textbullet".to_string(),
                kept: 0x2022,
                dropped: 0x2219
            }]
        );
    }

    #[test]
    fn test_unknown_standards_give_empty_map() {
        let registry = registry();
        let map = StandardMapper::new(&registry).build_map("Klingon", "latex");
        assert!(map.is_empty());
        assert_eq!(map.report().source_missing, registry.size());
    }

    #[test]
    fn test_map_serializes() {
        let registry = registry();
        let map = StandardMapper::new(&registry).build_map("entity.html4-symbol", "latex");
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["entries"]["bull"], "\\textbullet");
        assert_eq!(json["report"]["target_missing"], 1);
    }

    #[test]
    fn test_convert_text_policies() {
        let registry = registry();
        let mapper = StandardMapper::new(&registry);
        let latex = ConvertOptions::new().with_suffix("{}");
        assert_eq!(
            mapper.convert_text("\u{3b1}+\u{3b2}", "latex", &latex),
            "\\alpha{}+\u{3b2}"
        );
        let hex = ConvertOptions::new().with_fallback(FallbackPolicy::NumericCharRefHex);
        assert_eq!(mapper.convert_text("\u{3b2}\u{7}", "latex", &hex), "&#x3b2;&#x7;");
        assert_eq!(mapper.convert_text("plain text\n", "latex", &hex), "plain text\n");
    }

    #[test]
    fn test_convert_text_to_computed_form() {
        let registry = registry();
        let mapper = StandardMapper::new(&registry);
        let plain = ConvertOptions::new();
        assert_eq!(mapper.convert_text("\u{e2}", "SLASH4", &plain), "\\u00e2");
        assert_eq!(mapper.convert_text("x\u{2022}", "4", &plain), "x\\u2022");
        let hex = ConvertOptions::new().with_fallback(FallbackPolicy::NumericCharRefHex);
        assert_eq!(
            mapper.convert_text("\u{e2}\u{1d400}", "SLASH4", &hex),
            "\\u00e2&#x1d400;"
        );
        // named entities search the default entity sets
        assert_eq!(mapper.convert_text("\u{2022}\u{3b1}", "N", &plain), "&bull;\u{3b1}");
    }

    #[test]
    fn test_code_points_follow_winners() {
        let registry = registry();
        let map = StandardMapper::new(&registry).build_map("latex", "entity.html4-symbol");
        assert_eq!(map.code_point("\\textbullet"), Some(0x2022));
        assert_eq!(map.code_point("\\alpha"), None);
    }

    #[test]
    fn test_latex_chart() {
        let mut registry = registry();
        registry.put(0x3B2, "latex", Value::from("\\beta"));
        registry.put(0xA7, "latex", Value::from("\\S|x"));
        registry.put(0xA7, StandardName::entity("html4-symbol"), Value::from("sect"));
        let chart = StandardMapper::new(&registry)
            .build_map("latex", "entity.html4-symbol")
            .latex_chart();

        assert!(chart.starts_with("\\documentclass{article}\n"));
        assert!(chart.contains("\\title{latex to entity.html4-symbol}"));
        assert!(chart.trim_end().ends_with("\\end{document}"));
        let rows: Vec<&str> = chart.lines().filter(|l| l.contains(" & U+")).collect();
        assert_eq!(
            rows,
            vec![
                "\\verb!\\S|x! & U+00A7 & \\&sect; \\\\",
                "\\verb|\\beta| & U+03B2 & \\&beta; \\\\",
                "\\verb|\\textbullet| & U+2022 & \\&bull; \\\\",
            ]
        );
    }

    #[test]
    fn test_latex_chart_escapes_plain_targets() {
        let mut registry = PropertyRegistry::new();
        registry.put(0x25, StandardName::entity("isonum"), Value::from("percnt"));
        registry.put(0x25, "latex", Value::from("\\%"));
        let chart = StandardMapper::new(&registry)
            .build_map("entity.isonum", "latex")
            .latex_chart();
        assert!(chart.contains("\\verb|percnt| & U+0025 & \\textbackslash{}\\% \\\\"));
        assert!(chart.contains("\\title{entity.isonum to latex}"));
    }
}
