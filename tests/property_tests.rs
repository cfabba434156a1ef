//! Property-based tests for the registry, loader and renderer invariants.

use proptest::prelude::*;
use strfchr::standard::KNOWN_STANDARDS;
use strfchr::{
    load_from_str, ComputedForm, FallbackPolicy, FallbackRequest, FallbackResolver, FallbackStep,
    FormatInterpreter, PropertyRegistry, RenderOptions, StandardName, Value,
};

/// One `character` element of a generated document.
#[derive(Debug, Clone)]
enum Entry {
    Valid(u32),
    Combination(u32, u32),
    BadIdentifier(u32),
    WrongDecimal(u32),
}

fn entry() -> impl Strategy<Value = Entry> {
    prop_oneof![
        (0u32..0x500).prop_map(Entry::Valid),
        (0u32..0x500, 0x300u32..0x370).prop_map(|(a, b)| Entry::Combination(a, b)),
        (0u32..0x500).prop_map(Entry::BadIdentifier),
        (0u32..0x500).prop_map(Entry::WrongDecimal),
    ]
}

fn document(entries: &[Entry]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\"?>\n<charlist>\n");
    for entry in entries {
        let element = match entry {
            Entry::Valid(cp) => format!(
                "<character id=\"U{:05X}\" dec=\"{}\"><latex>\\x{}</latex></character>",
                cp, cp, cp
            ),
            Entry::Combination(a, b) => format!(
                "<character id=\"U{:05X}-{:05X}\" dec=\"{}-{}\"/>",
                a, b, a, b
            ),
            Entry::BadIdentifier(cp) => format!("<character id=\"U{:04X}\" dec=\"{}\"/>", cp, cp),
            Entry::WrongDecimal(cp) => format!(
                "<character id=\"U{:05X}\" dec=\"{}\"/>",
                cp,
                cp + 1
            ),
        };
        xml.push_str("  ");
        xml.push_str(&element);
        xml.push('\n');
    }
    xml.push_str("</charlist>\n");
    xml
}

fn known_names() -> Vec<String> {
    let mut names: Vec<String> = KNOWN_STANDARDS.iter().map(|(n, _)| n.to_string()).collect();
    names.extend(
        ["isopub", "html4-symbol", "mmlextra", "isogrk3"]
            .iter()
            .map(|set| StandardName::entity(set).as_str().to_string()),
    );
    names
}

fn sample_registry() -> PropertyRegistry {
    let mut registry = PropertyRegistry::new();
    registry.put(0x2022, "latex", Value::from("\\textbullet"));
    registry.put(0x2022, StandardName::entity("isopub"), Value::from("bull"));
    registry.put(0xE2, StandardName::entity("isolat1"), Value::from("acirc"));
    registry.put(0x1D400, "font", Value::font("cmbx10", 65));
    registry
}

fn policy() -> impl Strategy<Value = FallbackPolicy> {
    prop::sample::select(FallbackPolicy::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_second_put_never_changes_value(
        cp in 0u32..=0x10FFFF,
        first in "[a-z]{1,8}",
        second in "[a-z]{1,8}",
    ) {
        let mut registry = PropertyRegistry::new();
        prop_assert!(registry.put(cp, "latex", Value::from(first.as_str())));
        prop_assert!(!registry.put(cp, "latex", Value::from(second.as_str())));
        prop_assert_eq!(registry.get(cp, "latex"), Some(&Value::from(first.as_str())));
        prop_assert_eq!(registry.duplicates_rejected(), 1);
    }

    #[test]
    fn prop_load_conserves_records(entries in prop::collection::vec(entry(), 0..40)) {
        let loaded = load_from_str(&document(&entries)).unwrap();
        let summary = loaded.summary;

        prop_assert_eq!(summary.total_seen, entries.len());
        prop_assert_eq!(
            loaded.registry.size() + summary.combinations_skipped + summary.invalid_skipped,
            summary.total_seen
        );
        prop_assert!(summary.is_conserved());
    }

    #[test]
    fn prop_known_names_always_render(
        cp in 0u32..=0x10FFFF,
        index in any::<prop::sample::Index>(),
        fallback in policy(),
    ) {
        let names = known_names();
        let name = &names[index.index(names.len())];
        let registry = sample_registry();
        let interpreter = FormatInterpreter::new(&registry, RenderOptions::new().with_fallback(fallback));

        let rendered = interpreter.render(cp, &format!("%{{{}}}", name));
        prop_assert!(rendered.is_ok(), "{} at {:#x}: {:?}", name, cp, rendered);
    }

    #[test]
    fn prop_every_computed_form_renders(cp in 0u32..=0x10FFFF) {
        let registry = PropertyRegistry::new();
        let interpreter = FormatInterpreter::new(&registry, RenderOptions::new());
        for form in ComputedForm::ALL {
            let rendered = interpreter.render(cp, &format!("%{{{}}}", form.long_name()));
            prop_assert!(rendered.is_ok());
            prop_assert!(!rendered.unwrap_or_default().is_empty());
        }
    }

    #[test]
    fn prop_fallback_is_idempotent(
        cp in 0u32..=0x10FFFF,
        fallback in policy(),
        with_chain in any::<bool>(),
    ) {
        let registry = sample_registry();
        let mut options = RenderOptions::new().with_fallback(fallback);
        if with_chain {
            options = options
                .with_chain_step(FallbackStep::parse("latex"))
                .with_chain_step(FallbackStep::parse("SLASH2"));
        }
        let resolver = FallbackResolver::new(&registry, &options);
        let request = FallbackRequest::new(cp, "%{afii}");

        prop_assert_eq!(resolver.resolve(&request), resolver.resolve(&request));
    }

    #[test]
    fn prop_slash4_round_trip(cp in 0u32..=0xFFFF) {
        let escaped = ComputedForm::Slash4.compute(cp).unwrap();
        let hex = escaped.strip_prefix("\\u").unwrap();
        prop_assert_eq!(hex.len(), 4);
        let decoded = u32::from_str_radix(hex, 16).unwrap();
        prop_assert_eq!(decoded, cp);
        prop_assert_eq!(ComputedForm::Slash4.compute(decoded), Some(escaped));
    }
}
