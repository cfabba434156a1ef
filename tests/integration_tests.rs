use strfchr::{
    load_from_str, FallbackPolicy, FormatInterpreter, LoadOptions, PropertyRegistry,
    RegistryLoader, RenderOptions, StandardMapper, Value,
};

const BULLET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE charlist SYSTEM "unicode.dtd">
<charlist>
  <character id="U02022" dec="8226" mode="text" type="punctuation">
    <latex>\textbullet</latex>
    <entity id="bull" set="html4-symbol"/>
  </character>
</charlist>"#;

#[test]
fn test_bullet_latex_and_entity_map() {
    let loaded = load_from_str(BULLET).unwrap();
    let registry = &loaded.registry;

    assert_eq!(
        registry.get(0x2022, "latex"),
        Some(&Value::from("\\textbullet"))
    );

    let map = StandardMapper::new(registry).build_map("latex", "entity.html4-symbol");
    assert_eq!(map.get("\\textbullet"), Some("bull"));
    assert_eq!(map.len(), 1);
    assert!(map.report().ambiguities.is_empty());
}

#[test]
fn test_combination_record_is_skipped() {
    let xml = r#"<charlist>
  <character id="U02022" dec="8226"><latex>\textbullet</latex></character>
  <character id="U0003C-020D2" dec="60-8402"><latex>\nvlt</latex></character>
</charlist>"#;
    let without = load_from_str(BULLET).unwrap();
    let with = load_from_str(xml).unwrap();

    assert_eq!(with.summary.combinations_skipped, 1);
    assert_eq!(with.registry.size(), without.registry.size());
    assert!(with.summary.is_conserved());
}

#[test]
fn test_missing_entity_falls_back_to_hex() {
    let registry = PropertyRegistry::new();
    let options = RenderOptions::new().with_fallback(FallbackPolicy::NumericCharRefHex);
    let interpreter = FormatInterpreter::new(&registry, options);

    assert_eq!(interpreter.render(0xE2, "%x %N").unwrap(), "0xe2 &#xe2;");
}

#[test]
fn test_bad_font_position_is_dropped() {
    let xml = r#"<charlist>
  <character id="U02022" dec="8226">
    <font name="hlcra" pos="40)"/>
    <latex>\textbullet</latex>
  </character>
  <character id="U02023" dec="8227">
    <font name="hlcra" pos="40"/>
  </character>
</charlist>"#;
    let loaded = load_from_str(xml).unwrap();
    let registry = &loaded.registry;

    assert!(registry.contains(0x2022));
    assert_eq!(registry.get(0x2022, "font"), None);
    assert_eq!(
        registry.get(0x2022, "latex"),
        Some(&Value::from("\\textbullet"))
    );
    assert_eq!(registry.get(0x2023, "font"), Some(&Value::font("hlcra", 40)));
    assert_eq!(loaded.summary.rejected_fields, 1);
    assert_eq!(loaded.summary.loaded, 2);
}

#[test]
fn test_conservation_with_every_kind_of_skip() {
    let xml = r#"<charlist>
  <character id="U00041" dec="65"/>
  <character id="U00042" dec="66"/>
  <character id="U00042" dec="66"/>
  <character id="U0003C-020D2" dec="60-8402"/>
  <character id="U0003D-020E5" dec="61-8421"/>
  <character id="X00043" dec="67"/>
  <character id="U00044" dec="99"/>
  <character dec="69"/>
</charlist>"#;
    let loaded = load_from_str(xml).unwrap();
    let summary = loaded.summary;

    assert_eq!(summary.total_seen, 8);
    assert_eq!(summary.loaded, 2);
    assert_eq!(summary.combinations_skipped, 2);
    assert_eq!(summary.invalid_skipped, 4);
    assert!(summary.is_conserved());
}

#[test]
fn test_entity_aliases_fold_sets() {
    let xml = r#"<charlist>
  <character id="U003B1" dec="945">
    <entity id="alpha" set="9573-13-isogrk3"/>
    <entity id="alpha" set="8879-isogrk3"/>
  </character>
</charlist>"#;
    let loaded = load_from_str(xml).unwrap();

    assert_eq!(
        loaded.registry.get(0x3B1, "entity.isogrk3"),
        Some(&Value::from("alpha"))
    );
    assert!(!loaded.registry.has_standard("entity.9573-13-isogrk3"));
    assert_eq!(loaded.summary.duplicate_properties, 1);
}

#[test]
fn test_custom_alias_option() {
    let xml = r#"<charlist>
  <character id="U02022" dec="8226"><entity id="bull" set="mine"/></character>
</charlist>"#;
    let loader = RegistryLoader::new(LoadOptions::new().with_entity_alias("mine", "isopub"));
    let loaded = loader.load_str(xml).unwrap();

    assert_eq!(
        loaded.registry.get(0x2022, "entity.isopub"),
        Some(&Value::from("bull"))
    );
}

#[test]
fn test_character_attributes_become_properties() {
    let loaded = load_from_str(BULLET).unwrap();
    let registry = &loaded.registry;

    assert_eq!(registry.get(0x2022, "mode"), Some(&Value::from("text")));
    assert_eq!(registry.get(0x2022, "type"), Some(&Value::from("punctuation")));
}

#[test]
fn test_wrong_root_is_structural() {
    let err = load_from_str("<unicode><character id=\"U00041\" dec=\"65\"/></unicode>").unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn test_unclosed_document_is_structural() {
    let err = load_from_str("<charlist><character id=\"U00041\" dec=\"65\">").unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn test_convert_text_to_entities() {
    let xml = r#"<charlist>
  <character id="U000E2" dec="226"><entity id="acirc" set="8879-isolat1"/></character>
  <character id="U02022" dec="8226"><entity id="bull" set="8879-isopub"/></character>
</charlist>"#;
    let loaded = load_from_str(xml).unwrap();
    let mapper = StandardMapper::new(&loaded.registry);
    let options = strfchr::ConvertOptions::entity();

    assert_eq!(
        mapper.convert_text("a \u{2022} \u{e2} \u{3b1}", "entity.isopub", &options),
        "a &bull; \u{e2} \u{3b1}"
    );
}

#[test]
fn test_load_summary_serializes() {
    let loaded = load_from_str(BULLET).unwrap();
    let json = serde_json::to_value(loaded.summary).unwrap();
    assert_eq!(json["loaded"], 1);
    assert_eq!(json["total_seen"], 1);
}

#[test]
fn test_byte_order_mark_prefixed_document_loads() {
    let xml = format!("\u{FEFF}{}", BULLET);
    let loaded = load_from_str(&xml).unwrap();
    assert_eq!(loaded.summary.loaded, 1);
    assert_eq!(
        loaded.registry.get(0x2022, "latex"),
        Some(&Value::from("\\textbullet"))
    );
}

#[test]
fn test_convert_text_to_computed_form() {
    let loaded = load_from_str(BULLET).unwrap();
    let mapper = StandardMapper::new(&loaded.registry);
    let options = strfchr::ConvertOptions::new();

    assert_eq!(mapper.convert_text("\u{e2}", "SLASH4", &options), "\\u00e2");
    assert_eq!(
        mapper.convert_text("a\u{2022}b", "UPLUS", &options.with_prefix("<").with_suffix(">")),
        "a<U+2022>b"
    );
}

#[test]
fn test_latex_chart_from_loaded_database() {
    let loaded = load_from_str(BULLET).unwrap();
    let chart = StandardMapper::new(&loaded.registry)
        .build_map("latex", "entity.html4-symbol")
        .latex_chart();

    assert!(chart.contains("\\begin{longtable}"));
    assert!(chart.contains("\\verb|\\textbullet| & U+2022 & \\&bull; \\\\\n"));
}
