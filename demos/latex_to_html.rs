//! Builds a LaTeX to HTML entity table and converts some text.
//!
//! Run with: cargo run --example latex_to_html

use std::error::Error;
use strfchr::{load_from_str, ConvertOptions, FallbackPolicy, StandardMapper};

const DATA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<charlist>
  <character id="U000E9" dec="233" mode="text" type="alphabetic">
    <latex>\'{e}</latex>
    <entity id="eacute" set="html4-lat1"/>
  </character>
  <character id="U003B1" dec="945" mode="math" type="alphabetic">
    <latex>\alpha</latex>
    <entity id="alpha" set="html4-symbol"/>
  </character>
  <character id="U02022" dec="8226" mode="text" type="punctuation">
    <latex>\textbullet</latex>
    <entity id="bull" set="html-symbol"/>
  </character>
  <character id="U02192" dec="8594" mode="math" type="relation">
    <latex>\rightarrow</latex>
    <entity id="rarr" set="html4-symbol"/>
  </character>
</charlist>"#;

fn main() -> Result<(), Box<dyn Error>> {
    let loaded = load_from_str(DATA)?;
    let mapper = StandardMapper::new(&loaded.registry);

    let map = mapper.build_map("latex", "entity.html4-symbol");
    println!("LaTeX to HTML entities ({} pairs):", map.len());
    for (latex, entity) in map.iter() {
        println!("  {:<14} &{};", latex, entity);
    }
    println!("{}", serde_json::to_string_pretty(map.report())?);

    let text = "caf\u{e9} \u{2022} \u{3b1} \u{2192} \u{3b2}";
    let options = ConvertOptions::entity().with_fallback(FallbackPolicy::NumericCharRefDecimal);
    println!();
    println!("{}", mapper.convert_text(text, "entity.html4-symbol", &options));
    println!("{}", mapper.convert_text(text, "SLASH4", &ConvertOptions::new()));

    println!();
    print!("{}", map.latex_chart());
    Ok(())
}
