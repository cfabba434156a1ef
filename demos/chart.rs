//! Prints a small character chart using computed forms only.
//!
//! Run with: cargo run --example chart

use std::error::Error;
use strfchr::{FallbackPolicy, FormatInterpreter, PropertyRegistry, RenderOptions};

fn main() -> Result<(), Box<dyn Error>> {
    // no database needed: every code below is computed
    let registry = PropertyRegistry::new();
    let options = RenderOptions::new().with_fallback(FallbackPolicy::LiteralCharacter);
    let interpreter = FormatInterpreter::new(&registry, options);
    let template = interpreter.compile("%+  %l  %g  %U")?;

    println!("Greek lowercase:");
    for line in interpreter.render_all(0x3B1..=0x3C9, &template)? {
        println!("  {}", line);
    }
    Ok(())
}
