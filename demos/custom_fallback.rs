//! Shows how fallback chains and policies fill in missing values.
//!
//! Run with: cargo run --example custom_fallback

use std::error::Error;
use strfchr::{
    record, FallbackPolicy, FallbackStep, FormatInterpreter, PropertyRegistry, RenderOptions,
    StandardName,
};

fn main() -> Result<(), Box<dyn Error>> {
    let registry: PropertyRegistry = vec![
        record!(0x2022, { "latex" => "\\textbullet", "AMS" => "\\bullet" }),
        record!(0x3B1, { "AMS" => "\\alpha" }),
        record!(0xE2),
    ]
    .into_iter()
    .collect();

    let code_points = [0x2022, 0x3B1, 0xE2, 0x1D400];
    let chains: [(&str, Vec<FallbackStep>); 3] = [
        ("no chain", vec![]),
        ("AMS", vec![FallbackStep::Standard(StandardName::new("AMS"))]),
        ("AMS, SLASH4", vec![FallbackStep::parse("AMS"), FallbackStep::parse("4")]),
    ];

    for policy in FallbackPolicy::ALL {
        println!("policy {}:", policy);
        for (label, chain) in &chains {
            let mut options = RenderOptions::new().with_fallback(policy);
            for step in chain {
                options = options.with_chain_step(step.clone());
            }
            let interpreter = FormatInterpreter::new(&registry, options);
            let template = interpreter.compile("%{latex}")?;
            let rendered = interpreter.render_all(code_points, &template)?;
            println!("  {:<12} {}", label, rendered.join("  "));
        }
    }
    Ok(())
}
