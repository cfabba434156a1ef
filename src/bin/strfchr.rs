//! `strfchr` command-line tool.
//!
//! Renders one line per character through a template, dumps maps between
//! standards, prints LaTeX charts, and converts text to a target standard.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use strfchr::computed::codes_table;
use strfchr::format::needs_registry;
use strfchr::registry::MAX_CODE_POINT;
use strfchr::standard::KNOWN_STANDARDS;
use strfchr::{
    ConvertOptions, FallbackPolicy, FallbackStep, FormatInterpreter, LoadOptions, PropertyRegistry,
    RegistryLoader, RenderOptions, StandardMapper, StandardName,
};
use tracing::{info, warn};

const DEFAULT_FORMAT: &str = "%8 %4 %2 %0 %N (URI %F)";
const CHART_SOURCE: &str = "latex";
const RANGE_END: u32 = MAX_CODE_POINT + 1;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "strfchr")]
#[command(about = "Render characters through per-character templates")]
#[command(version)]
struct Args {
    /// Code points (0xE2, 0o342, 0b11100010, 226, U+00E2) or single characters
    chars: Vec<String>,

    /// Template applied to each character
    #[arg(short, long, default_value = DEFAULT_FORMAT)]
    format: String,

    /// Character database (default: ~/.strfchr/unicode.xml)
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// First code point of a range (inclusive)
    #[arg(long, value_name = "N", value_parser = parse_range_bound)]
    min: Option<u32>,

    /// End of a range (exclusive, at most 0x110000)
    #[arg(long, value_name = "N", value_parser = parse_range_bound)]
    max: Option<u32>,

    /// What to print when a value is missing
    #[arg(long, value_name = "POLICY", default_value_t = FallbackPolicy::NumericCharRefHex)]
    fallback: FallbackPolicy,

    /// Standard or computed form to try before the fallback policy (repeatable)
    #[arg(long = "chain", value_name = "NAME")]
    chain: Vec<FallbackStep>,

    /// Entity set searched by %N, replacing the defaults (repeatable)
    #[arg(long = "entity-set", value_name = "SET")]
    entity_sets: Vec<String>,

    /// List the available format codes and exit
    #[arg(long)]
    help_codes: bool,

    /// Print a JSON map from one standard's values to another's
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
    map: Option<Vec<String>>,

    /// Print a LaTeX chart of LaTeX macros against TARGET
    #[arg(
        long,
        value_name = "TARGET",
        num_args = 0..=1,
        default_missing_value = "entity.html4-symbol",
        conflicts_with_all = ["map", "to"]
    )]
    chart: Option<String>,

    /// Convert stdin text to this standard or computed form
    #[arg(long, value_name = "STANDARD", conflicts_with = "map")]
    to: Option<String>,

    /// Text written before each converted character
    #[arg(long, default_value = "", requires = "to")]
    prefix: String,

    /// Text written after each converted character
    #[arg(long, default_value = "", requires = "to")]
    suffix: String,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_tracing(args.verbose, args.quiet);

    if args.help_codes {
        return print_codes();
    }

    let mut options = RenderOptions::new().with_fallback(args.fallback);
    for step in &args.chain {
        options = options.with_chain_step(step.clone());
    }
    if !args.entity_sets.is_empty() {
        options = options.with_entity_sets(&args.entity_sets);
    }

    let wants_data = args.data.is_some()
        || args.map.is_some()
        || args.chart.is_some()
        || args.to.is_some()
        || needs_registry(&args.format, &options).context("invalid --format")?;
    let registry = if wants_data {
        load_registry(args.data.as_deref())?
    } else {
        PropertyRegistry::new()
    };
    for name in unknown_standards(&registry, &requested_standards(&args)) {
        warn!(standard = %name, "standard is neither built in nor present in the database");
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if let Some(pair) = &args.map {
        let map = StandardMapper::new(&registry).build_map(&pair[0], &pair[1]);
        serde_json::to_writer_pretty(&mut out, &map)?;
        writeln!(out)?;
        return Ok(out.flush()?);
    }

    if let Some(target) = &args.chart {
        let map = StandardMapper::new(&registry).build_map(CHART_SOURCE, target);
        out.write_all(map.latex_chart().as_bytes())?;
        return Ok(out.flush()?);
    }

    if let Some(target) = &args.to {
        let convert = ConvertOptions::new()
            .with_prefix(&args.prefix)
            .with_suffix(&args.suffix)
            .with_fallback(args.fallback);
        let text = read_stdin()?;
        let converted = StandardMapper::new(&registry).convert_text(&text, target, &convert);
        out.write_all(converted.as_bytes())?;
        return Ok(out.flush()?);
    }

    let interpreter = FormatInterpreter::new(&registry, options);
    let template = interpreter.compile(&args.format).context("invalid --format")?;

    let code_points: Box<dyn Iterator<Item = u32>> = if args.min.is_some() || args.max.is_some() {
        let min = args.min.unwrap_or(0);
        let max = args.max.unwrap_or(RANGE_END);
        if min > max {
            bail!("--min {:#x} is above --max {:#x}", min, max);
        }
        Box::new(min..max)
    } else if !args.chars.is_empty() {
        let parsed = args
            .chars
            .iter()
            .map(|arg| parse_char_arg(arg))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Box::new(parsed.into_iter())
    } else {
        let text = read_stdin()?;
        Box::new(text.chars().map(|c| c as u32).collect::<Vec<_>>().into_iter())
    };

    let mut line = String::new();
    for cp in code_points {
        line.clear();
        interpreter.write_compiled(&mut line, &template, cp)?;
        writeln!(out, "{}", line)?;
    }
    Ok(out.flush()?)
}

/// Standard names the command line asks for, excluding computed forms.
fn requested_standards(args: &Args) -> Vec<String> {
    let mut names: Vec<String> = args
        .chain
        .iter()
        .filter_map(|step| match step {
            FallbackStep::Standard(name) => Some(name.as_str().to_string()),
            FallbackStep::Computed(_) => None,
        })
        .collect();
    if let Some(pair) = &args.map {
        names.extend(pair.iter().cloned());
    }
    if let Some(target) = &args.chart {
        names.push(CHART_SOURCE.to_string());
        names.push(target.clone());
    }
    if let Some(FallbackStep::Standard(name)) = args.to.as_deref().map(FallbackStep::parse) {
        names.push(name.as_str().to_string());
    }
    names
}

/// Names that are neither declared nor carried by any record.
fn unknown_standards<'n>(registry: &PropertyRegistry, names: &'n [String]) -> Vec<&'n str> {
    let present = registry.standards();
    names
        .iter()
        .map(String::as_str)
        .filter(|name| !StandardName::new(*name).is_declared() && !present.contains(*name))
        .collect()
}

fn setup_tracing(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match (quiet, verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, _) => "debug",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn default_data_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".strfchr").join("unicode.xml"))
}

/// An explicit `--data` must load; the default location may be absent.
fn load_registry(explicit: Option<&Path>) -> anyhow::Result<PropertyRegistry> {
    let loader = RegistryLoader::new(LoadOptions::default());
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_data_path() {
            Some(path) if path.exists() => path,
            other => {
                warn!(
                    path = ?other,
                    "no character database found, only computed forms are available"
                );
                return Ok(PropertyRegistry::new());
            }
        },
    };
    info!(path = %path.display(), "loading character database");
    let loaded = loader
        .load_path(&path)
        .with_context(|| format!("cannot load {}", path.display()))?;
    Ok(loaded.registry)
}

fn print_codes() -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{:<4} {:<15} {:<4} {:<11} EXAMPLE (U+00E2)", "CODE", "NAME", "KIND", "EVALUATION")?;
    for row in codes_table() {
        let code = row.mnemonic.map(|m| format!("%{}", m)).unwrap_or_default();
        writeln!(
            out,
            "{:<4} {:<15} {:<4} {:<11} {}",
            code,
            row.name,
            row.kind.tag(),
            row.evaluation.as_str(),
            row.example.as_deref().unwrap_or("-")
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Standards, as %{{NAME}}:")?;
    for (name, info) in KNOWN_STANDARDS {
        writeln!(out, "     {:<15} {}", name, info.kind.tag())?;
    }
    writeln!(out, "     {:<15} {}", "entity.<set>", "F")?;
    Ok(())
}

fn read_stdin() -> anyhow::Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("cannot read stdin")?;
    Ok(text)
}

/// Numbers with an optional `0x`, `0o`, `0b` or `U+` prefix.
fn parse_code_point(arg: &str) -> Result<u32, String> {
    let arg = arg.trim();
    let lower = arg.to_ascii_lowercase();
    let parsed = if let Some(hex) = lower.strip_prefix("0x").or_else(|| lower.strip_prefix("u+")) {
        u32::from_str_radix(hex, 16)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        u32::from_str_radix(oct, 8)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        u32::from_str_radix(bin, 2)
    } else {
        lower.parse::<u32>()
    };
    parsed.map_err(|e| format!("'{}' is not a code point: {}", arg, e))
}

/// A range bound: a code point, or the end of the code space.
fn parse_range_bound(arg: &str) -> Result<u32, String> {
    let n = parse_code_point(arg)?;
    if n > RANGE_END {
        return Err(format!("'{}' is beyond the end of Unicode ({:#x})", arg.trim(), RANGE_END));
    }
    Ok(n)
}

/// A lone character stands for itself; anything longer must be a number.
fn parse_char_arg(arg: &str) -> anyhow::Result<u32> {
    let mut chars = arg.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(c as u32);
    }
    parse_code_point(arg).map_err(anyhow::Error::msg)
}
