#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use smtrace_core::{io::write_trace_auto, Algorithm, Step, Tables};
use smtrace_search::{gen::generate_input, run::run, run::SearchRun};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "smtrace",
    about = "Step-trace generator for KMP and Boyer-Moore substring search",
    long_about = "Step-trace generator for KMP and Boyer-Moore substring search.\n\nUse this tool to generate full comparison/shift traces, dump preprocessing tables, and query the step index.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Run a search and print a trace summary; optionally write the full
    /// trace (JSON/CBOR by extension).
    Trace {
        /// Text to search in
        #[arg(long)]
        text: String,

        /// Pattern to search for (non-empty)
        #[arg(long, value_parser = non_empty_pattern)]
        pattern: String,

        /// Search algorithm
        #[arg(value_enum, long, default_value_t = AlgorithmOpt::Kmp)]
        algorithm: AlgorithmOpt,

        /// Output path for the trace file (.json / .cbor)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the preprocessing tables for a pattern
    Tables {
        /// Pattern to preprocess (non-empty)
        #[arg(long, value_parser = non_empty_pattern)]
        pattern: String,

        /// Search algorithm
        #[arg(value_enum, long, default_value_t = AlgorithmOpt::Kmp)]
        algorithm: AlgorithmOpt,
    },

    /// Run a search and query the step index for one grid coordinate
    Lookup {
        /// Text to search in
        #[arg(long)]
        text: String,

        /// Pattern to search for (non-empty)
        #[arg(long, value_parser = non_empty_pattern)]
        pattern: String,

        /// Search algorithm
        #[arg(value_enum, long, default_value_t = AlgorithmOpt::Kmp)]
        algorithm: AlgorithmOpt,

        /// Text index of the coordinate
        #[arg(long)]
        text_index: usize,

        /// Pattern index of the coordinate
        #[arg(long)]
        pattern_index: usize,
    },

    /// Generate a seeded synthetic input, run a search, and report
    Simulate {
        /// Text length N
        #[arg(long, default_value_t = 256)]
        text_len: usize,

        /// Pattern length M (>0)
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
        pattern_len: u16,

        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Plant one guaranteed occurrence of the pattern in the text
        #[arg(long, default_value_t = false)]
        plant: bool,

        /// Search algorithm
        #[arg(value_enum, long, default_value_t = AlgorithmOpt::Bm)]
        algorithm: AlgorithmOpt,

        /// Output path for the trace file (.json / .cbor)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum AlgorithmOpt {
    /// Knuth-Morris-Pratt
    Kmp,
    /// Boyer-Moore
    Bm,
}

impl From<AlgorithmOpt> for Algorithm {
    fn from(a: AlgorithmOpt) -> Self {
        match a {
            AlgorithmOpt::Kmp => Self::Kmp,
            AlgorithmOpt::Bm => Self::BoyerMoore,
        }
    }
}

/// Reject the empty pattern at the flag-parsing layer; the engine enforces
/// the same guard again.
fn non_empty_pattern(s: &str) -> Result<String, String> {
    if s.is_empty() {
        Err("pattern must be non-empty".to_owned())
    } else {
        Ok(s.to_owned())
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Trace {
            text,
            pattern,
            algorithm,
            out,
        } => trace(&text, &pattern, algorithm, out.as_deref()),

        Cmd::Tables { pattern, algorithm } => tables(&pattern, algorithm),

        Cmd::Lookup {
            text,
            pattern,
            algorithm,
            text_index,
            pattern_index,
        } => lookup(&text, &pattern, algorithm, text_index, pattern_index),

        Cmd::Simulate {
            text_len,
            pattern_len,
            seed,
            plant,
            algorithm,
            out,
        } => simulate(text_len, pattern_len.into(), seed, plant, algorithm, out.as_deref()),
    }
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Run + summarize; shared by `trace` and `simulate`.
fn report(out: &SearchRun, out_path: Option<&Path>) -> Result<()> {
    let trace = &out.trace;
    println!(
        "{} over n={}, m={}: {} steps, {} comparisons, matches at {:?}",
        trace.algorithm,
        trace.text.chars().count(),
        trace.pattern.chars().count(),
        trace.len(),
        trace.comparison_count(),
        trace.matches
    );

    if let Some(path) = out_path {
        ensure_parent_dir(path)?;
        write_trace_auto(path, trace)
            .with_context(|| format!("writing trace to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn trace(text: &str, pattern: &str, algorithm: AlgorithmOpt, out_path: Option<&Path>) -> Result<()> {
    info!(%pattern, algorithm = ?algorithm, "generating trace");
    let out = run(text, pattern, algorithm.into())?;
    report(&out, out_path)
}

fn tables(pattern: &str, algorithm: AlgorithmOpt) -> Result<()> {
    info!(%pattern, algorithm = ?algorithm, "building tables");
    // An empty text is fine for table inspection: preprocessing only reads
    // the pattern, and the run degenerates to a Complete-only trace.
    let out = run("", pattern, algorithm.into())?;

    match &out.tables {
        Tables::Kmp(t) => {
            println!("lps = {:?}", t.lps);
            for line in &t.log {
                println!("  {line}");
            }
        }
        Tables::BoyerMoore(t) => {
            let mut occ: Vec<(char, usize)> = t.bad_char.iter().map(|(&c, &i)| (c, i)).collect();
            occ.sort_unstable();
            println!("bad_char = {occ:?}");
            println!("good_suffix = {:?}", t.good_suffix);
        }
    }
    Ok(())
}

fn lookup(
    text: &str,
    pattern: &str,
    algorithm: AlgorithmOpt,
    text_index: usize,
    pattern_index: usize,
) -> Result<()> {
    let out = run(text, pattern, algorithm.into())?;
    match out.lookup(text_index, pattern_index) {
        Some(k) => {
            let step: &Step = &out.trace.steps[k];
            let json = serde_json::to_string(step).context("serialize step to JSON")?;
            println!("step {k}: {json}");
        }
        None => println!("coordinate ({text_index}, {pattern_index}) was never compared"),
    }
    Ok(())
}

fn simulate(
    text_len: usize,
    pattern_len: usize,
    seed: u64,
    plant: bool,
    algorithm: AlgorithmOpt,
    out_path: Option<&Path>,
) -> Result<()> {
    info!(text_len, pattern_len, seed, plant, "generating synthetic input");
    let input = generate_input(text_len, pattern_len, seed, plant);
    println!("pattern = {:?}", input.pattern);

    let out = run(&input.text, &input.pattern, algorithm.into())?;
    report(&out, out_path)
}

/// Ensure the parent directory for a file exists.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating parent directory {}", dir.display()))?;
        }
    }
    Ok(())
}
