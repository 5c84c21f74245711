//! smtrace-search — table builders and step-trace generators for KMP and
//! Boyer–Moore.
//!
//! This crate provides the engine proper, deliberately independent of any
//! rendering or UI concern:
//!
//! - `lps`: KMP failure-function (LPS) construction with a build log.
//! - `bad_char`: Boyer–Moore rightmost-occurrence table.
//! - `good_suffix`: Boyer–Moore two-pass good-suffix shift table.
//! - `kmp` / `bm`: deterministic trace generators that replay each search and
//!   emit one [`smtrace_core::Step`] per comparison, fallback, shift
//!   decision, and match event.
//! - `naive`: brute-force occurrence oracle (tests, benches).
//! - `gen`: seeded synthetic (text, pattern) generator for sims/benches.
//! - `run`: the façade that bundles tables + trace + step index.
//!
//! Every run is a pure function of `(text, pattern, algorithm)`: the trace is
//! materialized eagerly and in full, trading memory for O(1) random-access
//! stepping and O(1) reverse lookup during interactive replay.
//!
//! ```
//! use smtrace_core::Algorithm;
//! use smtrace_search::run::run;
//!
//! let out = run("ABABDABACDABABCABAB", "ABABCABAB", Algorithm::Kmp)?;
//! assert_eq!(out.trace.matches, vec![10]);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::doc_markdown
)]

/// Boyer–Moore bad-character (rightmost occurrence) table.
pub mod bad_char;
/// Boyer–Moore trace generator.
pub mod bm;
/// Seeded synthetic input generator (for sims/benches).
pub mod gen;
/// Boyer–Moore two-pass good-suffix shift table.
pub mod good_suffix;
/// KMP trace generator.
pub mod kmp;
/// KMP failure-function (LPS) builder.
pub mod lps;
/// Brute-force occurrence oracle.
pub mod naive;
/// Engine façade: build tables + trace + index in one call.
pub mod run;

// (Intentionally no broad re-exports so downstream callers import stable
// module paths like `smtrace_search::run::run`.)
