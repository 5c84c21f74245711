//! I/O helpers for the [`Trace`] envelope.
//!
//! Supports JSON/CBOR and extension-based auto-detection. Unknown or missing
//! extensions are rejected for reads and default to JSON for writes. Readers
//! reject traces whose `version` field is newer than [`TRACE_VERSION`].

use crate::types::{Trace, TRACE_VERSION};
use anyhow::{anyhow, ensure, Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/* ---------------- JSON ---------------- */

/// Read a [`Trace`] from **JSON**.
///
/// Errors include file open, decoding, malformed structure, or an
/// unsupported schema version.
pub fn read_trace_json<P: AsRef<Path>>(path: P) -> Result<Trace> {
    let path_ref = path.as_ref();
    let f = File::open(path_ref).with_context(|| format!("open {}", display(path_ref)))?;
    let rdr = BufReader::new(f);
    let v: Trace = serde_json::from_reader(rdr).context("deserialize JSON trace")?;
    check_version(&v)?;
    Ok(v)
}

/// Write a [`Trace`] to **JSON** (pretty).
pub fn write_trace_json<P: AsRef<Path>>(path: P, v: &Trace) -> Result<()> {
    let path_ref = path.as_ref();
    let f = File::create(path_ref).with_context(|| format!("create {}", display(path_ref)))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, v).context("serialize JSON trace")?;
    w.flush().context("flush JSON writer")?;
    Ok(())
}

/* ---------------- CBOR ---------------- */

/// Read a [`Trace`] from **CBOR**.
pub fn read_trace_cbor<P: AsRef<Path>>(path: P) -> Result<Trace> {
    let path_ref = path.as_ref();
    let f = File::open(path_ref).with_context(|| format!("open {}", display(path_ref)))?;
    let mut rdr = BufReader::new(f);
    let v: Trace = ciborium::de::from_reader(&mut rdr).context("deserialize CBOR trace")?;
    check_version(&v)?;
    Ok(v)
}

/// Write a [`Trace`] to **CBOR**.
pub fn write_trace_cbor<P: AsRef<Path>>(path: P, v: &Trace) -> Result<()> {
    let path_ref = path.as_ref();
    let f = File::create(path_ref).with_context(|| format!("create {}", display(path_ref)))?;
    let mut w = BufWriter::new(f);
    ciborium::ser::into_writer(v, &mut w).context("serialize CBOR trace")?;
    w.flush().context("flush CBOR writer")?;
    Ok(())
}

/* --------------- Auto-detect by extension --------------- */

/// Auto-detect **read** by extension (`.json` / `.cbor`, case-insensitive).
///
/// Returns a helpful error if the extension is missing or unsupported.
pub fn read_trace_auto<P: AsRef<Path>>(path: P) -> Result<Trace> {
    match ext_lower(path.as_ref()).as_deref() {
        Some("json") => read_trace_json(path),
        Some("cbor") => read_trace_cbor(path),
        Some(other) => Err(anyhow!(
            "unsupported trace extension: {} (supported: .json, .cbor)",
            other
        )),
        None => Err(anyhow!("path has no extension (expected .json or .cbor)")),
    }
}

/// Auto-detect **write** (defaults to JSON if unknown/missing).
pub fn write_trace_auto<P: AsRef<Path>>(path: P, v: &Trace) -> Result<()> {
    match ext_lower(path.as_ref()).as_deref() {
        Some("cbor") => write_trace_cbor(path, v),
        _ => write_trace_json(path, v),
    }
}

/* ---------------- Small helpers ---------------- */

fn check_version(v: &Trace) -> Result<()> {
    ensure!(
        v.version <= TRACE_VERSION,
        "trace schema version {} is newer than supported version {}",
        v.version,
        TRACE_VERSION
    );
    Ok(())
}

#[inline]
fn ext_lower(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
}

#[inline]
fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Algorithm, Step, Window};

    fn sample_trace() -> Trace {
        Trace {
            version: TRACE_VERSION,
            algorithm: Algorithm::BoyerMoore,
            text: "hello world".to_owned(),
            pattern: "world".to_owned(),
            steps: vec![
                Step::Align { window: Window::new(0, 4) },
                Step::MatchFound { window: Window::new(6, 10), at: 6 },
                Step::Complete,
            ],
            matches: vec![6],
        }
    }

    #[test]
    fn json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let t = sample_trace();
        write_trace_auto(&path, &t).unwrap();
        let back = read_trace_auto(&path).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn cbor_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.cbor");
        let t = sample_trace();
        write_trace_auto(&path, &t).unwrap();
        let back = read_trace_auto(&path).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn unknown_read_extension_is_rejected() {
        let err = read_trace_auto("trace.toml").unwrap_err();
        assert!(err.to_string().contains("unsupported trace extension"));
    }

    #[test]
    fn newer_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let mut t = sample_trace();
        t.version = TRACE_VERSION + 1;
        // Writers persist whatever version the struct carries; only reads check.
        write_trace_json(&path, &t).unwrap();
        let err = read_trace_json(&path).unwrap_err();
        assert!(err.to_string().contains("newer than supported"));
    }
}
