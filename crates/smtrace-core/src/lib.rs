//! smtrace-core — canonical step/trace types, the step index, and trace I/O.
//!
//! This crate defines the **stable boundary** shared across the smtrace
//! workspace:
//! - canonical data types (`Step`, `Comparison`, `Trace`, table types),
//! - the [`StepIndex`] for reverse navigation (grid cell → step), and
//! - JSON/CBOR trace I/O with extension auto-detection.
//!
//! A [`Trace`] is the complete, ordered record of one search run: every
//! character comparison, every fallback or shift decision, and every match
//! event, finished by a single terminal [`Step::Complete`]. Traces are built
//! eagerly by `smtrace-search` and are immutable afterwards; this crate only
//! describes and transports them.
//!
//! ```
//! use smtrace_core::{Comparison, Step, Window};
//!
//! let step = Step::Compare {
//!     window: Window::new(0, 3),
//!     cmp: Comparison { text_index: 2, pattern_index: 2, matched: true },
//!     note: "text[2]='a' vs pattern[2]='a': match".to_owned(),
//! };
//! assert_eq!(step.comparison().map(|c| c.text_index), Some(2));
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Small, explicit allowlist to keep docs readable and APIs ergonomic.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::doc_markdown
)]

/// Reverse lookup from comparison coordinates to step positions.
pub mod index;
/// JSON/CBOR helpers and auto-detecting read/write APIs for traces.
pub mod io;
/// Canonical step, trace, and table types shared across the workspace.
pub mod types;

pub use index::StepIndex;
pub use types::*;

/// Commonly-used items for quick imports.
///
/// ```rust
/// use smtrace_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::index::StepIndex;
    pub use crate::types::*;
}
