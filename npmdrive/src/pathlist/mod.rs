//! PATH-list parsing, repair, and reconciliation.
//!
//! The persistent user `PATH` is an ordered, semicolon-delimited list of
//! directories whose order determines executable-resolution precedence.
//! This module provides:
//!
//! - [`entry`]: normalization of a single entry into its comparison key
//! - [`repair`]: splitting of malformed tokens that lost their separator
//! - [`reconcile`]: the full merge of required entries into an existing
//!   list without reordering or duplicating anything
//!
//! All of it is pure string manipulation over Windows PATH semantics
//! (`;` between entries, `\` inside them); nothing here touches the
//! filesystem or the persistent store.

pub mod entry;
pub mod repair;
pub mod reconcile;

pub use entry::{expand_vars, normalize, PathEntry};
pub use reconcile::{PathReconciler, ReconcileOutcome};
pub use repair::split_merged;

/// Delimiter between entries in a PATH-like variable.
pub const LIST_SEPARATOR: char = ';';

/// Directory separator inside an entry.
pub const DIR_SEPARATOR: char = '\\';
