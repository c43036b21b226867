//! Reconciliation of a PATH list against required and removed entries.

use std::collections::HashSet;

use crate::env::EnvStore;

use super::entry::PathEntry;
use super::repair::split_merged;
use super::LIST_SEPARATOR;

/// Result of one reconciliation.
///
/// `value` is the joined output; `changed` says whether it differs from
/// the input string (the caller only persists when it does, to avoid
/// spurious writes racing with other processes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Surviving entries, original (non-normalized) strings, in order.
    pub entries: Vec<String>,
    /// The entries joined with the list separator.
    pub value: String,
    /// Whether the output differs from the input value (content or order).
    pub changed: bool,
    /// Raw tokens that were detected as merged and split during repair.
    pub repaired: Vec<String>,
}

/// Merges required entries into an existing ordered PATH value.
///
/// The reconciler never reorders or drops a pre-existing, still-valid
/// entry and never introduces duplicates (compared by normalized key).
/// It is a pure function of its inputs: nothing is read or written
/// besides `%VAR%` expansion against the injected environment store.
///
/// # Examples
///
/// ```
/// use npmdrive::{MemoryEnv, PathReconciler};
///
/// let env = MemoryEnv::new();
/// let reconciler = PathReconciler::new(&env);
///
/// let outcome = reconciler.reconcile(
///     "C:\\a;C:\\b",
///     &["C:\\c".to_string()],
///     &[],
/// );
/// assert_eq!(outcome.value, "C:\\a;C:\\b;C:\\c");
/// assert!(outcome.changed);
/// ```
pub struct PathReconciler<'a> {
    env: &'a dyn EnvStore,
}

impl<'a> PathReconciler<'a> {
    /// Creates a reconciler expanding `%VAR%` references against `env`.
    #[must_use]
    pub fn new(env: &'a dyn EnvStore) -> Self {
        Self { env }
    }

    /// Derives the normalized comparison key for a raw entry.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        super::entry::normalize(raw, self.env)
    }

    /// Reconciles `current` with the `required` and `removals` sets.
    ///
    /// Steps, in order:
    /// 1. tokenize on the separator, dropping empty tokens
    /// 2. repair merged tokens ([`split_merged`])
    /// 3. drop entries whose key matches a key in `removals`
    /// 4. deduplicate by key, keeping the first occurrence of each
    /// 5. append each required entry (in the given order) whose key is
    ///    not yet present
    ///
    /// The output preserves the original strings of all surviving
    /// entries and their relative order. Reconciling the output again
    /// with the same inputs yields the identical output.
    #[must_use]
    pub fn reconcile(
        &self,
        current: &str,
        required: &[String],
        removals: &[String],
    ) -> ReconcileOutcome {
        let mut repaired = Vec::new();
        let mut tokens = Vec::new();

        for token in current.split(LIST_SEPARATOR) {
            if token.trim().is_empty() {
                continue;
            }
            let parts = split_merged(token);
            if parts.len() > 1 {
                repaired.push(token.to_string());
            }
            tokens.extend(parts);
        }

        let removal_keys: HashSet<String> =
            removals.iter().map(|r| self.normalize(r)).collect();

        let mut seen: HashSet<String> = HashSet::new();
        let mut entries: Vec<String> = Vec::new();

        for token in tokens {
            let entry = PathEntry::new(token, self.env);
            if removal_keys.contains(entry.key()) {
                continue;
            }
            if seen.insert(entry.key().to_string()) {
                entries.push(entry.raw().to_string());
            }
        }

        for req in required {
            let entry = PathEntry::new(req.clone(), self.env);
            if seen.insert(entry.key().to_string()) {
                entries.push(entry.raw().to_string());
            }
        }

        let value = entries.join(&LIST_SEPARATOR.to_string());
        let changed = value != current;

        ReconcileOutcome {
            entries,
            value,
            changed,
            repaired,
        }
    }
}
