//! Name-keyed table of digest functions.

use std::collections::BTreeMap;

use crate::delegated;
use crate::error::AlgorithmError;
use crate::input::Input;

/// A digest function: canonical input in, raw digest bytes out.
///
/// Hex encoding is applied uniformly by the orchestrator after invocation,
/// never inside an algorithm.
pub type DigestFn = Box<dyn Fn(&Input<'_>) -> Result<Vec<u8>, AlgorithmError> + Send + Sync>;

/// Immutable registry mapping upper-case algorithm identifiers to digest
/// functions.
///
/// Built once (normally via [`standard`](Self::standard)) and never mutated
/// afterward; safe for concurrent read-only use. Backed by a `BTreeMap`, so
/// enumeration order is lexicographic regardless of registration order.
pub struct AlgorithmRegistry {
  entries: BTreeMap<String, DigestFn>,
}

impl AlgorithmRegistry {
  /// Create an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self { entries: BTreeMap::new() }
  }

  /// Registry with the full standard algorithm set.
  #[must_use]
  pub fn standard() -> Self {
    let mut registry = Self::new();
    delegated::register_standard(&mut registry);
    registry
  }

  /// Register `f` under `id`.
  ///
  /// Identifiers are normalized to upper-case; registering the same id
  /// twice is a programming error.
  pub fn register(&mut self, id: &str, f: DigestFn) {
    let id = id.to_ascii_uppercase();
    let previous = self.entries.insert(id.clone(), f);
    debug_assert!(previous.is_none(), "duplicate algorithm id {id}");
  }

  /// Look up a digest function, case-insensitively.
  #[must_use]
  pub fn resolve(&self, id: &str) -> Option<&DigestFn> {
    self.entries.get(&id.to_ascii_uppercase())
  }

  /// Sorted list of registered identifiers.
  #[must_use]
  pub fn ids(&self) -> Vec<String> {
    self.entries.keys().cloned().collect()
  }

  /// Iterate entries in sorted id order.
  pub fn iter(&self) -> impl Iterator<Item = (&String, &DigestFn)> {
    self.entries.iter()
  }

  /// Number of registered algorithms.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the registry is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Default for AlgorithmRegistry {
  fn default() -> Self {
    Self::new()
  }
}
