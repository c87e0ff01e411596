//! Batch digest computation.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::EngineError;
use crate::input::Input;
use crate::registry::{AlgorithmRegistry, DigestFn};

/// Outcome of one algorithm: a hex digest, or a failure marker carrying the
/// reason. Failures are per-entry and never abort sibling computations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestOutcome {
  /// Hex-encoded digest (lower-case unless the uppercase presentation
  /// transform was requested).
  Hex(String),
  /// The algorithm failed; holds the failure reason.
  Failed(String),
}

impl DigestOutcome {
  /// The hex string, if computation succeeded.
  #[must_use]
  pub fn as_hex(&self) -> Option<&str> {
    match self {
      Self::Hex(hex) => Some(hex),
      Self::Failed(_) => None,
    }
  }

  /// Whether this entry is a failure marker.
  #[must_use]
  pub fn is_failure(&self) -> bool {
    matches!(self, Self::Failed(_))
  }
}

impl fmt::Display for DigestOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Hex(hex) => f.write_str(hex),
      Self::Failed(reason) => write!(f, "Error: {reason}"),
    }
  }
}

/// Ordered result mapping: algorithm id to outcome, iterated in sorted id
/// order (the registry's enumeration order).
pub type ResultSet = BTreeMap<String, DigestOutcome>;

/// Presentation transforms applied uniformly after computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentationOptions {
  /// Upper-case every non-failure hex value. Failure markers are never
  /// altered.
  pub uppercase: bool,
}

/// Runs registered algorithms over an input and assembles the result set.
///
/// Holds the registry by value; construct once and reuse. All computation is
/// synchronous and CPU-bound.
pub struct DigestOrchestrator {
  registry: AlgorithmRegistry,
}

impl DigestOrchestrator {
  /// Orchestrator over a custom registry.
  #[must_use]
  pub fn new(registry: AlgorithmRegistry) -> Self {
    Self { registry }
  }

  /// Orchestrator over the standard algorithm set.
  #[must_use]
  pub fn standard() -> Self {
    Self::new(AlgorithmRegistry::standard())
  }

  /// Sorted upper-case identifiers of every registered algorithm.
  #[must_use]
  pub fn supported_algorithms(&self) -> Vec<String> {
    self.registry.ids()
  }

  /// Compute digests of `input` under one or all registered algorithms.
  ///
  /// # Errors
  ///
  /// - [`EngineError::EmptyInput`] when the input is zero-length; nothing
  ///   runs.
  /// - [`EngineError::UnsupportedAlgorithm`] when `selector` names an
  ///   unregistered id; this is a caller error and never appears inside a
  ///   result set.
  ///
  /// Per-algorithm failures are not errors: they become
  /// [`DigestOutcome::Failed`] entries while every other algorithm still
  /// runs.
  pub fn compute_digests(
    &self,
    input: Input<'_>,
    selector: Option<&str>,
    options: &PresentationOptions,
  ) -> Result<ResultSet, EngineError> {
    if input.is_empty() {
      return Err(EngineError::EmptyInput);
    }

    let mut results = ResultSet::new();
    match selector {
      Some(requested) => {
        let f = self
          .registry
          .resolve(requested)
          .ok_or_else(|| EngineError::UnsupportedAlgorithm(requested.to_string()))?;
        results.insert(requested.to_ascii_uppercase(), run_one(requested, f, &input));
      }
      None => {
        for (id, f) in self.registry.iter() {
          results.insert(id.clone(), run_one(id, f, &input));
        }
      }
    }

    if options.uppercase {
      for outcome in results.values_mut() {
        if let DigestOutcome::Hex(hex) = outcome {
          *hex = hex.to_ascii_uppercase();
        }
      }
    }

    tracing::debug!(
      algorithms = results.len(),
      input_len = input.as_bytes().len(),
      "digest batch complete"
    );
    Ok(results)
  }
}

fn run_one(id: &str, f: &DigestFn, input: &Input<'_>) -> DigestOutcome {
  match f(input) {
    Ok(bytes) => DigestOutcome::Hex(hex::encode(bytes)),
    Err(err) => {
      tracing::debug!(algorithm = id, error = %err, "algorithm failed");
      DigestOutcome::Failed(err.to_string())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::AlgorithmError;

  #[test]
  fn failure_marker_isolated_from_siblings() {
    let mut registry = AlgorithmRegistry::new();
    registry.register("GOOD", Box::new(|_| Ok(vec![0xab, 0xcd])));
    registry.register("BAD", Box::new(|_| Err(AlgorithmError::new("boom"))));

    let orchestrator = DigestOrchestrator::new(registry);
    let results = orchestrator
      .compute_digests(Input::Text("x"), None, &PresentationOptions::default())
      .unwrap();

    assert_eq!(results["GOOD"], DigestOutcome::Hex("abcd".into()));
    assert_eq!(results["BAD"], DigestOutcome::Failed("boom".into()));
  }

  #[test]
  fn uppercase_skips_failure_markers() {
    let mut registry = AlgorithmRegistry::new();
    registry.register("GOOD", Box::new(|_| Ok(vec![0xab, 0xcd])));
    registry.register("BAD", Box::new(|_| Err(AlgorithmError::new("boom"))));

    let orchestrator = DigestOrchestrator::new(registry);
    let results = orchestrator
      .compute_digests(Input::Text("x"), None, &PresentationOptions { uppercase: true })
      .unwrap();

    assert_eq!(results["GOOD"], DigestOutcome::Hex("ABCD".into()));
    assert_eq!(results["BAD"], DigestOutcome::Failed("boom".into()));
  }

  #[test]
  fn selector_failure_still_yields_result_set() {
    let mut registry = AlgorithmRegistry::new();
    registry.register("BAD", Box::new(|_| Err(AlgorithmError::new("boom"))));

    let orchestrator = DigestOrchestrator::new(registry);
    let results = orchestrator
      .compute_digests(Input::Text("x"), Some("bad"), &PresentationOptions::default())
      .unwrap();
    assert_eq!(results.len(), 1);
    assert!(results["BAD"].is_failure());
  }

  #[test]
  fn outcome_display() {
    assert_eq!(DigestOutcome::Hex("abcd".into()).to_string(), "abcd");
    assert_eq!(DigestOutcome::Failed("boom".into()).to_string(), "Error: boom");
  }
}
