//! Engine error types.
//!
//! Two distinct kinds, with distinct propagation: [`EngineError`] refuses a
//! call before any algorithm runs; [`AlgorithmError`] is raised by a single
//! digest function and is captured as a failure marker inside the result
//! set, never aborting sibling computations.

use core::fmt;

/// Caller-input error: the whole call is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
  /// The requested algorithm identifier is not in the registry.
  UnsupportedAlgorithm(String),
  /// Zero-length input, rejected before any algorithm runs.
  EmptyInput,
}

impl fmt::Display for EngineError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedAlgorithm(id) => write!(f, "unsupported algorithm: {id}"),
      Self::EmptyInput => f.write_str("input must not be empty"),
    }
  }
}

impl core::error::Error for EngineError {}

/// Failure of an individual digest function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmError {
  message: String,
}

impl AlgorithmError {
  /// Create a new algorithm error with the given reason.
  #[must_use]
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into() }
  }
}

impl fmt::Display for AlgorithmError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.message)
  }
}

impl core::error::Error for AlgorithmError {}
