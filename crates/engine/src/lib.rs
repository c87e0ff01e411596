//! Digest orchestration for hashit.
//!
//! The engine owns the [`AlgorithmRegistry`] (an immutable, name-keyed table
//! of digest functions built once per process) and the
//! [`DigestOrchestrator`], which runs one or all registered algorithms over
//! an input and collects per-algorithm outcomes without letting a single
//! failure abort the batch.
//!
//! MD4 and NTLM are computed by the workspace's own `hashes` crate; every
//! other algorithm is delegated to a trusted ecosystem implementation and
//! wrapped behind the same [`DigestFn`] signature, so the registry never
//! distinguishes native from delegated entries.
//!
//! # Quick Start
//!
//! ```
//! use engine::{DigestOrchestrator, Input, PresentationOptions};
//!
//! let orchestrator = DigestOrchestrator::standard();
//! let results = orchestrator
//!   .compute_digests(Input::Text("abc"), Some("md4"), &PresentationOptions::default())
//!   .unwrap();
//! assert_eq!(results["MD4"].to_string(), "a448017aaf21d8525fc10ae87aa6729d");
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

mod delegated;
mod error;
mod input;
mod orchestrator;
mod registry;

pub use error::{AlgorithmError, EngineError};
pub use input::Input;
pub use orchestrator::{DigestOrchestrator, DigestOutcome, PresentationOptions, ResultSet};
pub use registry::{AlgorithmRegistry, DigestFn};
