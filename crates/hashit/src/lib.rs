//! Multi-algorithm digest engine.
//!
//! `hashit` computes digests of one input under a registry of named hash
//! algorithms and returns them as an ordered mapping of algorithm id to
//! hexadecimal digest string. MD4 and its NTLM derivation are implemented
//! from scratch in this workspace; MD5, SHA-1/2/3, RIPEMD-160, CRC16,
//! CRC32 and Adler-32 are delegated to trusted ecosystem crates behind the
//! same uniform signature.
//!
//! Several supported algorithms (MD4 and NTLM in particular) are
//! cryptographically broken and provided for compatibility with legacy
//! formats only.
//!
//! # Quick Start
//!
//! ```
//! use hashit::{DigestOrchestrator, Input, PresentationOptions};
//!
//! let orchestrator = DigestOrchestrator::standard();
//!
//! // One algorithm, selected case-insensitively.
//! let one = orchestrator
//!   .compute_digests(Input::Text("abc"), Some("md4"), &PresentationOptions::default())
//!   .unwrap();
//! assert_eq!(one["MD4"].to_string(), "a448017aaf21d8525fc10ae87aa6729d");
//!
//! // Every registered algorithm, in sorted id order.
//! let all = orchestrator
//!   .compute_digests(Input::Text("abc"), None, &PresentationOptions::default())
//!   .unwrap();
//! let ids: Vec<String> = all.keys().cloned().collect();
//! assert_eq!(ids, orchestrator.supported_algorithms());
//! ```

// =============================================================================
// Engine
// =============================================================================

pub use engine::{
  AlgorithmError,
  AlgorithmRegistry,
  DigestFn,
  DigestOrchestrator,
  DigestOutcome,
  EngineError,
  Input,
  PresentationOptions,
  ResultSet,
};

// =============================================================================
// Native hash implementations
// =============================================================================

pub use hashes::crypto::{Md4, ntlm_digest};
pub use traits::Digest;
