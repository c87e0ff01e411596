//! From-scratch hash implementations for hashit.
//!
//! This crate holds the algorithms hashit cannot delegate to a trusted
//! ecosystem implementation: MD4 (RFC 1320) and its NTLM derivation. It is
//! `no_std` compatible (`alloc` is used only for the NTLM re-encoding
//! buffer) and has zero library dependencies outside the hashit workspace.
//! Dev-only dependencies are used for oracle testing and benchmarking.
//!
//! MD4 is cryptographically broken. It is provided for compatibility with
//! legacy formats (NTLM in particular), not for security.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

pub mod crypto;

mod util;

pub use traits::Digest;
