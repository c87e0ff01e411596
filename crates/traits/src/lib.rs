//! Core digest trait for hashit.
//!
//! This crate provides the foundational trait that all hashit digest
//! implementations conform to. It is `no_std` compatible and has zero
//! dependencies.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod digest;

pub use digest::Digest;
