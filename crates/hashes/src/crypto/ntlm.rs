//! NTLM hash derivation.
//!
//! NTLM is MD4 over the UTF-16LE encoding of the input text, not over its
//! raw bytes. "Character" here means a UTF-16 code unit: scalars outside
//! the basic multilingual plane encode as surrogate pairs (two code units,
//! four bytes), which matches the conventional NTLM definition used by
//! Windows and by `Buffer.from(s, 'utf16le')` elsewhere. ASCII-only input
//! therefore interleaves a zero byte after every character, and any
//! non-ASCII input hashes differently from MD4 of its UTF-8 bytes.

use alloc::vec::Vec;
use traits::Digest as _;

use crate::crypto::Md4;

/// Compute the NTLM hash of `text`.
#[must_use]
pub fn ntlm_digest(text: &str) -> [u8; 16] {
  let mut encoded = Vec::with_capacity(text.len() * 2);
  for unit in text.encode_utf16() {
    encoded.extend_from_slice(&unit.to_le_bytes());
  }
  Md4::digest(&encoded)
}
