//! Cryptographic hash functions (legacy, **BROKEN** — compatibility only).

pub mod md4;
pub mod ntlm;

pub use md4::Md4;
pub use ntlm::ntlm_digest;
