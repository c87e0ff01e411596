//! Standard algorithm table.
//!
//! MD4 and NTLM come from the workspace's own `hashes` crate; everything
//! else is a thin wrapper over a trusted ecosystem implementation. Every
//! wrapper has the uniform [`DigestFn`] shape, so the registry never
//! distinguishes native from delegated algorithms.
//!
//! Checksums serialize big-endian (CRC16 as 2 bytes, CRC32 and Adler-32 as
//! 4), so the uniform hex encoding reproduces the zero-padded numeric hex
//! of tools that print them as numbers.

use hashes::crypto::{Md4, ntlm_digest};
use traits::Digest as _;

use crate::error::AlgorithmError;
use crate::input::Input;
use crate::registry::{AlgorithmRegistry, DigestFn};

// The JS `crc` package computes CRC-16/ARC and CRC-32/ISO-HDLC; keep the
// same parameter sets so digests stay comparable across implementations.
const CRC16: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_ARC);
const CRC32: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);

/// Wrap a RustCrypto hash behind the uniform digest signature.
fn rust_crypto<D: digest::Digest + 'static>() -> DigestFn {
  Box::new(|input: &Input<'_>| Ok(D::digest(input.as_bytes()).to_vec()))
}

fn md4_fn() -> DigestFn {
  Box::new(|input: &Input<'_>| Ok(Md4::digest(input.as_bytes()).to_vec()))
}

fn ntlm_fn() -> DigestFn {
  Box::new(|input: &Input<'_>| {
    let text = input
      .as_text()
      .ok_or_else(|| AlgorithmError::new("ntlm requires text input (bytes are not valid utf-8)"))?;
    Ok(ntlm_digest(text).to_vec())
  })
}

fn crc16_fn() -> DigestFn {
  Box::new(|input: &Input<'_>| Ok(CRC16.checksum(input.as_bytes()).to_be_bytes().to_vec()))
}

fn crc32_fn() -> DigestFn {
  Box::new(|input: &Input<'_>| Ok(CRC32.checksum(input.as_bytes()).to_be_bytes().to_vec()))
}

fn adler32_fn() -> DigestFn {
  Box::new(|input: &Input<'_>| {
    let mut adler = simd_adler32::Adler32::new();
    adler.write(input.as_bytes());
    Ok(adler.finish().to_be_bytes().to_vec())
  })
}

/// Register the full standard algorithm set.
pub(crate) fn register_standard(registry: &mut AlgorithmRegistry) {
  registry.register("MD4", md4_fn());
  registry.register("NTLM", ntlm_fn());

  registry.register("MD5", rust_crypto::<md5::Md5>());
  registry.register("SHA1", rust_crypto::<sha1::Sha1>());
  registry.register("SHA224", rust_crypto::<sha2::Sha224>());
  registry.register("SHA256", rust_crypto::<sha2::Sha256>());
  registry.register("SHA384", rust_crypto::<sha2::Sha384>());
  registry.register("SHA512", rust_crypto::<sha2::Sha512>());
  registry.register("SHA3-224", rust_crypto::<sha3::Sha3_224>());
  registry.register("SHA3-256", rust_crypto::<sha3::Sha3_256>());
  registry.register("SHA3-384", rust_crypto::<sha3::Sha3_384>());
  registry.register("SHA3-512", rust_crypto::<sha3::Sha3_512>());
  registry.register("RIPEMD160", rust_crypto::<ripemd::Ripemd160>());

  registry.register("CRC16", crc16_fn());
  registry.register("CRC32", crc32_fn());
  registry.register("ADLER32", adler32_fn());
}
