#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use traits::Digest;

use crate::util::rotl32;

const BLOCK_LEN: usize = 64;

// MD4 initial state (RFC 1320 §3.3).
const H0: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

// Round 2 and 3 additive constants (RFC 1320 §3.4).
const K2: u32 = 0x5a82_7999;
const K3: u32 = 0x6ed9_eba1;

/// Selection: for each bit, picks `y` or `z` depending on `x`.
#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
  (x & y) | (!x & z)
}

/// Majority: each bit is set iff at least two inputs have it set.
#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
  (x & y) | (x & z) | (y & z)
}

/// Parity.
#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
  x ^ y ^ z
}

/// MD4 (RFC 1320).
///
/// Cryptographically broken; kept only because NTLM and other legacy formats
/// are defined over it and no commonly deployed standard library exposes it.
#[derive(Clone)]
pub struct Md4 {
  state: [u32; 4],
  block: [u8; BLOCK_LEN],
  block_len: usize,
  bytes_hashed: u64,
}

impl Default for Md4 {
  #[inline]
  fn default() -> Self {
    Self {
      state: H0,
      block: [0u8; BLOCK_LEN],
      block_len: 0,
      bytes_hashed: 0,
    }
  }
}

impl Md4 {
  #[inline(always)]
  fn compress_block(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
    let mut w = [0u32; 16];
    let (chunks, _) = block.as_chunks::<4>();
    for (i, c) in chunks.iter().enumerate() {
      w[i] = u32::from_le_bytes(*c);
    }

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];

    // Each step feeds the previous step's output into the next, so the
    // sixteen steps of every round must run in exactly this order.
    macro_rules! r1 {
      ($a:ident, $b:ident, $c:ident, $d:ident, $wi:expr, $s:expr) => {
        $a = rotl32($a.wrapping_add(f($b, $c, $d)).wrapping_add($wi), $s);
      };
    }

    macro_rules! r2 {
      ($a:ident, $b:ident, $c:ident, $d:ident, $wi:expr, $s:expr) => {
        $a = rotl32($a.wrapping_add(g($b, $c, $d)).wrapping_add($wi).wrapping_add(K2), $s);
      };
    }

    macro_rules! r3 {
      ($a:ident, $b:ident, $c:ident, $d:ident, $wi:expr, $s:expr) => {
        $a = rotl32($a.wrapping_add(h($b, $c, $d)).wrapping_add($wi).wrapping_add(K3), $s);
      };
    }

    // Round 1: message words in order, shifts cycling {3, 7, 11, 19}.
    r1!(a, b, c, d, w[0], 3);
    r1!(d, a, b, c, w[1], 7);
    r1!(c, d, a, b, w[2], 11);
    r1!(b, c, d, a, w[3], 19);
    r1!(a, b, c, d, w[4], 3);
    r1!(d, a, b, c, w[5], 7);
    r1!(c, d, a, b, w[6], 11);
    r1!(b, c, d, a, w[7], 19);
    r1!(a, b, c, d, w[8], 3);
    r1!(d, a, b, c, w[9], 7);
    r1!(c, d, a, b, w[10], 11);
    r1!(b, c, d, a, w[11], 19);
    r1!(a, b, c, d, w[12], 3);
    r1!(d, a, b, c, w[13], 7);
    r1!(c, d, a, b, w[14], 11);
    r1!(b, c, d, a, w[15], 19);

    // Round 2: columns of the 4x4 word matrix, shifts cycling {3, 5, 9, 13}.
    r2!(a, b, c, d, w[0], 3);
    r2!(d, a, b, c, w[4], 5);
    r2!(c, d, a, b, w[8], 9);
    r2!(b, c, d, a, w[12], 13);
    r2!(a, b, c, d, w[1], 3);
    r2!(d, a, b, c, w[5], 5);
    r2!(c, d, a, b, w[9], 9);
    r2!(b, c, d, a, w[13], 13);
    r2!(a, b, c, d, w[2], 3);
    r2!(d, a, b, c, w[6], 5);
    r2!(c, d, a, b, w[10], 9);
    r2!(b, c, d, a, w[14], 13);
    r2!(a, b, c, d, w[3], 3);
    r2!(d, a, b, c, w[7], 5);
    r2!(c, d, a, b, w[11], 9);
    r2!(b, c, d, a, w[15], 13);

    // Round 3: bit-reversed word order, shifts cycling {3, 9, 11, 15}.
    r3!(a, b, c, d, w[0], 3);
    r3!(d, a, b, c, w[8], 9);
    r3!(c, d, a, b, w[4], 11);
    r3!(b, c, d, a, w[12], 15);
    r3!(a, b, c, d, w[2], 3);
    r3!(d, a, b, c, w[10], 9);
    r3!(c, d, a, b, w[6], 11);
    r3!(b, c, d, a, w[14], 15);
    r3!(a, b, c, d, w[1], 3);
    r3!(d, a, b, c, w[9], 9);
    r3!(c, d, a, b, w[5], 11);
    r3!(b, c, d, a, w[13], 15);
    r3!(a, b, c, d, w[3], 3);
    r3!(d, a, b, c, w[11], 9);
    r3!(c, d, a, b, w[7], 11);
    r3!(b, c, d, a, w[15], 15);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
  }

  #[inline]
  fn finalize_inner(&self) -> [u8; 16] {
    let mut state = self.state;
    let mut block = self.block;
    let mut block_len = self.block_len;
    let total_len = self.bytes_hashed.wrapping_add(block_len as u64);

    // Padding is never omitted: the 0x80 marker always goes in, and if the
    // 8-byte length no longer fits, a full extra block is processed.
    block[block_len] = 0x80;
    block_len += 1;

    if block_len > 56 {
      block[block_len..].fill(0);
      Self::compress_block(&mut state, &block);
      block = [0u8; BLOCK_LEN];
      block_len = 0;
    }

    block[block_len..56].fill(0);

    let bit_len = total_len.wrapping_mul(8);
    block[56..64].copy_from_slice(&bit_len.to_le_bytes());
    Self::compress_block(&mut state, &block);

    let mut out = [0u8; 16];
    for (i, word) in state.iter().copied().enumerate() {
      let offset = i * 4;
      out[offset..offset + 4].copy_from_slice(&word.to_le_bytes());
    }
    out
  }
}

impl Digest for Md4 {
  const OUTPUT_SIZE: usize = 16;
  type Output = [u8; 16];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.block_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.block_len, data.len());
      self.block[self.block_len..self.block_len + take].copy_from_slice(&data[..take]);
      self.block_len += take;
      data = &data[take..];

      if self.block_len == BLOCK_LEN {
        Self::compress_block(&mut self.state, &self.block);
        self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u64);
        self.block_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    if !blocks.is_empty() {
      for block in blocks {
        Self::compress_block(&mut self.state, block);
      }
      self.bytes_hashed = self.bytes_hashed.wrapping_add((blocks.len() * BLOCK_LEN) as u64);
    }
    data = rest;

    if !data.is_empty() {
      self.block[..data.len()].copy_from_slice(data);
      self.block_len = data.len();
    }
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.finalize_inner()
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use super::Md4;
  use crate::Digest as _;

  fn hex16(bytes: &[u8; 16]) -> alloc::string::String {
    use alloc::string::String;
    use core::fmt::Write;
    let mut s = String::new();
    for &b in bytes {
      write!(&mut s, "{:02x}", b).unwrap();
    }
    s
  }

  #[test]
  fn rfc1320_vectors() {
    // The full appendix A.5 suite.
    assert_eq!(hex16(&Md4::digest(b"")), "31d6cfe0d16ae931b73c59d7e0c089c0");
    assert_eq!(hex16(&Md4::digest(b"a")), "bde52cb31de33e46245e05fbdbd6fb24");
    assert_eq!(hex16(&Md4::digest(b"abc")), "a448017aaf21d8525fc10ae87aa6729d");
    assert_eq!(hex16(&Md4::digest(b"message digest")), "d9130a8164549fe818874806e1c7014b");
    assert_eq!(
      hex16(&Md4::digest(b"abcdefghijklmnopqrstuvwxyz")),
      "d79e1c308aa5bbcdeea8ed63df412da9"
    );
    assert_eq!(
      hex16(&Md4::digest(
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"
      )),
      "043f8582f241db351ce627e153e7f0e4"
    );
    assert_eq!(
      hex16(&Md4::digest(
        b"12345678901234567890123456789012345678901234567890123456789012345678901234567890"
      )),
      "e33b4ddc9c38f2199c3e7b164fcc0536"
    );
  }

  #[test]
  fn streaming_matches_one_shot() {
    let data: alloc::vec::Vec<u8> = (0u16..1000).map(|i| (i % 251) as u8).collect();
    let expected = Md4::digest(&data);

    for step in [1usize, 3, 63, 64, 65, 127] {
      let mut hasher = Md4::new();
      for chunk in data.chunks(step) {
        hasher.update(chunk);
      }
      assert_eq!(hasher.finalize(), expected, "chunk size {step}");
    }
  }

  #[test]
  fn padding_boundaries() {
    // 55 bytes leaves exactly room for 0x80 + length; 56..=63 force an
    // extra all-padding block.
    for len in [0usize, 1, 55, 56, 57, 63, 64, 65, 119, 120, 128] {
      let data = alloc::vec![0xabu8; len];
      let one_shot = Md4::digest(&data);
      let mut hasher = Md4::new();
      hasher.update(&data);
      assert_eq!(hasher.finalize(), one_shot, "len {len}");
      assert_eq!(one_shot.len(), Md4::OUTPUT_SIZE);
    }
  }

  #[test]
  fn finalize_is_idempotent() {
    let mut hasher = Md4::new();
    hasher.update(b"hello world");
    let first = hasher.finalize();
    assert_eq!(hasher.finalize(), first);

    hasher.reset();
    hasher.update(b"hello world");
    assert_eq!(hasher.finalize(), first);
  }
}
