#![allow(clippy::indexing_slicing)] // Fixed-size array indexing and block parsing

#[inline(always)]
pub const fn rotl32(x: u32, n: u32) -> u32 {
  x.rotate_left(n)
}
