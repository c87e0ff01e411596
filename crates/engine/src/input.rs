//! Canonical engine input.

/// Input to a digest batch.
///
/// Text is converted to bytes exactly once per invocation via
/// [`as_bytes`](Self::as_bytes); the text form is retained because NTLM is
/// defined over a UTF-16LE re-encoding of the characters, not over the raw
/// UTF-8 bytes.
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
  /// Text input (CLI arguments, stdin).
  Text(&'a str),
  /// Raw byte input.
  Bytes(&'a [u8]),
}

impl Input<'_> {
  /// The input as a byte sequence, the form every byte-oriented algorithm
  /// consumes.
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    match self {
      Self::Text(text) => text.as_bytes(),
      Self::Bytes(bytes) => bytes,
    }
  }

  /// The input as text, if it has a text form.
  ///
  /// `Bytes` input yields the decoded string only when it is valid UTF-8.
  #[must_use]
  pub fn as_text(&self) -> Option<&str> {
    match self {
      Self::Text(text) => Some(text),
      Self::Bytes(bytes) => core::str::from_utf8(bytes).ok(),
    }
  }

  /// Whether the input is zero-length.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.as_bytes().is_empty()
  }
}

impl<'a> From<&'a str> for Input<'a> {
  fn from(text: &'a str) -> Self {
    Self::Text(text)
  }
}

impl<'a> From<&'a [u8]> for Input<'a> {
  fn from(bytes: &'a [u8]) -> Self {
    Self::Bytes(bytes)
  }
}
